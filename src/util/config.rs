use anyhow::Result;
use std::sync::OnceLock;

use config::{Config, FileFormat};

pub fn get_config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();

    CONFIG.get_or_init(|| build_config().unwrap())
}

fn build_config() -> Result<Config> {
    Ok(Config::builder()
        .set_default("http_addr", "127.0.0.1:3000")?
        .set_default("api_base_url", "http://127.0.0.1:3000")?
        .set_default("cache_ttl_secs", 60)?
        .add_source(config::Environment::with_prefix("SMARTGRID"))
        .add_source(config::File::new("smartgrid.toml", FileFormat::Toml).required(false))
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_api_base_url_points_at_the_local_server() {
        let config = build_config().unwrap();
        let http_addr = config.get_string("http_addr").unwrap();
        let api_base_url = config.get_string("api_base_url").unwrap();

        assert_eq!(api_base_url, format!("http://{http_addr}"));
    }
}
