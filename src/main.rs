mod accessor;
mod catalog;
mod dto;
mod template;
mod util;
mod web_interface;

use std::process::exit;
use std::time::Duration;

use accessor::DashboardClient;
use tracing::{error, info};
use util::{config::get_config, setup_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let http_addr = get_config().get_string("http_addr")?;
    let api_base_url = get_config().get_string("api_base_url")?;
    let cache_ttl = Duration::from_secs(get_config().get_int("cache_ttl_secs")?.try_into()?);

    info!("Smartgrid dashboard starting");

    let catalog = catalog::dashboard_data();
    let devices = catalog::devices();
    let client = DashboardClient::new(api_base_url, cache_ttl, catalog.clone())?;

    handle_result(web_interface::start_server(http_addr, catalog, devices, client).await);

    Ok(())
}

fn handle_result(res: anyhow::Result<()>) {
    if let Err(err) = res {
        error!("An error occurred: {:?}", err);
        exit(1)
    }
}
