use crate::dto::Device;
use askama::Template;

const SVG_ICONS_CONTENT: &str = include_str!("../static/icons.svg");

pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub struct ChartPanel {
    pub title: &'static str,
    pub svg: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub(crate) struct DashboardTemplate {
    pub stat_cards: Vec<StatCard>,
    pub charts: Vec<ChartPanel>,
    pub server_time: String,
}

#[derive(Template)]
#[template(path = "devices.html")]
pub(crate) struct DevicesTemplate {
    pub devices: Vec<Device>,
}

fn logo() -> String {
    "<svg viewBox=\"0 0 24 24\" class=\"logo\"><use xlink:href=\"#icon-sun\"></use></svg>"
        .to_string()
}

fn icon(icon_name: &str) -> String {
    format!(
        "<svg viewBox=\"0 0 24 24\" class=\"icon icon-{}\"><use xlink:href=\"#icon-{}\"></use></svg>",
        icon_name,
        icon_name
    )
}
