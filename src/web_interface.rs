use crate::{
    accessor::DashboardClient,
    dto::{DashboardData, Device},
    template::{ChartPanel, DashboardTemplate, DevicesTemplate, StatCard},
    util::{
        plot::plot_series_svg,
        static_file::StaticFile,
        template::into_response,
    },
};
use axum::{
    extract::{FromRef, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use itertools::Itertools;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::info;

// Application shared state: everything is read-only after startup.
#[derive(Clone, FromRef)]
struct AppState {
    catalog: Arc<DashboardData>,
    devices: Arc<Vec<Device>>,
    client: Arc<DashboardClient>,
}

async fn index(client: State<Arc<DashboardClient>>) -> impl IntoResponse {
    let data = client.fetch().await;

    let template = DashboardTemplate {
        stat_cards: stat_cards(),
        charts: build_charts(&data),
        server_time: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    };

    into_response(&template)
}

async fn device_list(devices: State<Arc<Vec<Device>>>) -> impl IntoResponse {
    into_response(&DevicesTemplate {
        devices: devices.to_vec(),
    })
}

async fn dashboard_data(catalog: State<Arc<DashboardData>>) -> Json<DashboardData> {
    Json(catalog.as_ref().clone())
}

fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Temperature",
            value: "25°C",
            icon: "thermometer",
            description: "Ambient temperature",
        },
        StatCard {
            title: "Illuminance",
            value: "800 lux",
            icon: "sun",
            description: "Outdoor light level",
        },
        StatCard {
            title: "Weather Report",
            value: "Partly Cloudy",
            icon: "cloud-sun",
            description: "Light breeze",
        },
        StatCard {
            title: "Power Factor",
            value: "0.98",
            icon: "gauge",
            description: "Optimal efficiency",
        },
        StatCard {
            title: "Battery Voltage",
            value: "48.2 V",
            icon: "battery-charging",
            description: "Nominal voltage",
        },
        StatCard {
            title: "Frequency",
            value: "50.1 Hz",
            icon: "zap",
            description: "Stable frequency",
        },
        StatCard {
            title: "Solar Power",
            value: "4.2 kW",
            icon: "sun",
            description: "+20.1% from last hour",
        },
        StatCard {
            title: "Energy",
            value: "15.3 kWh",
            icon: "zap",
            description: "Total generated today",
        },
    ]
}

fn build_charts(data: &DashboardData) -> Vec<ChartPanel> {
    let mut charts = Vec::with_capacity(4);

    let labels = data
        .solar_generation_data
        .iter()
        .map(|s| s.time.as_str())
        .collect_vec();
    let powers = data
        .solar_generation_data
        .iter()
        .map(|s| s.power)
        .collect_vec();
    if let Ok(svg) = plot_series_svg(&labels, &[("Power (kW)", powers)]) {
        charts.push(ChartPanel {
            title: "Solar Generation",
            svg,
        });
    }

    let labels = data
        .battery_load_data
        .iter()
        .map(|s| s.time.as_str())
        .collect_vec();
    let batteries = data
        .battery_load_data
        .iter()
        .map(|s| s.battery)
        .collect_vec();
    let loads = data.battery_load_data.iter().map(|s| s.load).collect_vec();
    if let Ok(svg) = plot_series_svg(
        &labels,
        &[("Battery (%)", batteries), ("Load (kW)", loads)],
    ) {
        charts.push(ChartPanel {
            title: "Battery & Load",
            svg,
        });
    }

    for (title, series) in [
        ("Solar Parameters", &data.solar_parameters_data),
        ("AC Parameters", &data.ac_parameters_data),
    ] {
        let labels = series.iter().map(|s| s.time.as_str()).collect_vec();
        let voltages = series.iter().map(|s| s.voltage).collect_vec();
        let currents = series.iter().map(|s| s.current).collect_vec();
        if let Ok(svg) = plot_series_svg(
            &labels,
            &[("Voltage (V)", voltages), ("Current (A)", currents)],
        ) {
            charts.push(ChartPanel { title, svg });
        }
    }

    charts
}

pub async fn start_server(
    http_addr: String,
    catalog: DashboardData,
    devices: Vec<Device>,
    client: DashboardClient,
) -> anyhow::Result<()> {
    info!("Starting web server @ {}", http_addr);

    // build our application with a single route
    let app = Router::new()
        .route("/", get(index))
        .route("/devices", get(device_list))
        .route("/api/dashboard-data", get(dashboard_data))
        .route("/static/*file", get(static_handler))
        .fallback_service(get(not_found))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        // Create the application state
        .with_state(AppState {
            catalog: Arc::new(catalog),
            devices: Arc::new(devices),
            client: Arc::new(client),
        });

    let listener = TcpListener::bind(&http_addr).await?;
    info!("Listening on {}", &http_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

// We use a wildcard matcher ("/static/*file") to match against everything
// within our embedded assets directory.
async fn static_handler(uri: Uri) -> impl IntoResponse {
    let mut path = uri.path().trim_start_matches('/').to_string();

    if path.starts_with("static/") {
        path = path.replace("static/", "");
    }

    StaticFile(path)
}

// Finally, we use a fallback route for anything that didn't match.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html("<h1>404</h1><p>Not Found</p>"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[tokio::test]
    async fn endpoint_serves_the_catalogue_as_json() {
        let state = State(Arc::new(catalog::dashboard_data()));
        let Json(body) = dashboard_data(state).await;

        let value = serde_json::to_value(&body).unwrap();
        for key in [
            "solarGenerationData",
            "batteryLoadData",
            "solarParametersData",
            "acParametersData",
        ] {
            assert_eq!(value[key].as_array().unwrap().len(), 12);
        }
        assert_eq!(body, catalog::dashboard_data());
    }

    #[test]
    fn dashboard_renders_four_charts() {
        let charts = build_charts(&catalog::dashboard_data());

        assert_eq!(charts.len(), 4);
        assert!(charts.iter().all(|c| c.svg.contains("<svg")));
        assert_eq!(charts[0].title, "Solar Generation");
    }

    #[test]
    fn dashboard_has_eight_stat_cards() {
        assert_eq!(stat_cards().len(), 8);
    }

    #[tokio::test]
    async fn fallback_route_answers_not_found() {
        let response = not_found().await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
