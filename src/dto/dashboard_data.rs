use serde::{Deserialize, Serialize};

/// One sample of the solar generation series (kW).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolarGenerationSample {
    pub time: String,
    pub power: f64,
}

/// One sample of the battery state-of-charge (%) and house load (kW) series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatteryLoadSample {
    pub time: String,
    pub battery: f64,
    pub load: f64,
}

/// One voltage/current sample, shared by the solar and AC parameter series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElectricalSample {
    pub time: String,
    pub voltage: f64,
    pub current: f64,
}

/// The full payload served by `/api/dashboard-data` and consumed by the
/// fetch-with-fallback accessor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub solar_generation_data: Vec<SolarGenerationSample>,
    pub battery_load_data: Vec<BatteryLoadSample>,
    pub solar_parameters_data: Vec<ElectricalSample>,
    pub ac_parameters_data: Vec<ElectricalSample>,
}
