pub mod dashboard_data;
pub mod device;

pub use dashboard_data::{
    BatteryLoadSample, DashboardData, ElectricalSample, SolarGenerationSample,
};
pub use device::{Device, DeviceStatus};
