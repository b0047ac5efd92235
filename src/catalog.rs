//! The compiled-in dataset: one day of solar/battery series at a two hour
//! cadence, plus the device registry. Built once at startup and handed to the
//! web interface and the accessor as plain values.

use crate::dto::{
    BatteryLoadSample, DashboardData, Device, DeviceStatus, ElectricalSample,
    SolarGenerationSample,
};

pub const TIME_LABELS: [&str; 12] = [
    "00:00", "02:00", "04:00", "06:00", "08:00", "10:00", "12:00", "14:00", "16:00", "18:00",
    "20:00", "22:00",
];

pub fn dashboard_data() -> DashboardData {
    DashboardData {
        solar_generation_data: solar_generation(),
        battery_load_data: battery_load(),
        solar_parameters_data: electrical(
            [
                0.0, 0.0, 0.0, 350.0, 380.0, 400.0, 410.0, 405.0, 380.0, 360.0, 0.0, 0.0,
            ],
            [
                0.0, 0.0, 0.0, 1.5, 5.5, 8.8, 10.2, 9.3, 6.5, 2.2, 0.0, 0.0,
            ],
        ),
        ac_parameters_data: electrical(
            [
                228.0, 225.0, 226.0, 230.0, 232.0, 231.0, 233.0, 230.0, 229.0, 235.0, 232.0, 230.0,
            ],
            [
                5.2, 5.1, 5.0, 6.5, 8.1, 7.9, 7.5, 8.2, 9.0, 10.5, 8.5, 6.8,
            ],
        ),
    }
}

pub fn devices() -> Vec<Device> {
    vec![Device {
        id: "esp32-01".to_string(),
        name: "ESP32".to_string(),
        status: DeviceStatus::Connected,
        device_type: "Microcontroller".to_string(),
    }]
}

fn solar_generation() -> Vec<SolarGenerationSample> {
    let powers = [
        0.0, 0.0, 0.0, 0.5, 2.1, 3.5, 4.2, 3.8, 2.5, 0.8, 0.0, 0.0,
    ];

    TIME_LABELS
        .iter()
        .zip(powers)
        .map(|(time, power)| SolarGenerationSample {
            time: (*time).to_string(),
            power,
        })
        .collect()
}

fn battery_load() -> Vec<BatteryLoadSample> {
    let batteries = [
        60.0, 55.0, 50.0, 52.0, 60.0, 75.0, 85.0, 90.0, 88.0, 82.0, 75.0, 68.0,
    ];
    let loads = [
        1.2, 1.1, 1.0, 1.5, 2.0, 1.8, 1.7, 1.9, 2.2, 2.5, 2.1, 1.5,
    ];

    TIME_LABELS
        .iter()
        .zip(batteries.into_iter().zip(loads))
        .map(|(time, (battery, load))| BatteryLoadSample {
            time: (*time).to_string(),
            battery,
            load,
        })
        .collect()
}

fn electrical(voltages: [f64; 12], currents: [f64; 12]) -> Vec<ElectricalSample> {
    TIME_LABELS
        .iter()
        .zip(voltages.into_iter().zip(currents))
        .map(|(time, (voltage, current))| ElectricalSample {
            time: (*time).to_string(),
            voltage,
            current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_series_covers_the_day_in_order() {
        let data = dashboard_data();

        let label_sets = [
            data.solar_generation_data
                .iter()
                .map(|s| s.time.clone())
                .collect::<Vec<_>>(),
            data.battery_load_data
                .iter()
                .map(|s| s.time.clone())
                .collect(),
            data.solar_parameters_data
                .iter()
                .map(|s| s.time.clone())
                .collect(),
            data.ac_parameters_data
                .iter()
                .map(|s| s.time.clone())
                .collect(),
        ];

        for labels in label_sets {
            assert_eq!(labels.len(), 12);
            assert_eq!(labels, TIME_LABELS);
        }
    }

    #[test]
    fn all_values_are_non_negative() {
        let data = dashboard_data();

        assert!(data.solar_generation_data.iter().all(|s| s.power >= 0.0));
        assert!(data
            .battery_load_data
            .iter()
            .all(|s| s.battery >= 0.0 && s.load >= 0.0));
        assert!(data
            .solar_parameters_data
            .iter()
            .chain(data.ac_parameters_data.iter())
            .all(|s| s.voltage >= 0.0 && s.current >= 0.0));
    }

    #[test]
    fn solar_generation_matches_known_points() {
        let data = dashboard_data();

        assert_eq!(data.solar_generation_data[0].time, "00:00");
        assert_eq!(data.solar_generation_data[0].power, 0.0);
        assert_eq!(data.solar_generation_data[4].time, "08:00");
        assert_eq!(data.solar_generation_data[4].power, 2.1);
        assert_eq!(data.battery_load_data[7].battery, 90.0);
        assert_eq!(data.ac_parameters_data[9].current, 10.5);
    }

    #[test]
    fn device_registry_holds_the_single_esp32() {
        let devices = devices();

        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].id, "esp32-01");
        assert_eq!(devices[0].name, "ESP32");
        assert_eq!(devices[0].status, DeviceStatus::Connected);
        assert_eq!(devices[0].device_type, "Microcontroller");
    }
}
