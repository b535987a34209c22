use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Static identity of the UPS, from the "Properties" section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeviceIdentity {
    pub model_name: String,
    pub firmware_number: String,
    pub rating_voltage: u32,
    pub rating_power_watts: u32,
    pub rating_power_va: u32,
}

/// Telemetry from the "Current UPS status" section
///
/// When `state` is a communication fault only `state`, the test result and the
/// last power event are filled in; everything else keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatus {
    pub state: String,
    pub power_supply_by: String,
    pub utility_voltage: u32,
    pub output_voltage: u32,
    pub battery_capacity: u32,
    #[serde(with = "duration_secs")]
    pub remaining_runtime: Duration,
    pub load_watts: u32,
    pub load_pct: u32,
    pub line_interaction: String,
    pub test_result: String,
    pub test_result_time: NaiveDateTime,
    pub last_power_event: String,
    pub last_power_event_time: Option<NaiveDateTime>,
    #[serde(with = "duration_secs")]
    pub last_power_event_duration: Duration,
    pub collection_time: DateTime<Local>,
}

/// Both records parsed from one report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub identity: DeviceIdentity,
    pub status: DeviceStatus,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}
