//! Projection of a status record onto flat gauge samples
//!
//! Samples are plain data labelled by model name; pushing them to a metrics
//! backend is left to the caller.

use crate::parser::COMM_FAULT_STATE;
use crate::types::{DeviceIdentity, DeviceStatus};
use serde::Serialize;

pub const NAMESPACE: &str = "pwrstat_exporter";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeSample {
    pub name: String,
    pub help: &'static str,
    pub model_name: String,
    pub value: f64,
}

/// 0=Normal / 1=Power Failure / 2=Lost Communication
fn state_code(state: &str) -> Option<f64> {
    match state {
        "Normal" => Some(0.0),
        "Power Failure" => Some(1.0),
        COMM_FAULT_STATE => Some(2.0),
        _ => None,
    }
}

/// 0=Utility Power / 1=Battery Power
fn power_source_code(source: &str) -> Option<f64> {
    match source {
        "Utility Power" => Some(0.0),
        "Battery Power" => Some(1.0),
        _ => None,
    }
}

/// Gauge samples for one collected status
///
/// Unrecognized state or power source labels produce no sample for that gauge.
pub fn gauges(identity: &DeviceIdentity, status: &DeviceStatus) -> Vec<GaugeSample> {
    let sample = |name: &str, help: &'static str, value: f64| GaugeSample {
        name: format!("{NAMESPACE}_{name}"),
        help,
        model_name: identity.model_name.clone(),
        value,
    };

    let mut out = Vec::with_capacity(10);
    if let Some(v) = state_code(&status.state) {
        out.push(sample("state", "0=Normal / 1=Power Failure / 2=Lost Communication", v));
    }
    if let Some(v) = power_source_code(&status.power_supply_by) {
        out.push(sample("power_supplied_by", "0=Utility Power / 1=Battery Power", v));
    }
    out.extend([
        sample("utility_voltage", "Utility Voltage", status.utility_voltage.into()),
        sample("output_voltage", "Output Voltage", status.output_voltage.into()),
        sample("battery_capacity", "Battery Capacity as %", status.battery_capacity.into()),
        sample(
            "remaining_runtime",
            "Remaining Runtime on battery in seconds",
            status.remaining_runtime.as_secs_f64(),
        ),
        sample("load_watts", "Current Load in watts", status.load_watts.into()),
        sample("load_pct", "Current load as %", status.load_pct.into()),
        sample(
            "last_power_event_duration",
            "How long the last power event lasted in seconds",
            status.last_power_event_duration.as_secs_f64(),
        ),
    ]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::fixtures::{OUTPUT_BLACKOUT, OUTPUT_LOST_COMM, OUTPUT_NORMAL};
    use crate::parser::parse_report;

    fn value(samples: &[GaugeSample], name: &str) -> Option<f64> {
        samples
            .iter()
            .find(|s| s.name == format!("{NAMESPACE}_{name}"))
            .map(|s| s.value)
    }

    #[test]
    fn test_normal_gauges() {
        let report = parse_report(OUTPUT_NORMAL).unwrap();
        let samples = gauges(&report.identity, &report.status);

        assert!(samples.iter().all(|s| s.model_name == "CP1500PFCLCDa"));
        assert_eq!(value(&samples, "state"), Some(0.0));
        assert_eq!(value(&samples, "power_supplied_by"), Some(0.0));
        assert_eq!(value(&samples, "utility_voltage"), Some(122.0));
        assert_eq!(value(&samples, "remaining_runtime"), Some(1680.0));
        assert_eq!(value(&samples, "load_pct"), Some(12.0));
        assert_eq!(value(&samples, "last_power_event_duration"), Some(3.0));
    }

    #[test]
    fn test_blackout_gauges() {
        let report = parse_report(OUTPUT_BLACKOUT).unwrap();
        let samples = gauges(&report.identity, &report.status);

        assert_eq!(value(&samples, "state"), Some(1.0));
        assert_eq!(value(&samples, "power_supplied_by"), Some(1.0));
        assert_eq!(value(&samples, "utility_voltage"), Some(0.0));
    }

    #[test]
    fn test_lost_comm_has_no_power_source() {
        let report = parse_report(OUTPUT_LOST_COMM).unwrap();
        let samples = gauges(&report.identity, &report.status);

        assert_eq!(value(&samples, "state"), Some(2.0));
        assert_eq!(value(&samples, "power_supplied_by"), None);
        assert_eq!(value(&samples, "battery_capacity"), Some(0.0));
    }

    #[test]
    fn test_unknown_state_is_skipped() {
        let mut report = parse_report(OUTPUT_NORMAL).unwrap();
        report.status.state = "Self Test".to_string();
        let samples = gauges(&report.identity, &report.status);
        assert_eq!(value(&samples, "state"), None);
        assert_eq!(samples.len(), 8);
    }
}
