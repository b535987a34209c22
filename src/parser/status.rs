use crate::error::{ExtractError, Field, FieldResultExt, ParseError};
use crate::parser::extract::{
    check_range, extract_captures, extract_int, extract_str, group_int, group_str, parse_int,
};
use crate::parser::grammar::{Grammar, GRAMMAR};
use crate::time::{parse_report_time, resolve_optional_duration};
use crate::types::DeviceStatus;
use chrono::{Local, NaiveDateTime};
use std::ops::RangeInclusive;
use std::time::Duration;

/// State reported when pwrstat cannot reach the UPS
pub const COMM_FAULT_STATE: &str = "Lost Communication";

/// Last power event value when no event is on record
pub const NO_EVENT_SENTINEL: &str = "None";

const PERCENT: RangeInclusive<u32> = 0..=100;

/// Whether a reported state means the telemetry lines are missing
pub fn is_comm_fault(state: &str) -> bool {
    state == COMM_FAULT_STATE
}

/// Parsed "Last Power Event" line
#[derive(Debug, Clone, PartialEq)]
pub struct PowerEvent {
    pub label: String,
    pub at: Option<NaiveDateTime>,
    pub duration: Duration,
}

impl PowerEvent {
    fn none() -> Self {
        Self {
            label: NO_EVENT_SENTINEL.to_string(),
            at: None,
            duration: Duration::ZERO,
        }
    }
}

/// Extract the device status from the "Current UPS status" section
///
/// State, test result and last power event come first. On a communication
/// fault the report omits every other line, so the parse stops there and the
/// remaining fields keep their zero value.
pub fn parse_status(content: &str) -> Result<DeviceStatus, ParseError> {
    let g = &*GRAMMAR;

    let state = extract_str(&g.state, content, 1).field(Field::State)?;
    let (test_result, test_result_time) = test_result(g, content).field(Field::TestResult)?;
    let event = last_power_event(g, content).field(Field::LastPowerEvent)?;

    let mut status = DeviceStatus {
        state,
        test_result,
        test_result_time,
        last_power_event: event.label,
        last_power_event_time: event.at,
        last_power_event_duration: event.duration,
        ..Default::default()
    };

    if is_comm_fault(&status.state) {
        status.collection_time = Local::now();
        return Ok(status);
    }

    status.power_supply_by =
        extract_str(&g.power_supply_by, content, 1).field(Field::PowerSupplyBy)?;
    // some models never print the line, a duplicate is still an error
    status.line_interaction = match extract_str(&g.line_interaction, content, 1) {
        Err(ExtractError::NoMatch) => String::new(),
        res => res.field(Field::LineInteraction)?,
    };
    status.utility_voltage =
        extract_int(&g.utility_voltage, content, 1).field(Field::UtilityVoltage)?;
    status.output_voltage =
        extract_int(&g.output_voltage, content, 1).field(Field::OutputVoltage)?;
    status.battery_capacity = extract_int(&g.battery_capacity, content, 1)
        .and_then(|v| check_range(v, PERCENT))
        .field(Field::BatteryCapacity)?;
    status.remaining_runtime = remaining_runtime(g, content).field(Field::RemainingRuntime)?;
    (status.load_watts, status.load_pct) = load(g, content).field(Field::Load)?;

    status.collection_time = Local::now();
    Ok(status)
}

// "Passed at 2023/03/09 13:25:33"
fn test_result(g: &Grammar, content: &str) -> Result<(String, NaiveDateTime), ExtractError> {
    let value = extract_str(&g.test_result, content, 1)?;
    let (label, date) = value
        .split_once(" at ")
        .ok_or(ExtractError::MissingRequiredClause("at"))?;
    let at = parse_report_time(date)?;
    Ok((label.trim().to_string(), at))
}

// "None", or "Blackout at 2023/03/09 12:55:09[ for 3 sec.]"
fn last_power_event(g: &Grammar, content: &str) -> Result<PowerEvent, ExtractError> {
    if g.last_power_event_none.is_match(content) {
        return Ok(PowerEvent::none());
    }

    let value = extract_str(&g.last_power_event, content, 1)?;
    let (label, rest) = value
        .split_once(" at ")
        .ok_or(ExtractError::MissingRequiredClause("at"))?;

    let (date, clause) = match rest.split_once(" for ") {
        Some((date, clause)) => (date, Some(clause)),
        None => (rest, None),
    };
    let at = parse_report_time(date)?;

    let clause = match clause {
        Some(clause) => {
            let caps = extract_captures(&g.duration_clause, clause.trim())?;
            Some((group_int::<u64>(&caps, 1)?, group_str(&caps, 2)?))
        }
        None => None,
    };
    let duration = resolve_optional_duration(clause)?;

    Ok(PowerEvent {
        label: label.trim().to_string(),
        at: Some(at),
        duration,
    })
}

// "28 min."
fn remaining_runtime(g: &Grammar, content: &str) -> Result<Duration, ExtractError> {
    let caps = extract_captures(&g.remaining_runtime, content)?;
    let minutes: u64 = parse_int(group_str(&caps, 1)?)?;
    Ok(Duration::from_secs(minutes.saturating_mul(60)))
}

// "120 Watt(12 %)"
fn load(g: &Grammar, content: &str) -> Result<(u32, u32), ExtractError> {
    let caps = extract_captures(&g.load, content)?;
    Ok((group_int(&caps, 1)?, check_range(group_int(&caps, 2)?, PERCENT)?))
}
