use crate::error::{ExtractError, Field, FieldResultExt, ParseError};
use crate::parser::extract::{check_range, extract_captures, extract_int, extract_str, group_int};
use crate::parser::grammar::GRAMMAR;
use crate::types::DeviceIdentity;

/// Extract the device identity from the "Properties" section of a report
pub fn parse_identity(content: &str) -> Result<DeviceIdentity, ParseError> {
    let g = &*GRAMMAR;

    let model_name = extract_str(&g.model_name, content, 1).field(Field::ModelName)?;
    let firmware_number =
        extract_str(&g.firmware_number, content, 1).field(Field::FirmwareNumber)?;
    let rating_voltage = extract_int(&g.rating_voltage, content, 1)
        .and_then(|v| check_range(v, RATING_RANGE))
        .field(Field::RatingVoltage)?;
    let (rating_power_watts, rating_power_va) = rating_power(content).field(Field::RatingPower)?;

    Ok(DeviceIdentity {
        model_name,
        firmware_number,
        rating_voltage,
        rating_power_watts,
        rating_power_va,
    })
}

// ratings are nameplate values, zero means the line is garbage
const RATING_RANGE: std::ops::RangeInclusive<u32> = 1..=u32::MAX;

// "1000 Watt(1500 VA)"
fn rating_power(content: &str) -> Result<(u32, u32), ExtractError> {
    let caps = extract_captures(&GRAMMAR.rating_power, content)?;
    let watts = check_range(group_int(&caps, 1)?, RATING_RANGE)?;
    let va = check_range(group_int(&caps, 2)?, RATING_RANGE)?;
    Ok((watts, va))
}
