use crate::error::ExtractError;
use regex::{Captures, Regex};
use std::num::ParseIntError;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Return the captures of the single match of `re` in `text`
///
/// Zero matches is `NoMatch`; more than one is `AmbiguousMatch`, since there is
/// no way to tell which occurrence the report meant.
pub fn extract_captures<'t>(re: &Regex, text: &'t str) -> Result<Captures<'t>, ExtractError> {
    let mut matches = re.captures_iter(text);
    let caps = matches.next().ok_or(ExtractError::NoMatch)?;
    let extra = matches.count();
    if extra > 0 {
        return Err(ExtractError::AmbiguousMatch { count: extra + 1 });
    }
    Ok(caps)
}

/// Trimmed text of capture group `index`
pub fn group_str<'t>(caps: &Captures<'t>, index: usize) -> Result<&'t str, ExtractError> {
    caps.get(index)
        .map(|m| m.as_str().trim())
        .ok_or(ExtractError::GroupIndexOutOfRange {
            index,
            groups: caps.len().saturating_sub(1),
        })
}

/// Capture group `index` parsed as an integer
pub fn group_int<T>(caps: &Captures<'_>, index: usize) -> Result<T, ExtractError>
where
    T: FromStr<Err = ParseIntError>,
{
    parse_int(group_str(caps, index)?)
}

pub fn parse_int<T>(input: &str) -> Result<T, ExtractError>
where
    T: FromStr<Err = ParseIntError>,
{
    let input = input.trim();
    input.parse().map_err(|source| ExtractError::NumericConversion {
        input: input.to_string(),
        source,
    })
}

/// Reject values outside the documented range of a field
pub fn check_range(value: u32, range: RangeInclusive<u32>) -> Result<u32, ExtractError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ExtractError::OutOfRange {
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Single-field string extraction
pub fn extract_str(re: &Regex, text: &str, index: usize) -> Result<String, ExtractError> {
    check_group_index(re, index)?;
    let caps = extract_captures(re, text)?;
    group_str(&caps, index).map(str::to_string)
}

/// Single-field integer extraction
pub fn extract_int<T>(re: &Regex, text: &str, index: usize) -> Result<T, ExtractError>
where
    T: FromStr<Err = ParseIntError>,
{
    check_group_index(re, index)?;
    let caps = extract_captures(re, text)?;
    group_int(&caps, index)
}

fn check_group_index(re: &Regex, index: usize) -> Result<(), ExtractError> {
    // captures_len counts the implicit whole-match group 0
    let groups = re.captures_len() - 1;
    if index > groups {
        return Err(ExtractError::GroupIndexOutOfRange { index, groups });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voltage_re() -> Regex {
        Regex::new(r"(?m)^\s*Voltage\.+\s*(\d+)\s*V").unwrap()
    }

    #[test]
    fn test_extract_int() {
        let v: u32 = extract_int(&voltage_re(), "  Voltage....... 122 V\n", 1).unwrap();
        assert_eq!(v, 122);
    }

    #[test]
    fn test_extract_str_trims() {
        let re = Regex::new(r"Name\.+(.*)").unwrap();
        assert_eq!(extract_str(&re, "Name....   CP1500  ", 1).unwrap(), "CP1500");
    }

    #[test]
    fn test_no_match() {
        assert_eq!(
            extract_int::<u32>(&voltage_re(), "testOutputNormal", 1).unwrap_err(),
            ExtractError::NoMatch
        );
    }

    #[test]
    fn test_ambiguous_match() {
        let text = "Voltage.... 120 V\nVoltage.... 121 V\nVoltage.... 122 V\n";
        assert_eq!(
            extract_int::<u32>(&voltage_re(), text, 1).unwrap_err(),
            ExtractError::AmbiguousMatch { count: 3 }
        );
    }

    #[test]
    fn test_group_index_out_of_range() {
        assert_eq!(
            extract_str(&voltage_re(), "Voltage.... 120 V", 2).unwrap_err(),
            ExtractError::GroupIndexOutOfRange { index: 2, groups: 1 }
        );
    }

    #[test]
    fn test_unparticipating_group() {
        let re = Regex::new(r"(\d+)(?: for (\d+))?").unwrap();
        let caps = extract_captures(&re, "12").unwrap();
        assert!(matches!(
            group_str(&caps, 2),
            Err(ExtractError::GroupIndexOutOfRange { index: 2, .. })
        ));
    }

    #[test]
    fn test_numeric_conversion() {
        let re = Regex::new(r"Capacity\.+\s*(\S+)").unwrap();
        match extract_int::<u32>(&re, "Capacity.... 4x6", 1).unwrap_err() {
            ExtractError::NumericConversion { input, .. } => assert_eq!(input, "4x6"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_check_range() {
        assert_eq!(check_range(100, 0..=100), Ok(100));
        assert_eq!(
            check_range(146, 0..=100),
            Err(ExtractError::OutOfRange { value: 146, min: 0, max: 100 })
        );
        assert!(check_range(0, 1..=u32::MAX).is_err());
    }

    #[test]
    fn test_parse_int_overflow() {
        assert!(parse_int::<u32>("99999999999").is_err());
        assert_eq!(parse_int::<u64>(" 3 ").unwrap(), 3);
    }
}
