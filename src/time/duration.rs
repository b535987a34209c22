use crate::error::ExtractError;
use std::time::Duration;

/// Resolve a magnitude and unit token from the report ("3", "sec") into a duration
///
/// Only "sec" and "min" are recognized. A single trailing '.' on the unit is
/// accepted since the report ends the clause with one.
pub fn resolve_duration(magnitude: u64, unit: &str) -> Result<Duration, ExtractError> {
    let token = unit.trim();
    match token.strip_suffix('.').unwrap_or(token) {
        "sec" => Ok(Duration::from_secs(magnitude)),
        "min" => Ok(Duration::from_secs(magnitude.saturating_mul(60))),
        _ => Err(ExtractError::UnknownDurationUnit(token.to_string())),
    }
}

/// Resolve an optional clause; absence means no elapsed time
pub fn resolve_optional_duration(clause: Option<(u64, &str)>) -> Result<Duration, ExtractError> {
    match clause {
        Some((magnitude, unit)) => resolve_duration(magnitude, unit),
        None => Ok(Duration::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds() {
        assert_eq!(resolve_duration(3, "sec").unwrap(), Duration::from_secs(3));
        assert_eq!(resolve_duration(3, "sec.").unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn test_minutes() {
        assert_eq!(resolve_duration(3, "min").unwrap(), Duration::from_secs(180));
        assert_eq!(resolve_duration(28, "min.").unwrap(), Duration::from_secs(28 * 60));
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            resolve_duration(2, "hr").unwrap_err(),
            ExtractError::UnknownDurationUnit("hr".to_string())
        );
        assert!(resolve_duration(2, "").is_err());
        assert!(resolve_duration(2, "seconds").is_err());
    }

    #[test]
    fn test_absent_clause_is_zero() {
        assert_eq!(resolve_optional_duration(None).unwrap(), Duration::ZERO);
        assert_eq!(
            resolve_optional_duration(Some((0, "sec"))).unwrap(),
            Duration::ZERO
        );
    }
}
