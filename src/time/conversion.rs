use crate::error::ExtractError;
use chrono::{DateTime, Local, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Layout of every date-time in a pwrstat report, e.g. "2023/03/09 13:25:33"
pub const REPORT_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

// chrono accepts unpadded fields and signed years, the report never has them
static REPORT_TIME_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}$").unwrap()
});

/// Parse a report timestamp into a naive local date-time
///
/// No timezone is inferred; the report carries the UPS host's local wall clock.
pub fn parse_report_time(input: &str) -> Result<NaiveDateTime, ExtractError> {
    let input = input.trim();
    if !REPORT_TIME_SHAPE.is_match(input) {
        return Err(ExtractError::TimestampFormat {
            input: input.to_string(),
            reason: "expected YYYY/MM/DD HH:MM:SS".to_string(),
        });
    }
    NaiveDateTime::parse_from_str(input, REPORT_TIME_FORMAT).map_err(|e| {
        ExtractError::TimestampFormat {
            input: input.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Format a naive report timestamp back into the report layout
pub fn format_report_time(ts: &NaiveDateTime) -> String {
    ts.format(REPORT_TIME_FORMAT).to_string()
}

/// Collection timestamp as stored: RFC3339 with the local offset
pub fn collection_ts_key(ts: &DateTime<Local>) -> String {
    ts.to_rfc3339()
}

/// Parse a stored collection timestamp
pub fn parse_collection_ts(s: &str) -> Result<DateTime<Local>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Local))
}
