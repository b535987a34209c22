use crate::error::{ParseError, Result};
use crate::parser::device::parse_identity;
use crate::parser::status::parse_status;
use crate::types::Report;
use std::path::Path;

/// Parse both sections of one `pwrstat -status` capture
pub fn parse_report(content: &str) -> std::result::Result<Report, ParseError> {
    let identity = parse_identity(content)?;
    let status = parse_status(content)?;
    Ok(Report { identity, status })
}

/// Parse a report previously saved to disk
pub fn parse_report_file(path: &Path) -> Result<Report> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_report(&content)?)
}
