mod device;
mod entrypoint;
mod extract;
pub mod grammar;
mod status;

#[cfg(test)]
pub(crate) mod fixtures;

pub use device::parse_identity;
pub use entrypoint::{parse_report, parse_report_file};
pub use extract::{extract_captures, extract_int, extract_str};
pub use grammar::{Grammar, GRAMMAR, GRAMMAR_REVISION};
pub use status::{is_comm_fault, parse_status, PowerEvent, COMM_FAULT_STATE, NO_EVENT_SENTINEL};
