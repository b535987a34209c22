mod conversion;
mod duration;

pub use conversion::{
    collection_ts_key, format_report_time, parse_collection_ts, parse_report_time,
    REPORT_TIME_FORMAT,
};
pub use duration::{resolve_duration, resolve_optional_duration};
