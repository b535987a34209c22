use std::fmt;
use thiserror::Error;

/// Failure of a single field extraction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    #[error("could not find any matches")]
    NoMatch,

    #[error("expected exactly one match, found {count}")]
    AmbiguousMatch { count: usize },

    #[error("capture group {index} out of range, pattern has {groups}")]
    GroupIndexOutOfRange { index: usize, groups: usize },

    #[error("'{input}' is not an integer: {source}")]
    NumericConversion {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: u32, min: u32, max: u32 },

    #[error("unknown duration unit: '{0}'")]
    UnknownDurationUnit(String),

    #[error("unable to parse date '{input}': {reason}")]
    TimestampFormat { input: String, reason: String },

    #[error("missing required clause: '{0}'")]
    MissingRequiredClause(&'static str),
}

/// Report fields, used to attribute a parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ModelName,
    FirmwareNumber,
    RatingVoltage,
    RatingPower,
    State,
    TestResult,
    LastPowerEvent,
    PowerSupplyBy,
    LineInteraction,
    UtilityVoltage,
    OutputVoltage,
    BatteryCapacity,
    RemainingRuntime,
    Load,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::ModelName => "model name",
            Field::FirmwareNumber => "firmware number",
            Field::RatingVoltage => "rating voltage",
            Field::RatingPower => "rating power",
            Field::State => "state",
            Field::TestResult => "test result",
            Field::LastPowerEvent => "last power event",
            Field::PowerSupplyBy => "power supply",
            Field::LineInteraction => "line interaction",
            Field::UtilityVoltage => "utility voltage",
            Field::OutputVoltage => "output voltage",
            Field::BatteryCapacity => "battery capacity",
            Field::RemainingRuntime => "remaining runtime",
            Field::Load => "load",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse failure attributed to the first field that failed
#[derive(Error, Debug, Clone, PartialEq)]
#[error("unable to parse {field}: {source}")]
pub struct ParseError {
    pub field: Field,
    #[source]
    pub source: ExtractError,
}

/// Attaches the originating field to an extraction result
pub trait FieldResultExt<T> {
    fn field(self, field: Field) -> std::result::Result<T, ParseError>;
}

impl<T> FieldResultExt<T> for std::result::Result<T, ExtractError> {
    fn field(self, field: Field) -> std::result::Result<T, ParseError> {
        self.map_err(|source| ParseError { field, source })
    }
}

#[derive(Error, Debug)]
pub enum PwrstatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Command exited with {status}, stderr: {stderr}")]
    Command { status: String, stderr: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(String),
}

impl From<rusqlite::Error> for PwrstatError {
    fn from(e: rusqlite::Error) -> Self {
        PwrstatError::Database(e.to_string())
    }
}

impl From<PwrstatError> for String {
    fn from(e: PwrstatError) -> Self {
        e.to_string()
    }
}

pub type Result<T> = std::result::Result<T, PwrstatError>;
