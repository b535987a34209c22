use once_cell::sync::Lazy;
use regex::Regex;

/// Report-format revision the pattern table implements
///
/// Revision 2 is the layout where the last power event may carry a trailing
/// " for N sec." clause and a lost-communication report drops every telemetry
/// line.
pub const GRAMMAR_REVISION: u32 = 2;

/// Compiled patterns for every labelled line of a `pwrstat -status` report
#[derive(Debug)]
pub struct Grammar {
    pub revision: u32,

    // Properties
    pub model_name: Regex,
    pub firmware_number: Regex,
    pub rating_voltage: Regex,
    pub rating_power: Regex,

    // Current UPS status
    pub state: Regex,
    pub power_supply_by: Regex,
    pub utility_voltage: Regex,
    pub output_voltage: Regex,
    pub battery_capacity: Regex,
    pub remaining_runtime: Regex,
    pub load: Regex,
    pub line_interaction: Regex,
    pub test_result: Regex,
    pub last_power_event: Regex,
    pub last_power_event_none: Regex,
    pub duration_clause: Regex,
}

/// Shared pattern table, compiled on first use
pub static GRAMMAR: Lazy<Grammar> = Lazy::new(Grammar::new);

/// One report line: indent, label, dot leader, then `value`
fn line(label: &str, value: &str) -> Regex {
    let pattern = format!(
        r"(?m)^[ \t]*{}\.+[ \t]*{}[ \t\r]*$",
        regex::escape(label),
        value
    );
    Regex::new(&pattern).unwrap_or_else(|e| panic!("bad pattern for '{label}': {e}"))
}

const TOKEN: &str = r"([A-Za-z0-9]+)";
const TEXT: &str = r"(\S.*?)";

impl Grammar {
    fn new() -> Self {
        Self {
            revision: GRAMMAR_REVISION,

            model_name: line("Model Name", TOKEN),
            firmware_number: line("Firmware Number", TOKEN),
            rating_voltage: line("Rating Voltage", r"(\d+)[ \t]*V"),
            rating_power: line("Rating Power", r"(\d+)[ \t]*Watt\([ \t]*(\d+)[ \t]*VA\)"),

            state: line("State", TEXT),
            power_supply_by: line("Power Supply by", TEXT),
            utility_voltage: line("Utility Voltage", r"(\d+)[ \t]*V"),
            output_voltage: line("Output Voltage", r"(\d+)[ \t]*V"),
            battery_capacity: line("Battery Capacity", r"(\d+)[ \t]*%"),
            remaining_runtime: line("Remaining Runtime", r"(\d+)[ \t]*min\.?"),
            load: line("Load", r"(\d+)[ \t]*Watt\([ \t]*(\d+)[ \t]*%\)"),
            line_interaction: line("Line Interaction", TEXT),
            test_result: line("Test Result", TEXT),
            last_power_event: line("Last Power Event", TEXT),
            last_power_event_none: line("Last Power Event", "None"),
            duration_clause: Regex::new(r"^(\d+)[ \t]+(\S+)$")
                .unwrap_or_else(|e| panic!("bad duration clause pattern: {e}")),
        }
    }
}
