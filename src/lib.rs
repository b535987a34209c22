pub mod collector;
pub mod config;
pub mod error;
pub mod gauges;
pub mod parser;
pub mod store;
pub mod time;
pub mod types;

pub use collector::Collector;
pub use config::Config;
pub use error::{ExtractError, Field, ParseError, PwrstatError};
pub use parser::{parse_identity, parse_report, parse_report_file, parse_status};
pub use store::StatusDatabase;
pub use types::{DeviceIdentity, DeviceStatus, Report};

/// Parse one captured snapshot, log it and persist the status when a store is given
pub fn handle_snapshot(text: &str, db: Option<&StatusDatabase>) -> error::Result<Report> {
    let report = parse_report(text)?;
    let status = &report.status;

    if parser::is_comm_fault(&status.state) {
        log::warn!(
            "{}: {} (last test {} at {})",
            report.identity.model_name,
            status.state,
            status.test_result,
            status.test_result_time
        );
    } else {
        log::info!(
            "{}: {}, {} on {}, battery {}%, load {} W ({}%), runtime {} min",
            report.identity.model_name,
            status.state,
            status.output_voltage,
            status.power_supply_by,
            status.battery_capacity,
            status.load_watts,
            status.load_pct,
            status.remaining_runtime.as_secs() / 60
        );
    }

    if let Some(db) = db {
        db.insert(status)?;
    }
    Ok(report)
}

/// Run the collector once and handle its output
pub fn poll_once(collector: &Collector, db: Option<&StatusDatabase>) -> error::Result<Report> {
    let text = collector.collect()?;
    handle_snapshot(&text, db)
}

/// Poll the UPS forever at the configured interval
///
/// A failed tick is logged and skipped; the loop only ends on a startup error.
pub fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    log::info!("starting with config: {:?}", config);

    let collector = Collector::new(&config.command_path);
    let db = if config.db_enabled {
        Some(StatusDatabase::open(&config.db_path)?)
    } else {
        None
    };

    loop {
        log::debug!("gathering stats");
        if let Err(e) = poll_once(&collector, db.as_ref()) {
            log::error!("collection failed: {}", e);
        }
        std::thread::sleep(config.poll_interval());
    }
}
