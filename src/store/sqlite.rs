use crate::error::{PwrstatError, Result};
use crate::time::{collection_ts_key, format_report_time, parse_collection_ts, parse_report_time};
use crate::types::DeviceStatus;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::time::Duration;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS device_status (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        collection_ms INTEGER NOT NULL,
        collection_time TEXT NOT NULL,
        state TEXT NOT NULL,
        power_supply_by TEXT NOT NULL,
        utility_voltage INTEGER NOT NULL,
        output_voltage INTEGER NOT NULL,
        battery_capacity INTEGER NOT NULL,
        remaining_runtime_secs INTEGER NOT NULL,
        load_watts INTEGER NOT NULL,
        load_pct INTEGER NOT NULL,
        line_interaction TEXT NOT NULL,
        test_result TEXT NOT NULL,
        test_result_time TEXT NOT NULL,
        last_power_event TEXT NOT NULL,
        last_power_event_time TEXT,
        last_power_event_secs INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_device_status_collection_ms
        ON device_status(collection_ms);
"#;

const COLUMNS: &str = "collection_time, state, power_supply_by, utility_voltage, output_voltage, \
    battery_capacity, remaining_runtime_secs, load_watts, load_pct, line_interaction, \
    test_result, test_result_time, last_power_event, last_power_event_time, last_power_event_secs";

/// SQLite-backed history of parsed statuses, ordered by collection time
pub struct StatusDatabase {
    conn: Connection,
}

impl StatusDatabase {
    /// Open (or create) the database at `db_path`
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(db_path)?;
        log::info!("opened status database at {}", db_path.display());
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Insert one status record
    pub fn insert(&self, status: &DeviceStatus) -> Result<()> {
        self.conn.execute(
            &format!(
                "INSERT INTO device_status (collection_ms, {COLUMNS}) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)"
            ),
            params![
                status.collection_time.timestamp_millis(),
                collection_ts_key(&status.collection_time),
                status.state,
                status.power_supply_by,
                status.utility_voltage,
                status.output_voltage,
                status.battery_capacity,
                secs_column(status.remaining_runtime),
                status.load_watts,
                status.load_pct,
                status.line_interaction,
                status.test_result,
                format_report_time(&status.test_result_time),
                status.last_power_event,
                status.last_power_event_time.as_ref().map(format_report_time),
                secs_column(status.last_power_event_duration),
            ],
        )?;
        log::debug!("stored status collected at {}", status.collection_time);
        Ok(())
    }

    /// Most recently collected status, if any
    pub fn latest(&self) -> Result<Option<DeviceStatus>> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM device_status ORDER BY collection_ms DESC, id DESC LIMIT 1"),
                [],
                status_from_row,
            )
            .optional()
            .map_err(PwrstatError::from)
    }

    /// Most recent status as a JSON document
    pub fn latest_json(&self) -> Result<Option<String>> {
        match self.latest()? {
            Some(status) => Ok(Some(serde_json::to_string(&status)?)),
            None => Ok(None),
        }
    }

    /// Get total row count
    pub fn count(&self) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM device_status", [], |r| r.get(0))?;
        Ok(n as usize)
    }
}

// SQLite integers are signed, clamp instead of wrapping
fn secs_column(d: Duration) -> i64 {
    i64::try_from(d.as_secs()).unwrap_or(i64::MAX)
}

fn conversion_err<E>(idx: usize, e: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
}

fn status_from_row(r: &Row<'_>) -> rusqlite::Result<DeviceStatus> {
    let collection_time: String = r.get(0)?;
    let test_result_time: String = r.get(11)?;
    let last_power_event_time: Option<String> = r.get(13)?;

    Ok(DeviceStatus {
        collection_time: parse_collection_ts(&collection_time).map_err(|e| conversion_err(0, e))?,
        state: r.get(1)?,
        power_supply_by: r.get(2)?,
        utility_voltage: r.get(3)?,
        output_voltage: r.get(4)?,
        battery_capacity: r.get(5)?,
        remaining_runtime: Duration::from_secs(r.get::<_, i64>(6)?.max(0) as u64),
        load_watts: r.get(7)?,
        load_pct: r.get(8)?,
        line_interaction: r.get(9)?,
        test_result: r.get(10)?,
        test_result_time: parse_report_time(&test_result_time).map_err(|e| conversion_err(11, e))?,
        last_power_event: r.get(12)?,
        last_power_event_time: last_power_event_time
            .as_deref()
            .map(parse_report_time)
            .transpose()
            .map_err(|e| conversion_err(13, e))?,
        last_power_event_duration: Duration::from_secs(r.get::<_, i64>(14)?.max(0) as u64),
    })
}
