use crate::collector::DEFAULT_COMMAND;
use crate::error::{PwrstatError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub command_path: PathBuf,
    pub poll_interval_secs: u64,
    pub db_enabled: bool,
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command_path: PathBuf::from(DEFAULT_COMMAND),
            poll_interval_secs: 60,
            db_enabled: false,
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pwrstat_exporter")
        .join("status.db")
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(cmd) = lookup("PWRSTAT_CMD") {
            config.command_path = PathBuf::from(cmd);
        }
        if let Some(secs) = lookup("PWRSTAT_POLL_SECS") {
            config.poll_interval_secs = secs
                .trim()
                .parse()
                .map_err(|_| PwrstatError::Config(format!("PWRSTAT_POLL_SECS: '{secs}' is not a number")))?;
            if config.poll_interval_secs == 0 {
                return Err(PwrstatError::Config("PWRSTAT_POLL_SECS must be > 0".to_string()));
            }
        }
        if let Some(flag) = lookup("PWRSTAT_DB_ENABLED") {
            config.db_enabled = parse_bool(&flag)
                .ok_or_else(|| PwrstatError::Config(format!("PWRSTAT_DB_ENABLED: '{flag}' is not a boolean")))?;
        }
        if let Some(path) = lookup("PWRSTAT_DB_PATH") {
            config.db_path = PathBuf::from(path);
        }

        Ok(config)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
