use crate::error::{PwrstatError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default install location of the CyberPower query utility
pub const DEFAULT_COMMAND: &str = "/usr/sbin/pwrstat";

/// Runs `pwrstat -status` and hands back the raw report text
#[derive(Debug, Clone)]
pub struct Collector {
    command: PathBuf,
}

impl Collector {
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self { command: command.into() }
    }

    pub fn command(&self) -> &Path {
        &self.command
    }

    /// Run the command once and capture stdout
    pub fn collect(&self) -> Result<String> {
        log::debug!("running {} -status", self.command.display());

        let output = Command::new(&self.command).arg("-status").output()?;
        if !output.status.success() {
            return Err(PwrstatError::Command {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command() {
        assert_eq!(Collector::default().command(), Path::new("/usr/sbin/pwrstat"));
    }

    #[test]
    fn test_missing_command() {
        let err = Collector::new("/nonexistent/pwrstat").collect().unwrap_err();
        assert!(matches!(err, PwrstatError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout() {
        let out = Collector::new("echo").collect().unwrap();
        assert_eq!(out.trim(), "-status");
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit() {
        let err = Collector::new("false").collect().unwrap_err();
        assert!(matches!(err, PwrstatError::Command { .. }));
    }
}
