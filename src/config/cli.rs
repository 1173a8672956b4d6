use crate::config::{CliConfig, Command};
use crate::core::{filter_id, format_delay, format_time, merge_time_delay};
use crate::utils::error::{FormatError, Result};
use crate::utils::validation::{validate_finite, validate_non_empty_string, Validate};
use chrono::{DateTime, FixedOffset, SecondsFormat};

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Time { seconds } | Command::Delay { seconds } => {
                validate_finite("seconds", *seconds)
            }
            Command::Merge {
                timestamp,
                delay_seconds,
            } => {
                validate_non_empty_string("timestamp", timestamp)?;
                validate_finite("delay_seconds", *delay_seconds)
            }
            Command::Id { raw } => validate_non_empty_string("raw", raw),
        }
    }
}

impl CliConfig {
    /// Runs the selected command and returns the line to print.
    pub fn execute(&self) -> Result<String> {
        match &self.command {
            Command::Time { seconds } => format_time(*seconds),
            Command::Delay { seconds } => format_delay(*seconds),
            Command::Merge {
                timestamp,
                delay_seconds,
            } => {
                let base = parse_timestamp(timestamp)?;
                let merged = merge_time_delay(&base, *delay_seconds)?;
                Ok(merged.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Command::Id { raw } => filter_id(raw).map(str::to_string),
        }
    }
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value.trim()).map_err(|e| FormatError::InvalidInput {
        field: "timestamp".to_string(),
        value: value.to_string(),
        reason: format!("Expected an RFC 3339 timestamp: {}", e),
    })
}
