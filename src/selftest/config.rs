//! Configuration for the self-test report.

use crate::error::{Result, TruthinessError};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::str::FromStr;

/// Environment variable selecting the report format (`text` or `json`).
pub const FORMAT_ENV: &str = "TRUTHCHECK_FORMAT";
/// Environment variable switching tracing output to JSON when set.
pub const LOG_JSON_ENV: &str = "TRUTHCHECK_LOG_JSON";
/// Conventional opt-out for ANSI colors.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One pass/fail line per evaluation
    #[default]
    Text,
    /// The whole report as pretty-printed JSON
    Json,
}

impl FromStr for ReportFormat {
    type Err = TruthinessError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(TruthinessError::InvalidConfig(format!(
                "{}={} (expected text or json)",
                FORMAT_ENV, other
            ))),
        }
    }
}

/// Settings for running and rendering the self-test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfTestConfig {
    /// Report format written to the output
    pub format: ReportFormat,
    /// Whether text output uses ANSI colors for PASS/FAIL
    pub color: bool,
    /// Column width the case name is padded to in text output
    pub name_width: usize,
    /// Whether tracing output is emitted as JSON
    pub log_json: bool,
}

impl Default for SelfTestConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            color: true,
            name_width: 50,
            log_json: false,
        }
    }
}

impl SelfTestConfig {
    /// Build a configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults. Set-but-empty `NO_COLOR` and
    /// `TRUTHCHECK_LOG_JSON` are treated as unset; any other value, UTF-8
    /// or not, counts as set. A format that is not valid UTF-8 is rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(FORMAT_ENV) {
            let format = raw.into_string().map_err(|raw| {
                TruthinessError::InvalidConfig(format!(
                    "{}={:?} (not valid UTF-8)",
                    FORMAT_ENV, raw
                ))
            })?;
            cfg.format = format.parse()?;
        }
        if lookup(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()) {
            cfg.color = false;
        }
        if lookup(LOG_JSON_ENV).is_some_and(|v| !v.is_empty()) {
            cfg.log_json = true;
        }
        Ok(cfg)
    }
}
