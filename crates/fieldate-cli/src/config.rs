use chrono_tz::Tz;
use fieldate_core::error::CoreError;
use fieldate_core::timezone::{normalize_timezone_input, validate_timezone};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::PathBuf;

use crate::cli::OutputFormat;

const DEFAULT_CONFIG_FILE: &str = "fieldate.toml";

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Timezone used when none is given on the command line (IANA format)
    #[serde(default)]
    pub timezone: Option<String>,
    /// Color table cells by urgency
    #[serde(default = "default_color")]
    pub color: bool,
    /// Default output format for `due` and `info`
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: None,
            color: default_color(),
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment(config_path()).extract()
    }

    fn figment(path: PathBuf) -> Figment {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("FIELDATE_").ignore(&["config"]))
    }

    /// Pick the timezone: command line, then configuration, then the system.
    pub fn resolve_timezone(&self, cli_override: Option<&str>) -> Result<Tz, CoreError> {
        match cli_override.or(self.timezone.as_deref()) {
            Some(input) => normalize_timezone_input(input),
            None => validate_timezone(&detect_system_timezone()),
        }
    }
}

/// Config file location, overridable through `FIELDATE_CONFIG`.
fn config_path() -> PathBuf {
    std::env::var_os("FIELDATE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Detects the system timezone, falling back to UTC if detection fails
pub fn detect_system_timezone() -> String {
    if let Ok(tz) = std::env::var("TZ") {
        if !tz.is_empty() && validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    if let Ok(tz) = iana_time_zone::get_timezone() {
        if validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    "UTC".to_string()
}
