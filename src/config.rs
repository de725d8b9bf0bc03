// Configuration file (~/.srl/rc) handling
//
// The rc file holds `key=value` lines. Blank lines and lines starting with
// `#` are skipped. Unknown keys are logged and ignored.

use std::path::{Path, PathBuf};
use anyhow::{anyhow, Context, Result};
use crate::models::Locale;
use crate::sla::{self, BusinessCalendar, HoursPolicy};
use crate::webhook::DEFAULT_TOLERANCE_SECS;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Database location (already resolved against the rc directory)
    pub data_location: Option<PathBuf>,
    pub locale: Locale,
    pub hours_policy: HoursPolicy,
    pub webhook_tolerance_secs: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_location: None,
            locale: Locale::En,
            hours_policy: HoursPolicy::WallClock,
            webhook_tolerance_secs: DEFAULT_TOLERANCE_SECS,
        }
    }
}

impl Config {
    /// Directory holding the rc file and default database
    pub fn home_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
        Ok(home.join(".srl"))
    }

    /// Get the configuration file path
    pub fn rc_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join("rc"))
    }

    /// Load configuration from the rc file, or defaults if it does not exist
    pub fn load() -> Result<Self> {
        let rc_path = Self::rc_path()?;
        if !rc_path.exists() {
            log::debug!("No rc file at {}, using defaults", rc_path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&rc_path)
            .with_context(|| format!("Failed to read config file: {}", rc_path.display()))?;
        let base_dir = rc_path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::parse(&content, &base_dir)
            .with_context(|| format!("Invalid configuration in {}", rc_path.display()))
    }

    /// Parse rc content. Relative `data.location` paths resolve against `base_dir`.
    pub fn parse(content: &str, base_dir: &Path) -> Result<Self> {
        let mut config = Self::default();
        let mut use_business_hours = false;
        let mut calendar = BusinessCalendar::default();
        let mut work_days = calendar.work_days().to_vec();
        let mut open = calendar.open();
        let mut close = calendar.close();
        let mut offset = calendar.offset();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| anyhow!("line {}: expected key=value, got '{}'", line_no + 1, line))?;
            let (key, value) = (key.trim(), value.trim());

            match key {
                "data.location" => {
                    let path = PathBuf::from(value);
                    config.data_location = Some(if path.is_relative() { base_dir.join(path) } else { path });
                }
                "locale" => {
                    config.locale = Locale::from_str(value)
                        .ok_or_else(|| anyhow!("line {}: unknown locale '{}' (use en or ar)", line_no + 1, value))?;
                }
                "sla.hours" => {
                    use_business_hours = match value {
                        "wall" => false,
                        "business" => true,
                        other => anyhow::bail!("line {}: sla.hours must be 'wall' or 'business', got '{}'", line_no + 1, other),
                    };
                }
                "business.days" => work_days = sla::parse_work_days(value)?,
                "business.open" => open = sla::parse_time_of_day(value)?,
                "business.close" => close = sla::parse_time_of_day(value)?,
                "business.utc_offset" => offset = sla::parse_utc_offset(value)?,
                "webhook.tolerance" => {
                    config.webhook_tolerance_secs = value
                        .parse::<i64>()
                        .ok()
                        .filter(|secs| *secs >= 0)
                        .ok_or_else(|| anyhow!("line {}: webhook.tolerance must be a non-negative number of seconds", line_no + 1))?;
                }
                other => log::warn!("Ignoring unknown config key '{}'", other),
            }
        }

        if use_business_hours {
            calendar = BusinessCalendar::new(work_days, open, close, offset)?;
            config.hours_policy = HoursPolicy::Business(calendar);
        }
        Ok(config)
    }
}
