//! Configuration for the tracker.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tracker configuration.
///
/// The reporting date is pinned here rather than read from the system clock:
/// every derived metric takes it as an explicit parameter, which keeps the
/// computations deterministic and lets the whole project be replayed against
/// any date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Pinned "today" used by all derived metrics
    #[serde(default = "default_today")]
    pub today: NaiveDate,

    /// Date of the annual general meeting (countdown target)
    #[serde(default = "default_agm_date")]
    pub agm_date: NaiveDate,

    /// Lookahead window for upcoming-deadline notifications, in days
    #[serde(default = "default_upcoming_window")]
    pub upcoming_window_days: i64,

    /// Optional JSON seed fixture replacing the builtin dataset
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_today() -> NaiveDate {
    // The project plan pins the simulation date to 7 Feb 2026.
    NaiveDate::from_ymd_opt(2026, 2, 7).unwrap_or(NaiveDate::MIN)
}

fn default_agm_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 13).unwrap_or(NaiveDate::MIN)
}

fn default_upcoming_window() -> i64 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".agmtrack")
        .join("config.yaml")
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            today: default_today(),
            agm_date: default_agm_date(),
            upcoming_window_days: default_upcoming_window(),
            fixture_path: None,
            log_level: default_log_level(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from the home directory, falling back to defaults.
    pub fn load() -> Self {
        let config_path = default_config_path();

        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_yaml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config file: {}", e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config file: {}", e);
                }
            }
        }

        Self::default()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2026, 2, 7).unwrap());
        assert_eq!(config.agm_date, NaiveDate::from_ymd_opt(2026, 3, 13).unwrap());
        assert_eq!(config.upcoming_window_days, 3);
        assert!(config.fixture_path.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = TrackerConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: TrackerConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.today, parsed.today);
        assert_eq!(config.upcoming_window_days, parsed.upcoming_window_days);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: TrackerConfig = serde_yaml::from_str("today: 2026-01-15\n").unwrap();
        assert_eq!(parsed.today, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        assert_eq!(parsed.upcoming_window_days, 3);
        assert_eq!(parsed.log_level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "today: 2026-02-01\nupcoming_window_days: 7\n").unwrap();

        let config = TrackerConfig::load_from(&path).unwrap();
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(config.upcoming_window_days, 7);
    }
}
