//! wayfare configuration.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{WayfareError, WayfareResult};
use crate::month::{CalendarMonth, MonthWindow};

static DEFAULT_DATA_DIR: &str = "~/.local/share/wayfare";
static DEFAULT_FIRST_MONTH: &str = "2026-01";
static DEFAULT_LAST_MONTH: &str = "2026-04";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_first_month() -> String {
    DEFAULT_FIRST_MONTH.to_string()
}

fn default_last_month() -> String {
    DEFAULT_LAST_MONTH.to_string()
}

fn default_seed_ideas() -> bool {
    true
}

/// Configuration at ~/.config/wayfare/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WayfareConfig {
    /// Where the saved trips, ideas and favorites live.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// First month the calendar can show (YYYY-MM).
    #[serde(default = "default_first_month")]
    pub first_month: String,

    /// Last month the calendar can show (YYYY-MM).
    #[serde(default = "default_last_month")]
    pub last_month: String,

    /// Fill the idea buckets with sample ideas on first run.
    #[serde(default = "default_seed_ideas")]
    pub seed_ideas: bool,
}

impl Default for WayfareConfig {
    fn default() -> Self {
        WayfareConfig {
            data_dir: default_data_dir(),
            first_month: default_first_month(),
            last_month: default_last_month(),
            seed_ideas: default_seed_ideas(),
        }
    }
}

impl WayfareConfig {
    pub fn config_path() -> WayfareResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| WayfareError::Config("Could not determine config directory".into()))?
            .join("wayfare");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented default file on first run.
    pub fn load() -> WayfareResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> WayfareResult<Self> {
        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .build()
            .map_err(|e| WayfareError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| WayfareError::Config(e.to_string()))
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn month_window(&self) -> WayfareResult<MonthWindow> {
        let first = CalendarMonth::parse(&self.first_month)
            .map_err(|e| WayfareError::Config(format!("first_month: {e}")))?;
        let last = CalendarMonth::parse(&self.last_month)
            .map_err(|e| WayfareError::Config(format!("last_month: {e}")))?;
        MonthWindow::new(first, last).map_err(|e| WayfareError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> WayfareResult<()> {
        let contents = format!(
            "\
# wayfare configuration

# Where your trips and favorites are saved:
# data_dir = \"{}\"

# Months the calendar can navigate between:
# first_month = \"{}\"
# last_month = \"{}\"

# Add sample ideas the first time the idea lists are empty:
# seed_ideas = true
",
            DEFAULT_DATA_DIR, DEFAULT_FIRST_MONTH, DEFAULT_LAST_MONTH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                WayfareError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| WayfareError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wayfare").join("config.toml");
        WayfareConfig::create_default_config(&path).unwrap();

        let config = WayfareConfig::load_from(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert!(config.seed_ideas);
        assert_eq!(config.month_window().unwrap(), MonthWindow::default());
    }

    #[test]
    fn test_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/wayfare-test\"\nfirst_month = \"2026-02\"\nlast_month = \"2026-06\"\nseed_ideas = false\n",
        )
        .unwrap();

        let config = WayfareConfig::load_from(&path).unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/tmp/wayfare-test"));
        assert!(!config.seed_ideas);

        let window = config.month_window().unwrap();
        assert_eq!(window.first(), CalendarMonth::new(2026, 1).unwrap());
        assert_eq!(window.last(), CalendarMonth::new(2026, 5).unwrap());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = WayfareConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.first_month, DEFAULT_FIRST_MONTH);
    }

    #[test]
    fn test_bad_month_window_is_config_error() {
        let config = WayfareConfig {
            first_month: "2026-05".to_string(),
            last_month: "2026-01".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.month_window(), Err(WayfareError::Config(_))));

        let config = WayfareConfig {
            first_month: "May".to_string(),
            ..Default::default()
        };
        assert!(config.month_window().is_err());
    }
}
