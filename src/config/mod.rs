use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::services::SmoothingMode;
use crate::currency::CurrencyCode;
use crate::errors::LedgerError;
use crate::ledger::CategoryPolicy;

const DEFAULT_DIR_NAME: &str = ".household_ledger";
const CONFIG_FILE: &str = "config.json";
const HOME_ENV: &str = "HOUSEHOLD_LEDGER_HOME";
const TMP_SUFFIX: &str = "tmp";

/// Analysis preferences shared by the report and dashboard front ends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub currency: CurrencyCode,
    pub rolling_window: usize,
    pub smoothing: SmoothingMode,
    pub category_policy: CategoryPolicy,
    pub all_categories_label: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            rolling_window: 7,
            smoothing: SmoothingMode::Centered,
            category_policy: CategoryPolicy::Permissive,
            all_categories_label: "all".into(),
        }
    }
}

/// Returns the application data directory, defaulting to `~/.household_ledger`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Loads and persists [`AnalyzerConfig`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn with_base_dir(base: &Path) -> Self {
        Self::new(base.join(CONFIG_FILE))
    }

    pub fn default_location() -> Self {
        Self::with_base_dir(&app_data_dir())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config; a missing file yields defaults.
    pub fn load(&self) -> Result<AnalyzerConfig, LedgerError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(AnalyzerConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save(&self, config: &AnalyzerConfig) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path());
        let config = manager.load().expect("load defaults");
        assert_eq!(config, AnalyzerConfig::default());
        assert_eq!(config.rolling_window, 7);
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(&dir.path().join("nested"));
        let config = AnalyzerConfig {
            currency: CurrencyCode::new("usd"),
            rolling_window: 14,
            smoothing: SmoothingMode::Trailing,
            category_policy: CategoryPolicy::Strict,
            all_categories_label: "everything".into(),
        };
        manager.save(&config).expect("save");
        assert!(!tmp_path(manager.path()).exists());
        assert_eq!(manager.load().expect("load"), config);
    }

    #[test]
    fn partial_file_falls_back_to_defaults_per_field() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path());
        fs::write(manager.path(), r#"{ "rolling_window": 3 }"#).expect("write");
        let config = manager.load().expect("load");
        assert_eq!(config.rolling_window, 3);
        assert_eq!(config.currency, CurrencyCode::new("JPY"));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path());
        fs::write(manager.path(), "not json").expect("write");
        assert!(matches!(manager.load(), Err(LedgerError::Config(_))));
    }
}
