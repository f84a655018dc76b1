use crate::domain::error::DomainResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub db_url: String,
}

fn default_db_path() -> String {
    let db_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config/promptstash");

    db_dir
        .join("promptstash.db")
        .to_str()
        .unwrap_or("promptstash.db")
        .to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_url: default_db_path(),
        }
    }
}

/// Load settings: defaults, then config file, then environment.
///
/// With no explicit config file, `~/.config/promptstash/config.toml`
/// is read when it exists. `PROMPTSTASH_DB_URL` overrides everything.
pub fn load_settings(config_file: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    let mut settings = Settings::default();

    let config_path = match config_file {
        Some(path) => Some(path.to_path_buf()),
        None => dirs::home_dir().map(|p| p.join(".config/promptstash/config.toml")),
    };

    if let Some(config_path) = config_path {
        if config_path.exists() {
            trace!("Loading config from: {:?}", config_path);

            match std::fs::read_to_string(&config_path) {
                Ok(config_text) => match toml::from_str::<Settings>(&config_text) {
                    Ok(file_settings) => settings.db_url = file_settings.db_url,
                    Err(e) => {
                        warn!("Ignoring malformed config file {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    warn!("Cannot read config file {:?}: {}", config_path, e);
                }
            }
        }
    }

    if let Ok(db_url) = std::env::var("PROMPTSTASH_DB_URL") {
        trace!("Using PROMPTSTASH_DB_URL from environment: {}", db_url);
        settings.db_url = db_url;
    }

    trace!("Settings loaded: {:?}", settings);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::EnvGuard;
    use serial_test::serial;
    use std::env;
    use std::fs;

    #[test]
    #[serial]
    fn given_no_environment_when_load_settings_then_defaults() {
        let _guard = EnvGuard::new();
        env::remove_var("PROMPTSTASH_DB_URL");

        let settings = load_settings(None).unwrap();
        assert!(settings.db_url.contains("promptstash.db"));
    }

    #[test]
    #[serial]
    fn given_env_var_when_load_settings_then_overrides() {
        let _guard = EnvGuard::new();
        env::set_var("PROMPTSTASH_DB_URL", "/test/custom.db");

        let settings = load_settings(None).unwrap();
        assert_eq!(settings.db_url, "/test/custom.db");
    }

    #[test]
    #[serial]
    fn given_config_file_when_load_settings_then_file_value_used() {
        let _guard = EnvGuard::new();
        env::remove_var("PROMPTSTASH_DB_URL");

        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "db_url = \"/config/file/path.db\"\n").unwrap();

        let settings = load_settings(Some(&config_path)).unwrap();
        assert_eq!(settings.db_url, "/config/file/path.db");
    }

    #[test]
    #[serial]
    fn given_malformed_config_file_when_load_settings_then_defaults_kept() {
        let _guard = EnvGuard::new();
        env::remove_var("PROMPTSTASH_DB_URL");

        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "db_url = [not, valid, toml\n").unwrap();

        let settings = load_settings(Some(&config_path)).unwrap();
        assert_eq!(settings.db_url, Settings::default().db_url);
    }

    #[test]
    #[serial]
    fn given_config_file_and_env_when_load_settings_then_env_wins() {
        let _guard = EnvGuard::new();
        env::set_var("PROMPTSTASH_DB_URL", "/env/override.db");

        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "db_url = \"/config/non-override.db\"\n").unwrap();

        let settings = load_settings(Some(&config_path)).unwrap();
        assert_eq!(settings.db_url, "/env/override.db");
    }
}
