// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use salon_app::TabKind;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const APP_NAME: &str = "salon-manager";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_STATUS_CLEAR_SECS: u64 = 4;
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub logging: Logging,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            logging: Logging::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub start_signed_in: Option<bool>,
    pub start_tab: Option<String>,
    pub status_clear_secs: Option<u64>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            start_signed_in: Some(true),
            start_tab: Some(TabKind::Dashboard.label().to_owned()),
            status_clear_secs: Some(DEFAULT_STATUS_CLEAR_SECS),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
            file: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("SALON_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set SALON_CONFIG_PATH to the config file")
        })?;
        Ok(config_root.join(APP_NAME).join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and keep values under [ui] and [logging]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(tab) = &self.ui.start_tab
            && TabKind::parse(tab).is_none()
        {
            let expected = TabKind::ALL.map(TabKind::label).join(", ");
            bail!(
                "ui.start_tab in {} must be one of: {expected}; got {tab:?}",
                path.display()
            );
        }

        if self.ui.status_clear_secs == Some(0) {
            bail!(
                "ui.status_clear_secs in {} must be positive, got 0",
                path.display()
            );
        }

        if let Some(level) = &self.logging.level
            && !LOG_LEVELS.contains(&level.trim().to_ascii_lowercase().as_str())
        {
            bail!(
                "logging.level in {} must be one of: {}; got {level:?}. Use RUST_LOG for per-target filters",
                path.display(),
                LOG_LEVELS.join(", ")
            );
        }

        if let Some(file) = &self.logging.file
            && file.trim().is_empty()
        {
            bail!(
                "logging.file in {} is empty; remove it to use the default log path",
                path.display()
            );
        }

        Ok(())
    }

    pub fn start_signed_in(&self) -> bool {
        self.ui.start_signed_in.unwrap_or(true)
    }

    pub fn start_tab(&self) -> TabKind {
        self.ui
            .start_tab
            .as_deref()
            .and_then(TabKind::parse)
            .unwrap_or(TabKind::Dashboard)
    }

    pub fn status_clear_after(&self) -> Duration {
        Duration::from_secs(
            self.ui
                .status_clear_secs
                .unwrap_or(DEFAULT_STATUS_CLEAR_SECS),
        )
    }

    pub fn log_level(&self) -> String {
        self.logging
            .level
            .as_deref()
            .unwrap_or(DEFAULT_LOG_LEVEL)
            .trim()
            .to_ascii_lowercase()
    }

    pub fn log_file(&self) -> Result<PathBuf> {
        if let Some(file) = &self.logging.file {
            return Ok(PathBuf::from(file));
        }
        let data_root = dirs::data_dir().ok_or_else(|| {
            anyhow!("cannot resolve data directory; set [logging].file in the config")
        })?;
        Ok(data_root.join(APP_NAME).join("salon.log"))
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# salon config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\nstart_signed_in = true\n# One of: {}\nstart_tab = \"dashboard\"\nstatus_clear_secs = {}\n\n[logging]\n# RUST_LOG overrides this when set.\nlevel = \"{}\"\n# Optional. Default is the platform data dir (for example ~/.local/share/{}/salon.log)\n# file = \"/absolute/path/to/salon.log\"\n",
            path.display(),
            TabKind::ALL.map(TabKind::label).join(", "),
            DEFAULT_STATUS_CLEAR_SECS,
            DEFAULT_LOG_LEVEL,
            APP_NAME,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use anyhow::Result;
    use salon_app::TabKind;
    use salon_testkit::temp_config_path;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};
    use std::time::Duration;

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let (temp, path) = temp_config_path()?;
        std::fs::write(&path, content)?;
        Ok((temp, path))
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn missing_config_uses_defaults() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let config = Config::load(&temp.path().join("missing.toml"))?;
        assert_eq!(config.version, 1);
        assert!(config.start_signed_in());
        assert_eq!(config.start_tab(), TabKind::Dashboard);
        assert_eq!(config.status_clear_after(), Duration::from_secs(4));
        assert_eq!(config.log_level(), "info");
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[ui]\nstart_tab = \"services\"\n")?;
        let error = Config::load(&path).expect_err("unversioned config should fail");
        let message = error.to_string();
        assert!(message.contains("version = 1"));
        assert!(message.contains("[ui] and [logging]"));
        Ok(())
    }

    #[test]
    fn v1_config_parses() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[ui]\nstart_signed_in = false\nstart_tab = \"Services\"\nstatus_clear_secs = 9\n[logging]\nlevel = \"DEBUG\"\nfile = \"/tmp/salon-test.log\"\n",
        )?;
        let config = Config::load(&path)?;
        assert!(!config.start_signed_in());
        assert_eq!(config.start_tab(), TabKind::Services);
        assert_eq!(config.status_clear_after(), Duration::from_secs(9));
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.log_file()?, PathBuf::from("/tmp/salon-test.log"));
        Ok(())
    }

    #[test]
    fn malformed_config_returns_parse_error() -> Result<()> {
        let (_temp, path) = write_config("{{not toml")?;
        let error = Config::load(&path).expect_err("malformed config should fail");
        assert!(error.to_string().contains("parse TOML config"));
        Ok(())
    }

    #[test]
    fn unsupported_config_version_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 2\n")?;
        let error = Config::load(&path).expect_err("v2 config should fail");
        assert!(error.to_string().contains("unsupported config version 2"));
        Ok(())
    }

    #[test]
    fn unknown_start_tab_lists_choices() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[ui]\nstart_tab = \"inventory\"\n")?;
        let error = Config::load(&path).expect_err("unknown tab should fail");
        let message = error.to_string();
        assert!(message.contains("ui.start_tab"));
        assert!(message.contains("dashboard, appointments, customers, services, settings"));
        Ok(())
    }

    #[test]
    fn zero_status_clear_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[ui]\nstatus_clear_secs = 0\n")?;
        let error = Config::load(&path).expect_err("zero delay should fail");
        assert!(error.to_string().contains("must be positive"));
        Ok(())
    }

    #[test]
    fn invalid_log_settings_are_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[logging]\nlevel = \"loud\"\n")?;
        let error = Config::load(&path).expect_err("unknown level should fail");
        assert!(error.to_string().contains("RUST_LOG"));

        let (_temp, path) = write_config("version = 1\n[logging]\nfile = \"  \"\n")?;
        let error = Config::load(&path).expect_err("blank file should fail");
        assert!(error.to_string().contains("logging.file"));
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("SALON_CONFIG_PATH", &override_path);
        }
        let resolved = Config::default_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("SALON_CONFIG_PATH");
        }
        assert_eq!(resolved, override_path);
        Ok(())
    }

    #[test]
    fn default_path_uses_app_dir_when_no_env_override() -> Result<()> {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var("SALON_CONFIG_PATH");
        }
        let path = Config::default_path()?;
        assert!(path.ends_with("salon-manager/config.toml"));
        Ok(())
    }

    #[test]
    fn default_log_file_lives_under_app_dir() -> Result<()> {
        let config = Config::default();
        let path = config.log_file()?;
        assert!(path.ends_with("salon-manager/salon.log"), "got {}", path.display());
        Ok(())
    }

    #[test]
    fn example_config_round_trips_through_load() -> Result<()> {
        let (_temp, path) = temp_config_path()?;
        let example = Config::example_config(&path);
        assert!(example.contains("version = 1"));
        assert!(example.contains("[ui]"));
        assert!(example.contains("[logging]"));

        std::fs::write(&path, &example)?;
        let config = Config::load(&path)?;
        assert!(config.start_signed_in());
        assert_eq!(config.start_tab(), TabKind::Dashboard);
        Ok(())
    }
}
