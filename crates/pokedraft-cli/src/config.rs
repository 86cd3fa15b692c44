// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use log::LevelFilter;
use pokedraft_app::{
    DEFAULT_BLUR_CLOSE_DELAY, DEFAULT_MAX_TEAM_SIZE, DEFAULT_PAGE_SIZE, PickerConfig,
};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const APP_NAME: &str = "pokedraft";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_CATALOG_TIMEOUT: &str = "10s";
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub catalog: Catalog,
    #[serde(default)]
    pub picker: Picker,
    #[serde(default)]
    pub logging: Logging,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            catalog: Catalog::default(),
            picker: Picker::default(),
            logging: Logging::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub base_url: Option<String>,
    pub timeout: Option<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            base_url: Some(pokedraft_catalog::DEFAULT_BASE_URL.to_owned()),
            timeout: Some(DEFAULT_CATALOG_TIMEOUT.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Picker {
    pub page_size: Option<i64>,
    pub max_team_size: Option<i64>,
    pub blur_close_delay: Option<String>,
}

impl Default for Picker {
    fn default() -> Self {
        Self {
            page_size: Some(DEFAULT_PAGE_SIZE as i64),
            max_team_size: Some(DEFAULT_MAX_TEAM_SIZE as i64),
            blur_close_delay: Some("100ms".to_owned()),
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
        if let Some(path) = env::var_os("POKEDRAFT_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set POKEDRAFT_CONFIG_PATH to the config file")
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
                    "config file {} is not versioned. Add `version = 1` and keep values under [catalog], [picker], and [logging]",
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
        if let Some(base_url) = &self.catalog.base_url {
            let parsed = Url::parse(base_url).with_context(|| {
                format!(
                    "catalog.base_url in {} is not a valid URL: {base_url:?}",
                    path.display()
                )
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                bail!(
                    "catalog.base_url in {} must use http or https, got {base_url:?}",
                    path.display()
                );
            }
        }

        if let Some(timeout) = &self.catalog.timeout
            && parse_duration(timeout)? == Duration::ZERO
        {
            bail!(
                "catalog.timeout in {} must be positive, got {}",
                path.display(),
                timeout
            );
        }

        for (key, value) in [
            ("picker.page_size", self.picker.page_size),
            ("picker.max_team_size", self.picker.max_team_size),
        ] {
            if let Some(value) = value
                && value <= 0
            {
                bail!(
                    "{key} in {} must be positive, got {value}",
                    path.display()
                );
            }
        }

        if let Some(delay) = &self.picker.blur_close_delay {
            parse_duration(delay)?;
        }

        if let Some(level) = &self.logging.level
            && !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str())
        {
            bail!(
                "logging.level in {} must be one of {}, got {level:?}",
                path.display(),
                LOG_LEVELS.join("/")
            );
        }

        Ok(())
    }

    pub fn catalog_base_url(&self) -> &str {
        self.catalog
            .base_url
            .as_deref()
            .unwrap_or(pokedraft_catalog::DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn catalog_timeout(&self) -> Result<Duration> {
        parse_duration(
            self.catalog
                .timeout
                .as_deref()
                .unwrap_or(DEFAULT_CATALOG_TIMEOUT),
        )
    }

    pub fn picker(&self) -> Result<PickerConfig> {
        let blur_close_delay = match &self.picker.blur_close_delay {
            Some(raw) => parse_duration(raw)?,
            None => DEFAULT_BLUR_CLOSE_DELAY,
        };
        Ok(PickerConfig {
            page_size: positive_or(self.picker.page_size, DEFAULT_PAGE_SIZE),
            max_team_size: positive_or(self.picker.max_team_size, DEFAULT_MAX_TEAM_SIZE),
            blur_close_delay,
        })
    }

    pub fn log_level(&self) -> LevelFilter {
        let raw = self.logging.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
        match raw.to_ascii_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        }
    }

    /// Where log lines go; the terminal belongs to the UI.
    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(file) = &self.logging.file {
            return Ok(PathBuf::from(file));
        }
        let cache_root = dirs::cache_dir().ok_or_else(|| {
            anyhow!("cannot resolve cache directory; set [logging].file in the config")
        })?;
        Ok(cache_root.join(APP_NAME).join(format!("{APP_NAME}.log")))
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# pokedraft config\n# Place this file at: {}\n\nversion = 1\n\n[catalog]\nbase_url = \"{}\"\ntimeout = \"{}\"\n\n[picker]\npage_size = {}\nmax_team_size = {}\nblur_close_delay = \"100ms\"\n\n[logging]\nlevel = \"{}\"\n# Optional. Default is the platform cache dir (for example ~/.cache/pokedraft/pokedraft.log)\n# file = \"/absolute/path/to/pokedraft.log\"\n",
            path.display(),
            pokedraft_catalog::DEFAULT_BASE_URL,
            DEFAULT_CATALOG_TIMEOUT,
            DEFAULT_PAGE_SIZE,
            DEFAULT_MAX_TEAM_SIZE,
            DEFAULT_LOG_LEVEL,
        )
    }
}

fn positive_or(value: Option<i64>, default: usize) -> usize {
    value
        .and_then(|value| usize::try_from(value).ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_secs(mins * 60));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 100ms or 10s)")
}

#[cfg(test)]
mod tests {
    use super::{Config, parse_duration};
    use anyhow::Result;
    use log::LevelFilter;
    use std::path::{Path, PathBuf};
    use std::sync::{Mutex, OnceLock};
    use std::time::Duration;

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
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
        assert_eq!(config.catalog_base_url(), "https://pokeapi.co/api/v2/pokemon");
        assert_eq!(config.catalog_timeout()?, Duration::from_secs(10));
        let picker = config.picker()?;
        assert_eq!(picker.page_size, 20);
        assert_eq!(picker.max_team_size, 4);
        assert_eq!(picker.blur_close_delay, Duration::from_millis(100));
        assert_eq!(config.log_level(), LevelFilter::Info);
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[picker]\npage_size = 10\n")?;
        let error = Config::load(&path).expect_err("unversioned config should fail");
        let message = error.to_string();
        assert!(message.contains("version = 1"));
        assert!(message.contains("[catalog], [picker], and [logging]"));
        Ok(())
    }

    #[test]
    fn full_config_parses() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[catalog]\nbase_url = \"http://localhost:8080/pokemon/\"\ntimeout = \"2s\"\n[picker]\npage_size = 5\nmax_team_size = 6\nblur_close_delay = \"250ms\"\n[logging]\nlevel = \"DEBUG\"\nfile = \"/tmp/pokedraft-test.log\"\n",
        )?;

        let config = Config::load(&path)?;
        assert_eq!(config.catalog_base_url(), "http://localhost:8080/pokemon");
        assert_eq!(config.catalog_timeout()?, Duration::from_secs(2));
        let picker = config.picker()?;
        assert_eq!(picker.page_size, 5);
        assert_eq!(picker.max_team_size, 6);
        assert_eq!(picker.blur_close_delay, Duration::from_millis(250));
        assert_eq!(config.log_level(), LevelFilter::Debug);
        assert_eq!(config.log_path()?, PathBuf::from("/tmp/pokedraft-test.log"));
        Ok(())
    }

    #[test]
    fn partial_sections_fall_back_to_defaults() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[picker]\npage_size = 7\n")?;
        let config = Config::load(&path)?;
        let picker = config.picker()?;
        assert_eq!(picker.page_size, 7);
        assert_eq!(picker.max_team_size, 4);
        assert_eq!(picker.blur_close_delay, Duration::from_millis(100));
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
    fn non_http_base_url_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[catalog]\nbase_url = \"ftp://example.com\"\n")?;
        let error = Config::load(&path).expect_err("ftp should fail");
        assert!(error.to_string().contains("must use http or https"));

        let (_temp, path) = write_config("version = 1\n[catalog]\nbase_url = \"not a url\"\n")?;
        let error = Config::load(&path).expect_err("garbage url should fail");
        assert!(error.to_string().contains("is not a valid URL"));
        Ok(())
    }

    #[test]
    fn zero_sizes_and_timeouts_are_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[picker]\nmax_team_size = 0\n")?;
        let error = Config::load(&path).expect_err("zero team size should fail");
        assert!(
            error
                .to_string()
                .contains("picker.max_team_size in")
        );

        let (_temp, path) = write_config("version = 1\n[catalog]\ntimeout = \"0s\"\n")?;
        let error = Config::load(&path).expect_err("zero timeout should fail");
        assert!(error.to_string().contains("catalog.timeout in"));
        Ok(())
    }

    #[test]
    fn unknown_log_level_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 1\n[logging]\nlevel = \"loud\"\n")?;
        let error = Config::load(&path).expect_err("unknown level should fail");
        assert!(error.to_string().contains("off/error/warn/info/debug/trace"));
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("POKEDRAFT_CONFIG_PATH", &override_path);
        }
        let resolved = Config::default_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("POKEDRAFT_CONFIG_PATH");
        }
        assert_eq!(resolved, override_path);
        Ok(())
    }

    #[test]
    fn default_path_uses_config_toml_suffix_when_no_env_override() -> Result<()> {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var("POKEDRAFT_CONFIG_PATH");
        }
        let path = Config::default_path()?;
        assert!(path.ends_with(Path::new("pokedraft").join("config.toml")));
        Ok(())
    }

    #[test]
    fn example_config_round_trips_through_load() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, Config::example_config(&path))?;
        let config = Config::load(&path)?;
        assert_eq!(config.picker()?.page_size, 20);
        assert_eq!(config.log_level(), LevelFilter::Info);
        Ok(())
    }

    #[test]
    fn parse_duration_supports_units() -> Result<()> {
        assert_eq!(parse_duration("100ms")?, Duration::from_millis(100));
        assert_eq!(parse_duration("10s")?, Duration::from_secs(10));
        assert_eq!(parse_duration("2m")?, Duration::from_secs(120));
        let error = parse_duration("10h").expect_err("hours unsupported");
        assert!(error.to_string().contains("<N>ms, <N>s, <N>m"));
        Ok(())
    }
}
