use crate::{ConfigError, ConfigErrorResult, HubConfig, LoggingConfig, ServerConfig};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

pub const CONFIG_DIR_ENV: &str = "BB_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".bb";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub hub: HubConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for BB_CONFIG_DIR env var, else use ./.bb/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply BB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: BB_CONFIG_DIR env var > ./.bb/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.logging.validate()?;
        self.hub.validate()?;
        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => {
                let dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(dir.join(file)))
            }
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  hub: subscriber_capacity={}, legacy_capacity={}, id_prefix={}, mirror_to_legacy={}",
            self.hub.subscriber_capacity,
            self.hub.legacy_capacity,
            self.hub.id_prefix,
            self.hub.mirror_to_legacy
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("BB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BB_SERVER_PORT", &mut self.server.port);

        // Logging
        Self::apply_env_parse("BB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BB_LOG_FILE", &mut self.logging.file);

        // Hub
        Self::apply_env_parse(
            "BB_HUB_SUBSCRIBER_CAPACITY",
            &mut self.hub.subscriber_capacity,
        );
        Self::apply_env_parse("BB_HUB_LEGACY_CAPACITY", &mut self.hub.legacy_capacity);
        Self::apply_env_string("BB_HUB_ID_PREFIX", &mut self.hub.id_prefix);
        Self::apply_env_bool("BB_HUB_MIRROR_TO_LEGACY", &mut self.hub.mirror_to_legacy);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
