use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealmate_grocery::{AggregateOptions, MatchPolicy, Staples};
use serde::Deserialize;
use std::env;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub grocery: GroceryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct GroceryConfig {
    /// Used when a request does not say whether to drop staples
    #[serde(default = "default_exclude_staples")]
    pub exclude_staples: bool,
    #[serde(default)]
    pub pantry_match: MatchPolicy,
    /// Appended to the built-in staples list
    #[serde(default)]
    pub extra_staples: Vec<String>,
}

impl Default for GroceryConfig {
    fn default() -> Self {
        Self {
            exclude_staples: default_exclude_staples(),
            pantry_match: MatchPolicy::default(),
            extra_staples: Vec::new(),
        }
    }
}

fn default_exclude_staples() -> bool {
    true
}

impl GroceryConfig {
    pub fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            exclude_staples: self.exclude_staples,
            match_policy: self.pantry_match,
            staples: Staples::with_extra(&self.extra_staples),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALMATE__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default("grocery.exclude_staples", true)?
            .set_default("grocery.pantry_match", "substring")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALMATE")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("grocery.extra_staples")
                .try_parsing(true),
        );

        // Common deployment platforms only hand out PORT
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.host.trim().is_empty() {
            return Err("Server host must not be empty".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if EnvFilter::try_new(&self.logging.level).is_err() {
            return Err(format!(
                "Invalid logging level directive: {}",
                self.logging.level
            ));
        }
        Ok(())
    }
}
