// flowgen — Configuration loading and validation

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("home directory not found")]
    NoHomeDir,
    #[error("no API key configured. Set provider.api_key in ~/.flowgen/config.json or the OPENAI_API_KEY environment variable")]
    MissingApiKey,
}

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_model")]
    pub model: String,
    /// Low temperature biases the model toward well-formed structured
    /// output over creative variation.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}
fn default_temperature() -> f64 {
    0.3
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: String,
    /// Empty means the official OpenAI endpoint.
    #[serde(default)]
    pub api_base: String,
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

impl Config {
    /// Load configuration from a JSON file, falling back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::warn!("Config file not found at {:?}, using defaults", path);
            let mut config = Config::default();
            config.apply_env_overrides();
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (prefix: FLOWGEN_).
    ///
    /// `OPENAI_API_KEY` is honored as the conventional credential variable.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("FLOWGEN_GENERATOR_MODEL") {
            self.generator.model = v;
        }
        if let Ok(v) = std::env::var("FLOWGEN_GENERATOR_TEMPERATURE") {
            if let Ok(n) = v.parse() {
                self.generator.temperature = n;
            }
        }
        if let Ok(v) = std::env::var("FLOWGEN_PROVIDER_API_KEY") {
            self.provider.api_key = v;
        }
        if let Ok(v) = std::env::var("FLOWGEN_PROVIDER_API_BASE") {
            self.provider.api_base = v;
        }
        if self.provider.api_key.is_empty() {
            if let Ok(v) = std::env::var("OPENAI_API_KEY") {
                self.provider.api_key = v;
            }
        }
        if let Ok(v) = std::env::var("FLOWGEN_SERVER_HOST") {
            self.server.host = v;
        }
        if let Ok(v) = std::env::var("FLOWGEN_SERVER_PORT") {
            if let Ok(n) = v.parse() {
                self.server.port = n;
            }
        }
    }

    /// Get the default config file path: ~/.flowgen/config.json
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".flowgen").join("config.json"))
    }

    /// Validate configuration for basic correctness.
    ///
    /// The API credential is read once here, at startup; a missing key
    /// fails initialization rather than degrading at request time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
