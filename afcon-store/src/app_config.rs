use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub flows: FlowsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Remote listing and booking endpoints.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub ticketing_base_url: String,
    pub hotel_base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_timeout_seconds() -> u64 { 10 }

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionMode {
    /// Wait `simulated_delay_ms`, then accept.
    Simulated,
    /// POST to the hotel booking endpoint.
    Remote,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SubmissionConfig {
    pub mode: SubmissionMode,
    #[serde(default = "default_delay_ms")]
    pub simulated_delay_ms: u64,
}

impl SubmissionConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

fn default_delay_ms() -> u64 { 2000 }

/// Expiry of flows whose client went away without abandoning them.
#[derive(Debug, Deserialize, Clone)]
pub struct FlowsConfig {
    #[serde(default = "default_idle_ttl_seconds")]
    pub idle_ttl_seconds: u64,
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

impl FlowsConfig {
    pub fn idle_ttl(&self) -> Duration {
        Duration::from_secs(self.idle_ttl_seconds)
    }

    pub fn sweep_interval(&self) -> Duration {
        // tokio's interval panics on a zero period
        Duration::from_secs(self.sweep_interval_seconds.max(1))
    }
}

impl Default for FlowsConfig {
    fn default() -> Self {
        Self {
            idle_ttl_seconds: default_idle_ttl_seconds(),
            sweep_interval_seconds: default_sweep_interval_seconds(),
        }
    }
}

fn default_idle_ttl_seconds() -> u64 { 1800 }

fn default_sweep_interval_seconds() -> u64 { 60 }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. AFCON__SERVER__PORT=9000
            .add_source(config::Environment::with_prefix("AFCON").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Build from an inline TOML document.
    pub fn from_toml(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
