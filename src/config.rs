use std::env::VarError;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Lead-capture endpoint; leads are only simulated when unset
    pub lead_endpoint: Option<String>,
    pub lead_timeout_secs: u64,
    pub lead_user_agent: String,
    pub simulated_delay_ms: u64,
}

impl AppConfig {
    pub fn lead_timeout(&self) -> Duration {
        Duration::from_secs(self.lead_timeout_secs)
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

/// Load configuration from the process environment, after reading `.env`.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but unusable.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| std::env::var(key))
}

/// Build configuration from an env-var lookup function, so tests can pass a
/// plain map instead of touching the process environment.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("HOMEIL_ENV", "development"))?;

    let bind_addr = or_default("HOMEIL_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("HOMEIL_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("HOMEIL_LOG_LEVEL", "info");

    let lead_endpoint = match lookup("HOMEIL_LEAD_ENDPOINT") {
        Ok(raw) if raw.trim().is_empty() => None,
        Ok(raw) => Some(parse_endpoint(raw.trim()).map_err(|reason| invalid("HOMEIL_LEAD_ENDPOINT", reason))?),
        Err(_) => None,
    };
    let lead_timeout_secs = parse_u64("HOMEIL_LEAD_TIMEOUT_SECS", "30")?;
    if lead_timeout_secs == 0 {
        return Err(invalid(
            "HOMEIL_LEAD_TIMEOUT_SECS",
            "must be at least 1".to_string(),
        ));
    }
    let lead_user_agent = or_default(
        "HOMEIL_LEAD_USER_AGENT",
        "home-in-israel/0.1 (lead-capture)",
    );
    let simulated_delay_ms = parse_u64("HOMEIL_SIMULATED_DELAY_MS", "2000")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        lead_endpoint,
        lead_timeout_secs,
        lead_user_agent,
        simulated_delay_ms,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "HOMEIL_ENV".to_string(),
            reason: format!("unknown environment {other:?}"),
        }),
    }
}

fn parse_endpoint(raw: &str) -> Result<String, String> {
    let url = reqwest::Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        scheme => Err(format!("unsupported scheme {scheme:?}, expected http or https")),
    }
}
