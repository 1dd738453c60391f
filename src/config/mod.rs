use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Environment variables consulted for the provider key, in priority order.
pub const API_KEY_VARS: [&str; 2] = ["KLEOPATRA_API_KEY", "ECOURTS_API_KEY"];

/// Fixed provider timeout. Not configurable.
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(120);

pub const DEFAULT_ECOURTS_BASE_URL: &str = "https://court-api.kleopatra.io";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("eCourts API key is not configured (set KLEOPATRA_API_KEY or ECOURTS_API_KEY)")]
    MissingApiKey,

    #[error("Invalid URL for {name}: {reason}")]
    InvalidUrl { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub ecourts: EcourtsConfig,
    pub roster: RosterConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcourtsConfig {
    /// Resolved from `KLEOPATRA_API_KEY`, then `ECOURTS_API_KEY`. No literal fallback.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub url: Option<String>,
    #[serde(skip_serializing)]
    pub token: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Some(port) = env::var("CASEDESK_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
        {
            self.server.port = port;
        }

        // Provider overrides
        self.ecourts.api_key = resolve_api_key(|name| env::var(name).ok());
        if let Ok(v) = env::var("ECOURTS_API_BASE_URL") {
            self.ecourts.base_url = v.trim_end_matches('/').to_string();
        }

        // Roster overrides
        if let Ok(v) = env::var("TEAM_ROSTER_URL") {
            self.roster.url = non_empty(v);
        }
        if let Ok(v) = env::var("TEAM_ROSTER_TOKEN") {
            self.roster.token = non_empty(v);
        }
        if let Ok(v) = env::var("TEAM_ROSTER_TIMEOUT_SECS") {
            self.roster.timeout_secs = v.parse().unwrap_or(self.roster.timeout_secs);
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        self
    }

    /// Check URLs up front so a typo fails at startup instead of on the first lookup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.ecourts.base_url).map_err(|e| ConfigError::InvalidUrl {
            name: "ECOURTS_API_BASE_URL",
            reason: e.to_string(),
        })?;

        if let Some(roster_url) = &self.roster.url {
            url::Url::parse(roster_url).map_err(|e| ConfigError::InvalidUrl {
                name: "TEAM_ROSTER_URL",
                reason: e.to_string(),
            })?;
        }

        Ok(())
    }

    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.ecourts.api_key.as_deref().ok_or(ConfigError::MissingApiKey)
    }

    pub fn roster_timeout(&self) -> Duration {
        Duration::from_secs(self.roster.timeout_secs)
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 3000 },
            ecourts: EcourtsConfig {
                api_key: None,
                base_url: DEFAULT_ECOURTS_BASE_URL.to_string(),
            },
            roster: RosterConfig {
                url: None,
                token: None,
                timeout_secs: 15,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["http://localhost:3000".to_string(), "http://localhost:5173".to_string()],
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig { port: 3000 },
            ecourts: EcourtsConfig {
                api_key: None,
                base_url: DEFAULT_ECOURTS_BASE_URL.to_string(),
            },
            roster: RosterConfig {
                url: None,
                token: None,
                timeout_secs: 10,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://staging.casedesk.app".to_string()],
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 3000 },
            ecourts: EcourtsConfig {
                api_key: None,
                base_url: DEFAULT_ECOURTS_BASE_URL.to_string(),
            },
            roster: RosterConfig {
                url: None,
                token: None,
                timeout_secs: 10,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://app.casedesk.app".to_string()],
            },
        }
    }
}

/// First non-empty value among [`API_KEY_VARS`], looked up through `lookup`.
pub fn resolve_api_key<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    API_KEY_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find_map(non_empty)
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}
