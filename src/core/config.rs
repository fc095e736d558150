//! Configuration management for the MCP server.
//!
//! Configuration is read once at startup, mostly from `MCP_*` environment
//! variables (a `.env` file is honoured), and then shared read-only.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Default Classroom API host.
pub const DEFAULT_BASE_URL: &str = "https://classroom.googleapis.com";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Classroom API location and credentials.
    pub api: ApiConfig,

    /// Problems found while loading, logged once logging is initialized.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Classroom API settings shared by every tool.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the API, without the `/v1` prefix.
    pub base_url: String,

    /// OAuth access token, sent as `access_token` and `oauth_token`.
    pub bearer_token: Option<String>,

    /// API key, sent as `key`.
    pub api_key: Option<String>,

    /// Per-request timeout. `None` keeps the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    /// The bearer token, if configured and non-empty.
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref().filter(|t| !t.is_empty())
    }

    /// The API key, if configured and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            bearer_token: None,
            api_key: None,
            timeout_secs: None,
        }
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field(
                "bearer_token",
                &self.bearer_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "classroom-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognised variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_CLASSROOM_BASE_URL`, `MCP_CLASSROOM_BEARER_TOKEN`,
    /// `MCP_CLASSROOM_API_KEY`, `MCP_CLASSROOM_TIMEOUT_SECS` and the
    /// `MCP_TRANSPORT` family.
    ///
    /// Nothing is logged here since the subscriber is not installed yet;
    /// recoverable problems are collected in [`Config::warnings`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("MCP_CLASSROOM_BASE_URL") {
            config.api.base_url = base_url;
        }

        config.api.bearer_token = std::env::var("MCP_CLASSROOM_BEARER_TOKEN").ok();
        config.api.api_key = std::env::var("MCP_CLASSROOM_API_KEY").ok();

        if config.api.bearer_token().is_none() && config.api.api_key().is_none() {
            config.warnings.push(
                "No Classroom credentials configured. Set MCP_CLASSROOM_BEARER_TOKEN \
                 and/or MCP_CLASSROOM_API_KEY"
                    .to_string(),
            );
        }

        if let Ok(timeout) = std::env::var("MCP_CLASSROOM_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.api.timeout_secs = Some(secs),
                Err(_) => config.warnings.push(format!(
                    "Ignoring invalid MCP_CLASSROOM_TIMEOUT_SECS: {}",
                    timeout
                )),
            }
        }

        config
    }
}
