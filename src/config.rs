use std::fmt;
use std::time::Duration;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// A validated absolute `http`/`https` URL.
///
/// Constructing one is the only validation the content endpoint gets, so a
/// malformed value surfaces at startup instead of on the first request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(Url);

impl Endpoint {
    /// Parse and validate an endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty, not an absolute URL, uses a
    /// scheme other than `http`/`https`, or has no host.
    pub fn parse(name: &str, value: &str) -> Result<Self, ConfigError> {
        let invalid = |message: &str| ConfigError::InvalidValue {
            name: name.to_string(),
            message: message.to_string(),
        };

        let value = value.trim();
        if value.is_empty() {
            return Err(invalid("cannot be empty"));
        }
        if !value.starts_with("http://") && !value.starts_with("https://") {
            return Err(invalid(
                "must be an absolute URL starting with http:// or https://",
            ));
        }

        let url = Url::parse(value).map_err(|e| invalid(&format!("not a valid URL: {e}")))?;
        if url.host_str().map_or(true, str::is_empty) {
            return Err(invalid("URL has no host"));
        }

        Ok(Self(url))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Content API
    pub graphcms_endpoint: Endpoint,
    pub graphcms_token: Option<String>,
    pub http_timeout: Duration,

    // Comments
    pub comments_api_url: Endpoint,

    // Web Server
    pub web_host: String,
    pub web_port: u16,
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let web_port = parse_env_u16("WEB_PORT", 3000)?;
        let comments_api_url = optional_env("COMMENTS_API_URL")
            .unwrap_or_else(|| format!("http://127.0.0.1:{web_port}/api/comments"));

        Ok(Self {
            // Content API
            graphcms_endpoint: Endpoint::parse(
                "GRAPHCMS_ENDPOINT",
                &required_env("GRAPHCMS_ENDPOINT")?,
            )?,
            graphcms_token: optional_env("GRAPHCMS_TOKEN"),
            http_timeout: Duration::from_secs(parse_env_u64("HTTP_TIMEOUT_SECS", 30)?),

            // Comments
            comments_api_url: Endpoint::parse("COMMENTS_API_URL", &comments_api_url)?,

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port,
            site_name: env_or_default("SITE_NAME", "GraphCMS Blog"),
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "HTTP_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.web_host.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "WEB_HOST".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self
            .graphcms_token
            .as_deref()
            .is_some_and(|t| t.chars().any(char::is_whitespace))
        {
            return Err(ConfigError::InvalidValue {
                name: "GRAPHCMS_TOKEN".to_string(),
                message: "must not contain whitespace".to_string(),
            });
        }
        Ok(())
    }

    /// Configuration pointing at a local content endpoint, for tests.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            graphcms_endpoint: Endpoint(
                Url::parse("http://127.0.0.1:9/graphql").expect("static test URL"),
            ),
            graphcms_token: None,
            http_timeout: Duration::from_secs(5),
            comments_api_url: Endpoint(
                Url::parse("http://127.0.0.1:9/api/comments").expect("static test URL"),
            ),
            web_host: "127.0.0.1".to_string(),
            web_port: 3000,
            site_name: "Test Blog".to_string(),
        }
    }
}

fn required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}
