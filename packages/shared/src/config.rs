use std::fmt;
use std::net::IpAddr;

#[cfg(test)]
use mockall::automock;

pub const API_KEY_VAR: &str = "LIVEKIT_API_KEY";
pub const API_SECRET_VAR: &str = "LIVEKIT_API_SECRET";
pub const PORT_VAR: &str = "PORT";
pub const HOST_VAR: &str = "HOST";

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Key identifier and signing secret issued by LiveKit.
#[derive(Clone, PartialEq, Eq)]
pub struct LiveKitCredentials {
    pub api_key: String,
    pub api_secret: String,
}

impl LiveKitCredentials {
    /// Returns `None` unless both values are present and non-empty.
    pub fn from_parts(api_key: Option<String>, api_secret: Option<String>) -> Option<Self> {
        match (api_key, api_secret) {
            (Some(api_key), Some(api_secret)) if !api_key.is_empty() && !api_secret.is_empty() => {
                Some(LiveKitCredentials {
                    api_key,
                    api_secret,
                })
            }
            _ => None,
        }
    }
}

impl fmt::Debug for LiveKitCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveKitCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

#[cfg_attr(test, automock)]
pub trait CredentialProvider: Send + Sync {
    fn credentials(&self) -> Option<LiveKitCredentials>;
}

/// Reads the credentials from the process environment on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvCredentialProvider;

impl CredentialProvider for EnvCredentialProvider {
    fn credentials(&self) -> Option<LiveKitCredentials> {
        LiveKitCredentials::from_parts(
            std::env::var(API_KEY_VAR).ok(),
            std::env::var(API_SECRET_VAR).ok(),
        )
    }
}

/// Always hands out the same credentials, or none at all.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialProvider {
    credentials: Option<LiveKitCredentials>,
}

impl StaticCredentialProvider {
    pub fn new(api_key: &str, api_secret: &str) -> Self {
        StaticCredentialProvider {
            credentials: LiveKitCredentials::from_parts(
                Some(api_key.to_string()),
                Some(api_secret.to_string()),
            ),
        }
    }

    pub fn unconfigured() -> Self {
        StaticCredentialProvider { credentials: None }
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn credentials(&self) -> Option<LiveKitCredentials> {
        self.credentials.clone()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidHost(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => write!(f, "Invalid {}: {:?}", PORT_VAR, value),
            ConfigError::InvalidHost(value) => write!(f, "Invalid {}: {:?}", HOST_VAR, value),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_VAR) {
            Some(value) if !value.is_empty() => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            _ => DEFAULT_PORT,
        };

        let host = lookup(HOST_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host))?;

        Ok(ServerConfig { host, port })
    }
}
