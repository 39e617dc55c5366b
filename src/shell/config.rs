use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3099";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3099";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is not a valid socket address: {value:?}")]
    InvalidAddr { key: &'static str, value: String },

    #[error("{key} must be an http(s) url: {value:?}")]
    InvalidBaseUrl { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub log_filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub log_filter: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup("NOTES_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw.parse().map_err(|_| ConfigError::InvalidAddr {
            key: "NOTES_ADDR",
            value: raw.clone(),
        })?;
        Ok(Self {
            addr,
            log_filter: log_filter(&lookup),
        })
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("NOTES_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl {
                key: "NOTES_BASE_URL",
                value: base_url,
            });
        }
        Ok(Self {
            base_url,
            log_filter: log_filter(&lookup),
        })
    }
}

fn log_filter(lookup: &impl Fn(&str) -> Option<String>) -> String {
    lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}
