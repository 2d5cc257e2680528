//! Host configuration parsed from environment variables.
//!
//! Recognised variables:
//! - `PORT`: listen port, default 3000
//! - `CLEAN_INDIA_API_BASE`: complaint backend origin, default `http://localhost:4000`
//! - `CLEAN_INDIA_API_CREDENTIALS`: `include` (default), `same-origin` or `omit`
//! - `CLEAN_INDIA_CORS_ORIGIN`: allowed origin for `/healthz` and assets, any when unset
//! - `CLEAN_INDIA_COMPRESSION`: gzip responses, default on

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::{ClientConfig, CredentialMode, DEFAULT_API_BASE};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Handed to the app as context and mirrored into the page shell.
    pub client: ClientConfig,
    pub cors_origin: Option<String>,
    pub compression: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// `InvalidEnv` for an unparsable port or credential mode.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ServerError::InvalidEnv { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let credentials = match get("CLEAN_INDIA_API_CREDENTIALS") {
            Some(raw) => CredentialMode::parse(&raw)
                .ok_or(ServerError::InvalidEnv { var: "CLEAN_INDIA_API_CREDENTIALS", value: raw })?,
            None => CredentialMode::default(),
        };
        let api_base = get("CLEAN_INDIA_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_owned());

        let compression = get("CLEAN_INDIA_COMPRESSION").and_then(|raw| parse_bool(&raw)).unwrap_or(true);

        Ok(Self {
            port,
            client: ClientConfig::new(&api_base, credentials),
            cors_origin: get("CLEAN_INDIA_CORS_ORIGIN"),
            compression,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
