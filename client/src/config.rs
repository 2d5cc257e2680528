//! Backend connection settings shared by every REST call.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SSR host builds a `ClientConfig` from its environment, provides it as
//! Leptos context and mirrors it into `<meta>` tags. The hydrated client reads
//! those tags back so both render passes talk to the same backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "http://localhost:4000";
pub const API_BASE_META: &str = "clean-india-api-base";
pub const CREDENTIALS_META: &str = "clean-india-api-credentials";

/// Whether the ambient session cookie travels with backend requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialMode {
    /// Send cookies cross-origin (the backend lives on another port).
    #[default]
    Include,
    SameOrigin,
    Omit,
}

impl CredentialMode {
    /// Parse a configured value. Boolean spellings map to include/omit.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "include" | "1" | "true" | "yes" | "on" => Some(Self::Include),
            "same-origin" => Some(Self::SameOrigin),
            "omit" | "0" | "false" | "no" | "off" => Some(Self::Omit),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::SameOrigin => "same-origin",
            Self::Omit => "omit",
        }
    }

    #[cfg(feature = "hydrate")]
    pub(crate) fn request_credentials(self) -> web_sys::RequestCredentials {
        match self {
            Self::Include => web_sys::RequestCredentials::Include,
            Self::SameOrigin => web_sys::RequestCredentials::SameOrigin,
            Self::Omit => web_sys::RequestCredentials::Omit,
        }
    }
}

/// Where the backend lives and how requests authenticate against it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base: String,
    pub credentials: CredentialMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), credentials: CredentialMode::Include }
    }
}

impl ClientConfig {
    pub fn new(api_base: &str, credentials: CredentialMode) -> Self {
        let api_base = api_base.trim().trim_end_matches('/');
        let api_base = if api_base.is_empty() { DEFAULT_API_BASE } else { api_base };
        Self { api_base: api_base.to_owned(), credentials }
    }

    /// Absolute URL for an API path such as `/api/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base)
        } else {
            format!("{}/{path}", self.api_base)
        }
    }

    /// Resolve the config in the browser from the SSR `<meta>` tags.
    ///
    /// Falls back to defaults when a tag is missing or on the server.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let base = read_meta(API_BASE_META).unwrap_or_else(|| DEFAULT_API_BASE.to_owned());
            let credentials = read_meta(CREDENTIALS_META)
                .and_then(|raw| CredentialMode::parse(&raw))
                .unwrap_or_default();
            Self::new(&base, credentials)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.query_selector(&format!("meta[name=\"{name}\"]")).ok().flatten()?;
    element.get_attribute("content")
}
