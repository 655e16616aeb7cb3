//! Client configuration.
//!
//! `ClientConfig` is what callers construct (or deserialize from their own
//! config file). `HastebinClient::new` resolves and validates it once; the
//! resolved values never change afterwards.

use std::fmt;

use serde::Deserialize;

use crate::error::ConfigError;

/// Canonical address of the public hastebin service.
pub const DEFAULT_BASE_URL: &str = "https://hastebin.com";

/// Unvalidated client settings. Every field is optional.
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Service root. `None` selects `DEFAULT_BASE_URL`.
    pub base_url: Option<String>,
    /// Bearer token. Required by the public service.
    pub credential: Option<String>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// Apply defaults and enforce the credential rule.
    ///
    /// An empty credential counts as absent. The public endpoint demands a
    /// credential; any other base URL accepts none.
    pub(crate) fn resolve(self) -> Result<ResolvedConfig, ConfigError> {
        let base_url = self
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let credential = self.credential.filter(|c| !c.is_empty());

        if base_url == DEFAULT_BASE_URL && credential.is_none() {
            return Err(ConfigError::MissingCredential);
        }

        Ok(ResolvedConfig {
            base_url,
            credential,
        })
    }
}

/// Shared `Debug` body that never prints the credential.
fn fmt_redacted(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    base_url: &dyn fmt::Debug,
    credential: &Option<String>,
) -> fmt::Result {
    f.debug_struct(name)
        .field("base_url", base_url)
        .field("credential", &credential.as_ref().map(|_| "<redacted>"))
        .finish()
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_redacted(f, "ClientConfig", &self.base_url, &self.credential)
    }
}

/// Validated configuration held by `HastebinClient`.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct ResolvedConfig {
    pub(crate) base_url: String,
    pub(crate) credential: Option<String>,
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_redacted(f, "ResolvedConfig", &self.base_url, &self.credential)
    }
}
