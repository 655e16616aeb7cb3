//! `HastebinClient` paired with a `Transport`.
//!
//! Each call is build, one `execute`, parse. Nothing is cached or retried.

use std::fmt;

use tracing::debug;

use crate::client::HastebinClient;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::transport::Transport;
use crate::types::PostResult;

/// Hastebin client that performs its own I/O.
#[derive(Clone)]
pub struct Hastebin<T> {
    client: HastebinClient,
    transport: T,
}

// Transports need not be `Debug`.
impl<T> fmt::Debug for Hastebin<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hastebin")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "ureq")]
impl Hastebin<crate::transport::UreqTransport> {
    /// Validate `config` and use a default `UreqTransport`.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Self::with_transport(config, crate::transport::UreqTransport::new())
    }
}

impl<T: Transport> Hastebin<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, Error> {
        Ok(Self {
            client: HastebinClient::new(config)?,
            transport,
        })
    }

    pub fn client(&self) -> &HastebinClient {
        &self.client
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Fetch the document stored under `code`.
    ///
    /// With `raw` the `/raw/` endpoint is used and its `body` field returned;
    /// otherwise `/documents/` and its `data` field.
    pub fn get(&self, code: &str, raw: bool) -> Result<String, Error> {
        debug!(code, raw, "fetching document");
        let request = self.client.build_get(code, raw)?;
        let response = self.transport.execute(request)?;
        Ok(self.client.parse_get(raw, response)?)
    }

    /// Store `content` as a new document. The string is sent verbatim.
    pub fn post(&self, content: &str) -> Result<PostResult, Error> {
        debug!(len = content.len(), "creating document");
        let request = self.client.build_post(content);
        let response = self.transport.execute(request)?;
        let result = self.client.parse_post(response)?;
        debug!(code = %result.code, "document created");
        Ok(result)
    }
}
