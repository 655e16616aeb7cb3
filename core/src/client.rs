//! Stateless HTTP request builder and response parser for the hastebin API.
//!
//! # Design
//! `HastebinClient` holds only its resolved configuration and carries no
//! mutable state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. Whoever executes the round-trip sits in between.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::config::{ClientConfig, ResolvedConfig};
use crate::error::{ApiError, ConfigError, Operation};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreatedDocument, FetchedDocument, PostResult, View};

/// Unreserved path characters per RFC 3986; everything else is encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn encode_code(code: &str) -> String {
    utf8_percent_encode(code, PATH_SEGMENT).to_string()
}

/// Synchronous, stateless client for the hastebin API.
#[derive(Debug, Clone)]
pub struct HastebinClient {
    config: ResolvedConfig,
}

impl HastebinClient {
    /// Validate `config` and build a client.
    ///
    /// Fails with `ConfigError::MissingCredential` when the public endpoint is
    /// selected without a credential.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            config: config.resolve()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn has_credential(&self) -> bool {
        self.config.credential.is_some()
    }

    /// Build a fetch request for `code`. `raw` selects `/raw/` over `/documents/`.
    pub fn build_get(&self, code: &str, raw: bool) -> Result<HttpRequest, ApiError> {
        if code.is_empty() {
            return Err(ApiError::EmptyCode);
        }
        let view = View::from(raw);
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: format!(
                "{}/{}/{}",
                self.config.base_url,
                view.path_prefix(),
                encode_code(code)
            ),
            headers: self.auth_headers(),
            body: None,
        })
    }

    /// Build a create request. `content` is sent verbatim.
    pub fn build_post(&self, content: &str) -> HttpRequest {
        let mut headers = vec![("content-type".to_string(), "application/json".to_string())];
        headers.extend(self.auth_headers());
        HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/documents", self.config.base_url),
            headers,
            body: Some(content.to_string()),
        }
    }

    /// Decode a fetch response and pick the content field for `raw`.
    pub fn parse_get(&self, raw: bool, response: HttpResponse) -> Result<String, ApiError> {
        check_status(Operation::Get, &response)?;
        let view = View::from(raw);
        let document: FetchedDocument = decode(Operation::Get, &response.body)?;
        document.content(view).ok_or(ApiError::MissingField {
            operation: Operation::Get,
            field: view.content_field(),
        })
    }

    /// Decode a create response into the assigned code and its address.
    pub fn parse_post(&self, response: HttpResponse) -> Result<PostResult, ApiError> {
        check_status(Operation::Post, &response)?;
        let created: CreatedDocument = decode(Operation::Post, &response.body)?;
        let code = created.key.ok_or(ApiError::MissingField {
            operation: Operation::Post,
            field: "key",
        })?;
        Ok(PostResult {
            url: format!("{}/{code}", self.config.base_url),
            code,
        })
    }

    /// `authorization` header when a credential is configured; nothing otherwise.
    fn auth_headers(&self) -> Vec<(String, String)> {
        match &self.config.credential {
            Some(credential) => vec![("authorization".to_string(), format!("Bearer {credential}"))],
            None => Vec::new(),
        }
    }
}

/// Any 2xx is success; everything else becomes `ApiError::Request`.
fn check_status(operation: Operation, response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    warn!(%operation, status = response.status, "hastebin request failed");
    Err(ApiError::Request {
        operation,
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(operation: Operation, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization {
        operation,
        message: e.to_string(),
    })
}
