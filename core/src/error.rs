//! Error types for the hastebin client.
//!
//! # Design
//! Construction, response interpretation and transport failures are separate
//! enums so the sans-IO `HastebinClient` never has to mention I/O. `Error`
//! folds all three together for the transport-backed `Hastebin`.

use std::fmt;

use thiserror::Error;

use crate::transport::TransportError;

/// Which logical operation produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Post,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Get => f.write_str("get"),
            Operation::Post => f.write_str("post"),
        }
    }
}

/// Rejected `ClientConfig`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The public endpoint was selected without a credential.
    #[error("no authorization credential provided")]
    MissingCredential,
}

/// Errors returned by `HastebinClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-2xx status.
    #[error("failed to {operation} document: HTTP {status}")]
    Request {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// The response body was not the expected JSON.
    #[error("failed to decode {operation} response: {message}")]
    Deserialization { operation: Operation, message: String },

    /// The JSON body decoded but lacked the field the operation reads.
    #[error("{operation} response has no `{field}` field")]
    MissingField {
        operation: Operation,
        field: &'static str,
    },

    /// A fetch was attempted with an empty document code.
    #[error("document code must not be empty")]
    EmptyCode,
}

impl ApiError {
    /// HTTP status for `Request` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Everything `Hastebin` can fail with.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(e) => e.status(),
            _ => None,
        }
    }
}
