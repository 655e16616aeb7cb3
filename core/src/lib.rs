//! Client for pastebin-style "hastebin" services.
//!
//! # Overview
//! Two operations against one base URL: fetch a stored document by code and
//! create a new document. Requests may carry a bearer credential.
//!
//! # Design
//! - `HastebinClient` is sans-IO: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse`. It holds only validated config.
//! - `Hastebin` pairs it with a `Transport` for one-call convenience.
//!   `UreqTransport` (feature `ureq`, on by default) is the stock transport.
//! - The public endpoint (`DEFAULT_BASE_URL`) refuses to construct without a
//!   credential; self-hosted endpoints accept none.
//!
//! ```no_run
//! use hastebin_core::{ClientConfig, Hastebin};
//!
//! # fn main() -> Result<(), hastebin_core::Error> {
//! let hastebin = Hastebin::new(ClientConfig::new().with_credential("your-key"))?;
//! let posted = hastebin.post("Hello, world!")?;
//! let content = hastebin.get(&posted.code, false)?;
//! assert_eq!(content, "Hello, world!");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod hastebin;
pub mod http;
pub mod transport;
pub mod types;

pub use client::HastebinClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, ConfigError, Error, Operation};
pub use hastebin::Hastebin;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, TransportError};
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{FetchedDocument, PostResult, View};
