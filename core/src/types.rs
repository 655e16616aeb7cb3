//! Domain DTOs for the hastebin API.
//!
//! # Design
//! Response bodies are decoded into permissive structs whose fields are all
//! optional. Choosing which field becomes the caller's content is a separate,
//! pure step (`FetchedDocument::content`) so the decode path is identical for
//! both fetch shapes.

use serde::{Deserialize, Serialize};

/// Which representation of a document a fetch asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// `GET /documents/{code}`, content in `data`.
    #[default]
    Document,
    /// `GET /raw/{code}`, content in `body`.
    Raw,
}

impl View {
    pub(crate) fn path_prefix(self) -> &'static str {
        match self {
            View::Document => "documents",
            View::Raw => "raw",
        }
    }

    pub(crate) fn content_field(self) -> &'static str {
        match self {
            View::Document => "data",
            View::Raw => "body",
        }
    }
}

impl From<bool> for View {
    fn from(raw: bool) -> Self {
        if raw {
            View::Raw
        } else {
            View::Document
        }
    }
}

/// Decoded JSON body of a fetch response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FetchedDocument {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl FetchedDocument {
    /// The content field `view` reads: `body` for raw, `data` otherwise.
    pub fn content(self, view: View) -> Option<String> {
        match view {
            View::Document => self.data,
            View::Raw => self.body,
        }
    }
}

/// Decoded JSON body of a create response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreatedDocument {
    #[serde(default)]
    pub key: Option<String>,
}

/// Outcome of a successful create: the assigned code and its full address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostResult {
    pub code: String,
    pub url: String,
}
