// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for the fallible edges of the crate.
//!
//! The search and pagination core does not fail: short queries, empty
//! catalogs and zero matches are states, not errors. What can fail is
//! everything around it - reading a config or catalog file, parsing an HTML
//! page, a config with impossible values, or a page request outside the
//! current page range.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading a file from disk failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config or catalog document is not valid JSON for its schema.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is out of its allowed range.
    #[error("invalid config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// The HTML page could not be turned into a document tree.
    #[error("failed to parse HTML at byte {position}: {message}")]
    Html { position: u64, message: String },

    /// A page was requested outside `[1, total_pages]`.
    #[error("page {page} is out of range (1..={total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
