//! Error types for the content synchronization core.
//!
//! Field-level operations fail locally with a result value; aggregate
//! operations (translate-all, deserialize) degrade gracefully and report
//! partial failures instead of failing the whole batch.

use thiserror::Error;

/// Errors raised while building a language catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no default language configured")]
    NoDefault,

    #[error("multiple default languages configured: '{0}' and '{1}'")]
    MultipleDefaults(String, String),

    #[error("duplicate language code '{0}'")]
    DuplicateCode(String),

    #[error("default language '{0}' is disabled")]
    DefaultDisabled(String),
}

/// Errors from store writes and editor selection changes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("language '{0}' is not in the catalog or is disabled")]
    UnknownLanguage(String),
}

/// Errors that block a translate operation before it starts.
///
/// Per-field translation failures are not represented here; they are carried
/// inside [`crate::translate::TranslateReport`] so that one failing field
/// never aborts its siblings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("no translation provider is configured")]
    ProviderNotConfigured,

    #[error("another translate operation is already in flight")]
    Busy,
}

/// Errors surfaced by the persistence transport.
///
/// The core does not retry these; a failed save leaves the in-memory store
/// untouched so the user's edits can be retried.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
}
