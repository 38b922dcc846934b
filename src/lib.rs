//! Multi-locale content synchronization core for a multilingual blog admin console.
//!
//! One editing session owns a [`store::TranslationStore`]: the default-language
//! entity plus a collection of per-language translation records, created lazily
//! as the user edits. On top of that sit derived completion progress, a
//! copy/auto-translate orchestrator backed by a pluggable
//! [`translate::TranslationProvider`], and a wire-format adapter for the remote
//! REST API.
//!
//! The crate is a pure in-memory state module: rendering, routing, auth and
//! storage belong to its collaborators.

pub mod config;
pub mod editor;
pub mod error;
pub mod fields;
pub mod i18n;
pub mod progress;
pub mod provider;
pub mod retry;
pub mod slug;
pub mod store;
pub mod translate;
pub mod transport;
pub mod wire;

pub use editor::{EditorSession, LanguageSelection};
pub use error::{CatalogError, StoreError, TranslateError, TransportError};
pub use fields::{FieldSchema, ARTICLE_FIELDS, SETTINGS_FIELDS};
pub use i18n::{LanguageCatalog, LanguageConfig};
pub use store::{EntityMeta, RecordView, TranslationRecord, TranslationStore};
pub use translate::{FieldOutcome, FieldResult, TranslateReport, TranslationProvider};
pub use transport::{ContentTransport, RestTransport};
pub use wire::{WirePayload, WireTranslation};
