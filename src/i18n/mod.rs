//! Internationalization support: the language catalog and translation metrics.
//!
//! The catalog is the ordered list of languages a site offers. Unlike a
//! process-global registry, it is an owned value constructed per site, because
//! the default language differs between deployments (a Chinese blog folds its
//! `zh` content into the primary entity, an English one its `en` content).

mod catalog;
mod metrics;

pub use catalog::{LanguageCatalog, LanguageConfig};
pub use metrics::{MetricsReport, TranslationMetrics};
