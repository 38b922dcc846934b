//! Completion progress, derived from the store.
//!
//! Progress is a pure function of current field values: recomputing from the
//! same store state always yields the same map, regardless of edit order.

use crate::i18n::LanguageCatalog;
use crate::store::TranslationStore;

/// Completion percentage (0-100) for one language: the share of tracked
/// fields with a non-empty, whitespace-trimmed value.
pub fn language_progress(store: &TranslationStore, language: &str) -> u8 {
    let schema = store.schema();
    let total = schema.len();
    if total == 0 {
        return 0;
    }
    let completed = schema
        .iter()
        .filter(|f| !store.value(language, f).trim().is_empty())
        .count();
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

/// Per-language progress for all enabled catalog languages, in catalog order.
pub fn progress_map(store: &TranslationStore, catalog: &LanguageCatalog) -> Vec<(String, u8)> {
    catalog
        .list_enabled()
        .iter()
        .map(|lang| (lang.code.clone(), language_progress(store, &lang.code)))
        .collect()
}

/// Arithmetic mean of per-language progress across all enabled catalog
/// languages, rounded to the nearest integer; 0 when no languages are
/// configured.
pub fn overall_progress(store: &TranslationStore, catalog: &LanguageCatalog) -> u8 {
    let languages = catalog.list_enabled();
    if languages.is_empty() {
        return 0;
    }
    let sum: u32 = languages
        .iter()
        .map(|lang| u32::from(language_progress(store, &lang.code)))
        .sum();
    (f64::from(sum) / languages.len() as f64).round() as u8
}
