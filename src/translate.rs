//! Translation capability contract and per-field outcome reporting.
//!
//! Providers are injected: anything satisfying [`TranslationProvider`] can
//! back the editor's auto-translate, and a provider instance is stateless and
//! may be shared across editing sessions.

use async_trait::async_trait;
use tracing::warn;

use crate::i18n::TranslationMetrics;
use crate::store::TranslationStore;

/// An injected machine-translation capability.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Whether the provider can be invoked at all (e.g. an API key is
    /// present). Callers must check this before starting a translate
    /// operation.
    fn is_configured(&self) -> bool;

    /// Translate `text` between two language codes.
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> anyhow::Result<String>;
}

/// Outcome of translating a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The provider succeeded and the value was written to the target.
    Translated,
    /// The source value was empty; nothing to translate, not an error.
    Skipped,
    /// The provider failed for this field; the target field is unchanged.
    Failed(String),
}

/// Per-field result inside a [`TranslateReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResult {
    pub field: &'static str,
    pub outcome: FieldOutcome,
}

/// Aggregate result of a translate-all operation.
///
/// Failures are reported per field, never as one atomic unit: a failing field
/// does not roll back siblings that already succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslateReport {
    pub items: Vec<FieldResult>,
    pub translated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl TranslateReport {
    pub fn record(&mut self, field: &'static str, outcome: FieldOutcome) {
        match outcome {
            FieldOutcome::Translated => self.translated += 1,
            FieldOutcome::Skipped => self.skipped += 1,
            FieldOutcome::Failed(_) => self.failed += 1,
        }
        self.items.push(FieldResult { field, outcome });
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &FieldResult> {
        self.items
            .iter()
            .filter(|item| matches!(item.outcome, FieldOutcome::Failed(_)))
    }
}

/// Translate one field from `source` to `target` and write the result into
/// the store. The single suspension point of the subsystem.
///
/// An empty (trimmed) source is a skip. A provider error leaves the target
/// field unchanged and is returned as [`FieldOutcome::Failed`], never
/// propagated.
pub(crate) async fn translate_into(
    store: &mut TranslationStore,
    provider: &dyn TranslationProvider,
    source: &str,
    target: &str,
    field: &'static str,
) -> FieldOutcome {
    let metrics = TranslationMetrics::global();

    let text = store.value(source, field).trim().to_string();
    if text.is_empty() {
        metrics.record_field_skipped();
        return FieldOutcome::Skipped;
    }

    metrics.record_provider_call();
    match provider.translate(&text, source, target).await {
        Ok(translated) => match store.write(target, field, translated) {
            Ok(()) => {
                metrics.record_field_translated();
                FieldOutcome::Translated
            }
            Err(e) => {
                metrics.record_field_failed();
                FieldOutcome::Failed(e.to_string())
            }
        },
        Err(e) => {
            metrics.record_provider_failure();
            metrics.record_field_failed();
            let message = format!("{e:#}");
            warn!("translation of '{}' ({} -> {}) failed: {}", field, source, target, message);
            FieldOutcome::Failed(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::ARTICLE_FIELDS;
    use anyhow::bail;

    /// Provider that tags text with the target language.
    struct EchoProvider;

    #[async_trait]
    impl TranslationProvider for EchoProvider {
        fn is_configured(&self) -> bool {
            true
        }

        async fn translate(
            &self,
            text: &str,
            _source_lang: &str,
            target_lang: &str,
        ) -> anyhow::Result<String> {
            Ok(format!("[{target_lang}] {text}"))
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl TranslationProvider for FailingProvider {
        fn is_configured(&self) -> bool {
            true
        }

        async fn translate(&self, _: &str, _: &str, _: &str) -> anyhow::Result<String> {
            bail!("provider exploded")
        }
    }

    fn store() -> TranslationStore {
        TranslationStore::new(ARTICLE_FIELDS, "zh")
    }

    #[tokio::test]
    async fn test_translate_into_writes_target() {
        let mut store = store();
        store.write("zh", "title", "你好").expect("write");

        let outcome = translate_into(&mut store, &EchoProvider, "zh", "en", "title").await;

        assert_eq!(outcome, FieldOutcome::Translated);
        assert_eq!(store.value("en", "title"), "[en] 你好");
        // Source untouched.
        assert_eq!(store.value("zh", "title"), "你好");
    }

    #[tokio::test]
    async fn test_empty_source_is_skipped() {
        let mut store = store();
        let outcome = translate_into(&mut store, &EchoProvider, "zh", "en", "title").await;

        assert_eq!(outcome, FieldOutcome::Skipped);
        assert!(store.translations().is_empty(), "no record created");
    }

    #[tokio::test]
    async fn test_whitespace_source_is_skipped() {
        let mut store = store();
        store.write("zh", "title", "   ").expect("write");

        let outcome = translate_into(&mut store, &EchoProvider, "zh", "en", "title").await;
        assert_eq!(outcome, FieldOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_provider_failure_leaves_target_unchanged() {
        let mut store = store();
        store.write("zh", "title", "你好").expect("write");
        store.write("en", "title", "old value").expect("write");

        let outcome = translate_into(&mut store, &FailingProvider, "zh", "en", "title").await;

        match outcome {
            FieldOutcome::Failed(msg) => assert!(msg.contains("provider exploded")),
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(store.value("en", "title"), "old value");
    }

    #[test]
    fn test_report_aggregation() {
        let mut report = TranslateReport::default();
        report.record("title", FieldOutcome::Translated);
        report.record("content", FieldOutcome::Failed("boom".into()));
        report.record("summary", FieldOutcome::Skipped);

        assert_eq!(report.translated, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.skipped, 1);
        assert!(!report.all_succeeded());

        let failures: Vec<_> = report.failures().map(|f| f.field).collect();
        assert_eq!(failures, vec!["content"]);
    }
}
