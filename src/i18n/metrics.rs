//! Translation metrics and observability.
//!
//! Process-wide counters for translate operations: how many fields were
//! translated, skipped (empty source) or failed, and how the underlying
//! provider behaved.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    /// Fields successfully translated and written to the target language
    fields_translated: AtomicUsize,

    /// Fields skipped because the source value was empty
    fields_skipped: AtomicUsize,

    /// Fields whose translation failed (provider error)
    fields_failed: AtomicUsize,

    /// Calls made to the translation provider
    provider_calls: AtomicUsize,

    /// Provider calls that failed
    provider_failures: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(|| TranslationMetrics {
            fields_translated: AtomicUsize::new(0),
            fields_skipped: AtomicUsize::new(0),
            fields_failed: AtomicUsize::new(0),
            provider_calls: AtomicUsize::new(0),
            provider_failures: AtomicUsize::new(0),
        })
    }

    pub fn record_field_translated(&self) {
        self.fields_translated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_field_skipped(&self) {
        self.fields_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_field_failed(&self) {
        self.fields_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_provider_call(&self) {
        self.provider_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_provider_failure(&self) {
        self.provider_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn fields_translated(&self) -> usize {
        self.fields_translated.load(Ordering::Relaxed)
    }

    pub fn fields_skipped(&self) -> usize {
        self.fields_skipped.load(Ordering::Relaxed)
    }

    pub fn fields_failed(&self) -> usize {
        self.fields_failed.load(Ordering::Relaxed)
    }

    pub fn provider_calls(&self) -> usize {
        self.provider_calls.load(Ordering::Relaxed)
    }

    pub fn provider_failures(&self) -> usize {
        self.provider_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let calls = self.provider_calls();
        let failures = self.provider_failures();
        let provider_success_rate = if calls > 0 {
            ((calls - failures) as f64 / calls as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            fields_translated: self.fields_translated(),
            fields_skipped: self.fields_skipped(),
            fields_failed: self.fields_failed(),
            provider_calls: calls,
            provider_failures: failures,
            provider_success_rate,
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.fields_translated.store(0, Ordering::Relaxed);
        self.fields_skipped.store(0, Ordering::Relaxed);
        self.fields_failed.store(0, Ordering::Relaxed);
        self.provider_calls.store(0, Ordering::Relaxed);
        self.provider_failures.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the current translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub fields_translated: usize,
    pub fields_skipped: usize,
    pub fields_failed: usize,
    pub provider_calls: usize,
    pub provider_failures: usize,

    /// Provider success rate as a percentage (0-100)
    pub provider_success_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_returns_same_instance() {
        let metrics1 = TranslationMetrics::global();
        let metrics2 = TranslationMetrics::global();
        assert!(std::ptr::eq(metrics1, metrics2));
    }

    // The counters are process-global and other tests drive the translate
    // path concurrently, so only monotonic deltas are asserted here.
    #[test]
    fn test_counters_increment() {
        let metrics = TranslationMetrics::global();

        let translated = metrics.fields_translated();
        let skipped = metrics.fields_skipped();
        let failed = metrics.fields_failed();
        let calls = metrics.provider_calls();
        let failures = metrics.provider_failures();

        metrics.record_field_translated();
        metrics.record_field_translated();
        metrics.record_field_skipped();
        metrics.record_field_failed();
        metrics.record_provider_call();
        metrics.record_provider_failure();

        assert!(metrics.fields_translated() >= translated + 2);
        assert!(metrics.fields_skipped() >= skipped + 1);
        assert!(metrics.fields_failed() >= failed + 1);
        assert!(metrics.provider_calls() >= calls + 1);
        assert!(metrics.provider_failures() >= failures + 1);
    }

    #[test]
    fn test_report_success_rate_in_range() {
        let metrics = TranslationMetrics::global();
        metrics.record_provider_call();

        let report = metrics.report();
        assert!(report.provider_calls >= 1);
        assert!((0.0..=100.0).contains(&report.provider_success_rate));
    }
}
