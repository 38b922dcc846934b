//! Editor session: field binding, copy/translate orchestration, save/load.
//!
//! One session per edited entity. The session owns the store, the catalog and
//! the ephemeral language selection, and carries the busy flag that keeps at
//! most one translate operation in flight.
//!
//! Concurrency model: single-threaded and cooperative. The provider call is
//! the only suspension point. A synchronous edit made while a translate is in
//! flight is allowed; if the translate's write lands afterwards it wins. This
//! last-write-wins behavior is the defined semantics, not an accident.

use tracing::debug;

use crate::error::{StoreError, TranslateError, TransportError};
use crate::fields::FieldSchema;
use crate::i18n::LanguageCatalog;
use crate::progress;
use crate::store::{RecordView, TranslationStore};
use crate::translate::{translate_into, FieldOutcome, TranslateReport, TranslationProvider};
use crate::transport::ContentTransport;
use crate::{slug, wire};

/// Which record and field the editor is currently pointed at.
///
/// `source_language` and `target_language` may be equal transiently while the
/// user switches tabs; copy/translate against self is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSelection {
    pub source_language: String,
    pub target_language: String,
    pub active_field: &'static str,
}

/// One editing session for one content entity.
pub struct EditorSession {
    catalog: LanguageCatalog,
    store: TranslationStore,
    selection: LanguageSelection,
    busy: bool,
}

impl EditorSession {
    /// A session for the "new entity" flow. Source and target start on the
    /// default language; the active field is the schema's first field.
    pub fn new(catalog: LanguageCatalog, schema: FieldSchema) -> Self {
        let default = catalog.default_language().to_string();
        let selection = LanguageSelection {
            source_language: default.clone(),
            target_language: default.clone(),
            active_field: schema.first().unwrap_or(""),
        };
        Self {
            store: TranslationStore::new(schema, default),
            catalog,
            selection,
            busy: false,
        }
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> &LanguageSelection {
        &self.selection
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    // ==================== Selection ====================

    pub fn set_source_language(&mut self, code: &str) -> Result<(), StoreError> {
        self.selection.source_language = self.checked_language(code)?;
        Ok(())
    }

    pub fn set_target_language(&mut self, code: &str) -> Result<(), StoreError> {
        self.selection.target_language = self.checked_language(code)?;
        Ok(())
    }

    pub fn set_active_field(&mut self, name: &str) -> Result<(), StoreError> {
        self.selection.active_field = self
            .store
            .schema()
            .canonical(name)
            .ok_or_else(|| StoreError::UnknownField(name.to_string()))?;
        Ok(())
    }

    fn checked_language(&self, code: &str) -> Result<String, StoreError> {
        if self.catalog.is_enabled(code) {
            Ok(code.to_string())
        } else {
            Err(StoreError::UnknownLanguage(code.to_string()))
        }
    }

    // ==================== Field binding ====================

    /// Value currently shown in the bound form field:
    /// `(target_language, active_field)`.
    pub fn current_value(&self) -> &str {
        self.store
            .value(&self.selection.target_language, self.selection.active_field)
    }

    /// Write the bound form field.
    pub fn edit(&mut self, value: impl Into<String>) -> Result<(), StoreError> {
        let language = self.selection.target_language.clone();
        self.store.write(&language, self.selection.active_field, value)
    }

    /// Write any `(language, field)` pair, validating the language against
    /// the catalog.
    pub fn write(
        &mut self,
        language: &str,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), StoreError> {
        let language = self.checked_language(language)?;
        self.store.write(&language, field, value)
    }

    pub fn resolve(&self, language: &str) -> RecordView {
        self.store.resolve(language)
    }

    // ==================== Metadata ====================

    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        self.store.meta.category = (!category.is_empty()).then_some(category);
    }

    /// Set the SEO slug, normalizing arbitrary input; empty results clear it.
    pub fn set_slug(&mut self, raw: &str) {
        let normalized = slug::normalize(raw);
        self.store.meta.slug = (!normalized.is_empty()).then_some(normalized);
    }

    // ==================== Copy / translate ====================

    /// Copy one field verbatim from `source` to `target`. Synchronous, no
    /// provider involved. Copying a language onto itself is a no-op.
    pub fn copy_field(
        &mut self,
        source: &str,
        target: &str,
        field: &str,
    ) -> Result<(), StoreError> {
        let source = self.checked_language(source)?;
        let target = self.checked_language(target)?;
        if source == target {
            return Ok(());
        }
        let value = self.store.value(&source, field).to_string();
        self.store.write(&target, field, value)
    }

    /// Auto-translate one field from the selected source to the selected
    /// target language.
    ///
    /// Per-field problems (empty source, provider failure, untracked field)
    /// come back as a [`FieldOutcome`]; only precondition violations
    /// (unconfigured provider, another operation in flight) are errors.
    pub async fn translate_field(
        &mut self,
        provider: &dyn TranslationProvider,
        field: &str,
    ) -> Result<FieldOutcome, TranslateError> {
        if !provider.is_configured() {
            return Err(TranslateError::ProviderNotConfigured);
        }
        if self.busy {
            return Err(TranslateError::Busy);
        }
        let Some(field) = self.store.schema().canonical(field) else {
            return Ok(FieldOutcome::Failed(format!("unknown field '{field}'")));
        };

        let source = self.selection.source_language.clone();
        let target = self.selection.target_language.clone();
        if source == target {
            return Ok(FieldOutcome::Skipped);
        }

        self.busy = true;
        let outcome = translate_into(&mut self.store, provider, &source, &target, field).await;
        self.busy = false;
        Ok(outcome)
    }

    /// Auto-translate every tracked field from the selected source to the
    /// selected target language.
    ///
    /// Fields are independent: a failure in one is recorded in the report and
    /// does not stop or roll back the others.
    pub async fn translate_all(
        &mut self,
        provider: &dyn TranslationProvider,
    ) -> Result<TranslateReport, TranslateError> {
        if !provider.is_configured() {
            return Err(TranslateError::ProviderNotConfigured);
        }
        if self.busy {
            return Err(TranslateError::Busy);
        }

        let schema = self.store.schema();
        let source = self.selection.source_language.clone();
        let target = self.selection.target_language.clone();

        let mut report = TranslateReport::default();
        if source == target {
            for field in schema.iter() {
                report.record(field, FieldOutcome::Skipped);
            }
            return Ok(report);
        }

        self.busy = true;
        for field in schema.iter() {
            let outcome = translate_into(&mut self.store, provider, &source, &target, field).await;
            report.record(field, outcome);
        }
        self.busy = false;

        debug!(
            "translate_all {} -> {}: {} translated, {} skipped, {} failed",
            source, target, report.translated, report.skipped, report.failed
        );
        Ok(report)
    }

    // ==================== Progress ====================

    pub fn progress(&self, language: &str) -> u8 {
        progress::language_progress(&self.store, language)
    }

    pub fn progress_map(&self) -> Vec<(String, u8)> {
        progress::progress_map(&self.store, &self.catalog)
    }

    pub fn overall_progress(&self) -> u8 {
        progress::overall_progress(&self.store, &self.catalog)
    }

    // ==================== Persistence ====================

    /// Serialize and send the current state. On transport failure the
    /// in-memory store is untouched, so the user's edits survive and the save
    /// can be retried. On success, server-assigned metadata is adopted.
    pub async fn save(&mut self, transport: &dyn ContentTransport) -> Result<(), TransportError> {
        let payload = wire::serialize(&self.store);
        let echoed = transport.save(&payload).await?;
        if echoed.id.is_some() {
            self.store.meta.id = echoed.id;
        }
        if echoed.updated_at.is_some() {
            self.store.meta.updated_at = echoed.updated_at;
        }
        Ok(())
    }

    /// Fetch an entity and replace the session's store with it. On failure
    /// the current contents are kept.
    pub async fn load(
        &mut self,
        transport: &dyn ContentTransport,
        id: &str,
    ) -> Result<(), TransportError> {
        let payload = transport.load(id).await?;
        self.store = wire::deserialize(
            payload,
            self.store.schema(),
            self.catalog.default_language(),
        );
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn set_busy_for_test(&mut self, busy: bool) {
        self.busy = busy;
    }
}
