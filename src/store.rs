//! Translation record store and field resolution.
//!
//! Single source of truth for "what is the current value of field F in
//! language L". The default language's content lives directly on the entity;
//! every other language gets a lazily-created [`TranslationRecord`], stored in
//! insertion order. Absence is represented as emptiness, never as an error.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::fields::FieldSchema;

/// Non-localized entity metadata (shared across all languages).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityMeta {
    /// Server-assigned identifier; `None` until the first successful save.
    pub id: Option<String>,
    pub category: Option<String>,
    pub slug: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Localized field values for one non-default language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    pub language: String,
    pub fields: HashMap<String, String>,
}

impl TranslationRecord {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            fields: HashMap::new(),
        }
    }

    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// Whether at least one tracked field has a non-empty, trimmed value.
    /// Records without content are dropped at serialization time.
    pub fn has_content(&self, schema: FieldSchema) -> bool {
        schema.iter().any(|f| !self.field(f).trim().is_empty())
    }
}

/// Read-only snapshot of one language's content, with every tracked field
/// materialized (missing values appear as empty strings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    pub language: String,
    pub fields: HashMap<String, String>,
}

impl RecordView {
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }
}

/// In-memory store for one edited entity: default-language content plus the
/// per-language translation collection.
///
/// Owned exclusively by one editing session; lives for the duration of that
/// session.
#[derive(Debug, Clone)]
pub struct TranslationStore {
    schema: FieldSchema,
    default_language: String,
    entity_fields: HashMap<String, String>,
    pub meta: EntityMeta,
    translations: Vec<TranslationRecord>,
}

impl TranslationStore {
    /// An empty store for the "new entity" flow.
    pub fn new(schema: FieldSchema, default_language: impl Into<String>) -> Self {
        Self {
            schema,
            default_language: default_language.into(),
            entity_fields: HashMap::new(),
            meta: EntityMeta::default(),
            translations: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        schema: FieldSchema,
        default_language: String,
        entity_fields: HashMap<String, String>,
        meta: EntityMeta,
        translations: Vec<TranslationRecord>,
    ) -> Self {
        Self {
            schema,
            default_language,
            entity_fields,
            meta,
            translations,
        }
    }

    pub fn schema(&self) -> FieldSchema {
        self.schema
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Default-language field values (the entity's own content).
    pub fn entity_fields(&self) -> &HashMap<String, String> {
        &self.entity_fields
    }

    /// Translation records in insertion order. The default language never
    /// appears here.
    pub fn translations(&self) -> &[TranslationRecord] {
        &self.translations
    }

    /// Current value of `field` in `language`; "" when nothing has been
    /// written there.
    pub fn value(&self, language: &str, field: &str) -> &str {
        let fields = if language == self.default_language {
            &self.entity_fields
        } else {
            match self.translations.iter().find(|r| r.language == language) {
                Some(record) => &record.fields,
                None => return "",
            }
        };
        fields.get(field).map(String::as_str).unwrap_or("")
    }

    /// Snapshot of one language's content. Returns the default record for the
    /// default language, the stored record for a known translation, or a
    /// synthesized all-empty view otherwise. Never fails.
    pub fn resolve(&self, language: &str) -> RecordView {
        let fields = self
            .schema
            .iter()
            .map(|f| (f.to_string(), self.value(language, f).to_string()))
            .collect();
        RecordView {
            language: language.to_string(),
            fields,
        }
    }

    /// Upsert one field in one language. Writes to the default language land
    /// on the entity; any other language gets its record created on first
    /// write. Sibling fields are left untouched, and writing an empty string
    /// is permitted (records are only dropped at serialization time).
    pub fn write(
        &mut self,
        language: &str,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), StoreError> {
        if !self.schema.contains(field) {
            return Err(StoreError::UnknownField(field.to_string()));
        }

        if language == self.default_language {
            self.entity_fields.insert(field.to_string(), value.into());
            return Ok(());
        }

        match self.translations.iter_mut().find(|r| r.language == language) {
            Some(record) => {
                record.fields.insert(field.to_string(), value.into());
            }
            None => {
                let mut record = TranslationRecord::new(language);
                record.fields.insert(field.to_string(), value.into());
                self.translations.push(record);
            }
        }
        Ok(())
    }
}
