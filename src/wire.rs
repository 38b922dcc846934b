//! Wire-format adapter between the in-memory store and the remote API.
//!
//! The payload carries the default-language fields inline, plus a
//! `translations` array holding only the records with at least one non-empty
//! tracked field. Deserialization is defensive: entries missing a language
//! code, duplicate languages, and entries for the default language are dropped
//! with a warning rather than failing the whole load.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::fields::FieldSchema;
use crate::store::{EntityMeta, TranslationRecord, TranslationStore};

/// The shape the remote API expects for one content entity.
///
/// Unknown keys land in the flattened `fields` map and are filtered against
/// the tracked-field schema on the way back in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WirePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub translations: Vec<WireTranslation>,

    /// Default-language field values, inline on the payload.
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

/// One translation entry on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WireTranslation {
    /// Missing on malformed entries; such entries are dropped on load.
    #[serde(default)]
    pub language: String,

    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

/// Serialize the store into the wire shape.
///
/// Translation records with no non-empty tracked field are dropped; the rest
/// keep their insertion order so payloads are deterministic.
pub fn serialize(store: &TranslationStore) -> WirePayload {
    let schema = store.schema();

    let fields = schema
        .iter()
        .map(|f| (f.to_string(), Value::String(store.value(store.default_language(), f).to_string())))
        .collect();

    let translations = store
        .translations()
        .iter()
        .filter(|record| record.has_content(schema))
        .map(|record| WireTranslation {
            language: record.language.clone(),
            fields: schema
                .iter()
                .map(|f| (f.to_string(), Value::String(record.field(f).to_string())))
                .collect(),
        })
        .collect();

    WirePayload {
        id: store.meta.id.clone(),
        category: store.meta.category.clone(),
        slug: store.meta.slug.clone(),
        updated_at: store.meta.updated_at,
        translations,
        fields,
    }
}

/// Rebuild a store from a wire payload.
///
/// Never fails: malformed translation entries are dropped individually and
/// the rest of the load continues.
pub fn deserialize(
    payload: WirePayload,
    schema: FieldSchema,
    default_language: &str,
) -> TranslationStore {
    let entity_fields = schema_fields(&payload.fields, schema);

    let meta = EntityMeta {
        id: payload.id,
        category: payload.category,
        slug: payload.slug,
        updated_at: payload.updated_at,
    };

    let mut translations: Vec<TranslationRecord> = Vec::new();
    for entry in payload.translations {
        let language = entry.language.trim();
        if language.is_empty() {
            warn!("dropping translation entry without a language code");
            continue;
        }
        if language == default_language {
            warn!(
                "dropping translation entry duplicating the default language '{}'",
                default_language
            );
            continue;
        }
        if translations.iter().any(|r| r.language == language) {
            warn!("dropping duplicate translation entry for '{}'", language);
            continue;
        }
        translations.push(TranslationRecord {
            language: language.to_string(),
            fields: schema_fields(&entry.fields, schema),
        });
    }

    TranslationStore::from_parts(
        schema,
        default_language.to_string(),
        entity_fields,
        meta,
        translations,
    )
}

/// Keep only tracked fields with string values.
fn schema_fields(raw: &HashMap<String, Value>, schema: FieldSchema) -> HashMap<String, String> {
    schema
        .iter()
        .filter_map(|f| {
            raw.get(f)
                .and_then(Value::as_str)
                .map(|v| (f.to_string(), v.to_string()))
        })
        .collect()
}
