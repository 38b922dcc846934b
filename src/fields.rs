//! Tracked-field schemas.
//!
//! Each entity type has a fixed, ordered list of localized text fields. The
//! order drives progress computation and the order fields are attempted during
//! translate-all; membership is checked at every write boundary.

/// Ordered set of localized text fields for one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    fields: &'static [&'static str],
}

/// Tracked fields for articles.
pub const ARTICLE_FIELDS: FieldSchema = FieldSchema::new(&["title", "content", "summary"]);

/// Tracked fields for the site-settings entity.
pub const SETTINGS_FIELDS: FieldSchema = FieldSchema::new(&["title", "subtitle"]);

impl FieldSchema {
    pub const fn new(fields: &'static [&'static str]) -> Self {
        Self { fields }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| *f == name)
    }

    /// Resolve a field name to its canonical static entry, if tracked.
    pub fn canonical(&self, name: &str) -> Option<&'static str> {
        self.fields.iter().find(|f| **f == name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().copied()
    }

    pub fn first(&self) -> Option<&'static str> {
        self.fields.first().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_fields_order() {
        let fields: Vec<_> = ARTICLE_FIELDS.iter().collect();
        assert_eq!(fields, vec!["title", "content", "summary"]);
    }

    #[test]
    fn test_settings_fields_order() {
        let fields: Vec<_> = SETTINGS_FIELDS.iter().collect();
        assert_eq!(fields, vec!["title", "subtitle"]);
    }

    #[test]
    fn test_contains() {
        assert!(ARTICLE_FIELDS.contains("title"));
        assert!(ARTICLE_FIELDS.contains("summary"));
        assert!(!ARTICLE_FIELDS.contains("subtitle"));
        assert!(!ARTICLE_FIELDS.contains(""));
    }

    #[test]
    fn test_canonical_returns_static_entry() {
        let owned = String::from("content");
        assert_eq!(ARTICLE_FIELDS.canonical(&owned), Some("content"));
        assert_eq!(ARTICLE_FIELDS.canonical("missing"), None);
    }

    #[test]
    fn test_len_and_first() {
        assert_eq!(ARTICLE_FIELDS.len(), 3);
        assert_eq!(SETTINGS_FIELDS.len(), 2);
        assert_eq!(ARTICLE_FIELDS.first(), Some("title"));
        assert!(!ARTICLE_FIELDS.is_empty());
    }

    #[test]
    fn test_empty_schema() {
        const EMPTY: FieldSchema = FieldSchema::new(&[]);
        assert!(EMPTY.is_empty());
        assert_eq!(EMPTY.first(), None);
        assert!(!EMPTY.contains("title"));
    }
}
