//! Language catalog: the ordered set of languages a site offers.
//!
//! Exactly one language is the default; its content lives directly on the
//! primary entity and must never appear in the translation record collection.
//! Catalog order is significant: it drives UI tab order and the order of the
//! per-language progress map.

use crate::error::CatalogError;

/// Configuration for one selectable language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "zh")
    pub code: String,

    /// English name of the language (e.g., "English", "Chinese")
    pub name: String,

    /// Native name of the language (e.g., "English", "中文")
    pub native_name: String,

    /// Whether this is the site's default language (exactly one must be true)
    pub is_default: bool,

    /// Whether this language is currently selectable in the editor
    pub enabled: bool,
}

impl LanguageConfig {
    /// A non-default, enabled language.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        native_name: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            native_name: native_name.into(),
            is_default: false,
            enabled: true,
        }
    }

    /// The site's default language.
    pub fn default_language(
        code: impl Into<String>,
        name: impl Into<String>,
        native_name: impl Into<String>,
    ) -> Self {
        Self {
            is_default: true,
            ..Self::new(code, name, native_name)
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Ordered, validated language catalog for one site.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    languages: Vec<LanguageConfig>,
}

impl LanguageCatalog {
    /// Build a catalog, validating that codes are unique and that exactly one
    /// enabled default language exists.
    pub fn new(languages: Vec<LanguageConfig>) -> Result<Self, CatalogError> {
        let mut default: Option<&LanguageConfig> = None;
        for (i, lang) in languages.iter().enumerate() {
            if languages[..i].iter().any(|l| l.code == lang.code) {
                return Err(CatalogError::DuplicateCode(lang.code.clone()));
            }
            if lang.is_default {
                match default {
                    Some(prev) => {
                        return Err(CatalogError::MultipleDefaults(
                            prev.code.clone(),
                            lang.code.clone(),
                        ))
                    }
                    None => default = Some(lang),
                }
            }
        }

        match default {
            None => Err(CatalogError::NoDefault),
            Some(d) if !d.enabled => Err(CatalogError::DefaultDisabled(d.code.clone())),
            Some(_) => Ok(Self { languages }),
        }
    }

    /// Get a language configuration by its code.
    pub fn get(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// The default language's code.
    pub fn default_language(&self) -> &str {
        // Validated in `new`: exactly one enabled default exists.
        self.languages
            .iter()
            .find(|lang| lang.is_default)
            .map(|lang| lang.code.as_str())
            .unwrap_or_default()
    }

    /// All enabled languages, in catalog order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// All languages, including disabled ones, in catalog order.
    pub fn list_all(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Whether a language code exists and is enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get(code).map(|lang| lang.enabled).unwrap_or(false)
    }
}
