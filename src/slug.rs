//! SEO slug normalization.
//!
//! Slugs are non-localized entity metadata; they are normalized once, when
//! set, rather than validated on every save.

use regex::Regex;
use std::sync::OnceLock;

static NON_ALNUM: OnceLock<Regex> = OnceLock::new();
static VALID_SLUG: OnceLock<Regex> = OnceLock::new();

fn non_alnum() -> &'static Regex {
    NON_ALNUM.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"))
}

fn valid_slug() -> &'static Regex {
    VALID_SLUG.get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid regex"))
}

/// Normalize arbitrary input into a URL-safe slug: lowercase, with runs of
/// non-alphanumeric characters collapsed into single hyphens. Returns an
/// empty string when nothing usable remains (e.g. CJK-only input).
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let replaced = non_alnum().replace_all(&lowered, "-");
    replaced.trim_matches('-').to_string()
}

/// Whether a string already is a well-formed slug.
pub fn is_valid(slug: &str) -> bool {
    valid_slug().is_match(slug)
}
