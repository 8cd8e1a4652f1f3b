//! Common string sanitizers.
//!
//! Each one only touches string values; anything else is passed through
//! unchanged so they can be attached to multi-type options.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::Sanitizer;

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9_\-]+").unwrap());
static REPEATED_DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

fn map_str(value: &Value, f: impl FnOnce(&str) -> String) -> Option<Value> {
    value.as_str().map(|s| Value::String(f(s)))
}

/// Strip leading and trailing whitespace.
pub fn trim(value: &Value) -> Option<Value> {
    map_str(value, |s| s.trim().to_string())
}

/// Lowercase the whole string.
pub fn lowercase(value: &Value) -> Option<Value> {
    map_str(value, str::to_lowercase)
}

/// Reduce a string to a URL-safe slug: lowercase, `[a-z0-9_-]` only.
pub fn slug(value: &Value) -> Option<Value> {
    map_str(value, to_slug)
}

/// `trim` followed by `lowercase`.
pub fn trim_lowercase() -> Sanitizer {
    Sanitizer::new(trim).then(Sanitizer::new(lowercase))
}

pub(crate) fn to_slug(text: &str) -> String {
    let lower = text.trim().to_lowercase();
    let replaced = NON_SLUG_CHARS.replace_all(&lower, "-");
    let collapsed = REPEATED_DASHES.replace_all(&replaced, "-");
    collapsed.trim_matches('-').to_string()
}
