//! `{placeholder}` substitution that leaves unknown placeholders untouched.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::{Map, Value};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").expect("placeholder pattern must be valid"));

/// Substitute every `{name}` whose name is a key of `replacements`.
///
/// Unknown placeholders are kept verbatim. Substitution is a single pass: text
/// produced by a replacement is never scanned again. String values are inserted
/// as-is, other JSON values by their JSON text.
pub fn safe_format(template: &str, replacements: &Map<String, Value>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match replacements.get(&caps[1]) {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Apply [`safe_format`] to every string-valued field of `fields`.
///
/// Only top-level string values are rewritten; arrays, objects and scalars
/// pass through unchanged.
pub fn format_strings_in_map(fields: &mut Map<String, Value>, replacements: &Map<String, Value>) {
    for value in fields.values_mut() {
        if let Value::String(text) = value {
            *text = safe_format(text, replacements);
        }
    }
}
