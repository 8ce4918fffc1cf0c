//! Identifier casing conversions.
//!
//! JSON keys arrive in the wire convention (camelCase); generated Python
//! attributes use snake_case and generated class names use PascalCase.
//! All three conversions are pure string transforms.

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of uppercase letters followed by the start of a new word:
/// the last uppercase letter of the run belongs to the next word
/// ("ABCDef" → "ABC_Def").
static ACRONYM_THEN_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());

/// Lowercase-ish character (digits count) followed by an uppercase letter.
static LOWER_THEN_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Convert a camelCase identifier to snake_case.
///
/// "XMLParser" → "xml_parser", "With2Numbers" → "with2_numbers".
pub fn camel_to_snake(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    let split = ACRONYM_THEN_WORD.replace_all(name, "${1}_${2}");
    let split = LOWER_THEN_UPPER.replace_all(&split, "${1}_${2}");
    split.to_lowercase()
}

/// Convert a snake_case identifier to PascalCase.
///
/// Empty segments (leading/trailing/doubled underscores) collapse; only the
/// first character of each segment has its case forced.
pub fn snake_to_pascal(name: &str) -> String {
    name.split('_')
        .filter(|segment| !segment.is_empty())
        .map(capitalize_first)
        .collect()
}

/// Derive the wire key for a snake_case field name.
///
/// Single-word names pass through unchanged; multi-word names become
/// camelCase. Inverts [`camel_to_snake`] for letters-only identifiers
/// (digits adjacent to a word boundary do not round-trip).
pub fn snake_to_camel_key(name: &str) -> String {
    if !name.contains('_') {
        return name.to_string();
    }
    let pascal = snake_to_pascal(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
