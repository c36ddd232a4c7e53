//! Struct tag parsing.
//!
//! A tag blob is the raw literal attached to a field, e.g.
//! `` `json:"name,omitempty" db:"name"` ``. Parsing is best-effort: malformed
//! input yields fewer tokens, never an error.

use crate::list::List;

/// Split a raw tag literal into whitespace-delimited `key:"value"` tokens.
///
/// The literal's outer delimiters are removed first. Raw string tags lose
/// their backticks; interpreted string tags lose their outer quotes and
/// have `\"` and `\\` unescaped.
#[must_use]
pub fn tokens(blob: &str) -> List {
    strip_delimiters(blob).split_whitespace().collect()
}

/// Values for `key`, split on commas and flattened in token order.
///
/// `json:"a,b"` yields `["a", "b"]` for key `json`. Tokens for other keys
/// and empty values are skipped; an absent key yields an empty list.
#[must_use]
pub fn values(blob: &str, key: &str) -> List {
    let prefix = format!("{key}:");
    tokens(blob)
        .map(|token| match token.strip_prefix(prefix.as_str()) {
            Some(value) => value.replacen('"', "", 2),
            None => String::new(),
        })
        .filter(|value| !value.is_empty())
        .explode(|value| value.split(',').map(str::to_string).collect::<Vec<_>>())
}

fn strip_delimiters(blob: &str) -> String {
    let blob = blob.trim();
    if blob.starts_with('`') {
        return blob.replacen('`', "", 2);
    }
    match blob
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) => inner.replace("\\\"", "\"").replace("\\\\", "\\"),
        None => blob.to_string(),
    }
}
