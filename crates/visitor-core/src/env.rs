//! Normalization of provisioned configuration values.
//!
//! Secrets pasted into hosting dashboards sometimes keep their surrounding
//! quotes. One matching pair of `"` or `'` is removed before use.

/// Strip one matching pair of leading/trailing single or double quotes.
pub fn strip_quotes(raw: &str) -> &str {
    for q in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(q) && raw.ends_with(q) {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

/// Normalize an optional value: strip quotes, and treat empty as absent.
pub fn normalize(raw: Option<&str>) -> Option<String> {
    let v = strip_quotes(raw?);
    if v.is_empty() {
        None
    } else {
        Some(v.to_string())
    }
}
