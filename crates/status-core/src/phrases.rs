//! Reason phrase table
//!
//! Keys are stored lowercase and trimmed. `"internal error"` is an alias of
//! `"internal server error"`; both map to 500.

/// Known reason phrases and their status codes
pub const STATUS_PHRASES: &[(&str, u64)] = &[
    ("continue", 100),
    ("switching protocols", 101),
    ("ok", 200),
    ("created", 201),
    ("accepted", 202),
    ("no content", 204),
    ("moved permanently", 301),
    ("found", 302),
    ("not modified", 304),
    ("temporary redirect", 307),
    ("permanent redirect", 308),
    ("bad request", 400),
    ("unauthorized", 401),
    ("forbidden", 403),
    ("not found", 404),
    ("method not allowed", 405),
    ("request timeout", 408),
    ("conflict", 409),
    ("gone", 410),
    ("internal server error", 500),
    ("internal error", 500),
    ("not implemented", 501),
    ("bad gateway", 502),
    ("service unavailable", 503),
    ("gateway timeout", 504),
];

/// Normalize user input for phrase lookup (trim, lowercase)
pub fn normalize_phrase(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Look up a reason phrase, ignoring case and surrounding whitespace
pub fn lookup_phrase(input: &str) -> Option<u64> {
    let key = normalize_phrase(input);
    STATUS_PHRASES
        .iter()
        .find(|(phrase, _)| *phrase == key)
        .map(|(_, code)| *code)
}
