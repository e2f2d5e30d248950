// Author: Dustin Pilgrim
// License: MIT

/// True when `target` contains any of `patterns` as a substring.
pub fn contains_many(target: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| target.contains(p))
}

/// True when the text is wrapped in a matching pair of single or double quotes.
pub fn is_quoted(s: &str) -> bool {
    s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')))
}

/// Strip one layer of matching quotes, if present.
pub fn strip_quotes(s: &str) -> &str {
    if is_quoted(s) { &s[1..s.len() - 1] } else { s }
}

pub fn has_decimal_separator(s: &str) -> bool {
    s.contains('.') || s.contains(',')
}

/// Boolean literal parse accepting the conventional spellings
/// (`1 t T TRUE true True` and `0 f F FALSE false False`).
pub fn parse_bool_literal(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parse a float literal, accepting `,` as decimal separator.
pub fn parse_float_literal(s: &str) -> Option<f32> {
    if s.contains(',') {
        s.replacen(',', ".", 1).parse::<f32>().ok()
    } else {
        s.parse::<f32>().ok()
    }
}
