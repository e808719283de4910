//! Numeric value coercion.
//!
//! Raw cells carry annotation flags (`"78.5 e"`) or missing-data placeholders
//! (`":"`). Rows whose cell has no leading numeric token are dropped by the
//! reshaper, silently and by design; this module owns that policy as a pure
//! function so the drop rule stays visible and testable.

/// Extracts the leading numeric token from a raw cell.
///
/// The token is one-or-more ASCII digits optionally followed by exactly one
/// fractional separator (comma, period or slash) and more digits. Comma and
/// slash are treated as decimal points, never as thousands grouping
/// (`"81,2 b"` is 81.2). Anything after the token is ignored. Returns `None`
/// when the trimmed cell does not start with a digit.
pub fn extract_leading_numeric(raw: &str) -> Option<f64> {
    let text = raw.trim();
    let integer_end = text
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(text.len());
    if integer_end == 0 {
        return None;
    }

    let mut token = text[..integer_end].to_string();
    let mut rest = text[integer_end..].chars();
    if let Some(separator) = rest.next()
        && matches!(separator, ',' | '.' | '/')
    {
        token.push('.');
        token.extend(rest.take_while(|ch| ch.is_ascii_digit()));
    }

    token.parse::<f64>().ok().filter(|value| value.is_finite())
}
