// ============================================================================
// Tokenizer
// Splits a payload on the effective delimiters
// ============================================================================

use crate::domain::DelimiterSet;

/// Separator every delimiter is rewritten to before splitting
pub const CANONICAL_SEPARATOR: &str = ",";

/// Preferred separator when the comma is not itself a delimiter, so literal
/// commas stay inside their token.
const FALLBACK_SEPARATOR: char = '\u{1f}';

/// Private use block searched when the payload or a delimiter already holds
/// the preferred fallback.
const PRIVATE_USE: std::ops::RangeInclusive<char> = '\u{e000}'..='\u{f8ff}';

/// Split a payload into trimmed tokens.
///
/// Every delimiter is replaced by the separator in set order (plain literal
/// substitution, later delimiters see the rewritten text), then the text is
/// split. Empty tokens are kept: `",5"` yields `["", "5"]`. A payload that
/// is empty after trimming yields a single empty token, and trimming happens
/// before splitting, so trailing whitespace delimiters (`"5\n"`) leave no
/// empty token behind.
pub fn tokenize(payload: &str, delimiters: &DelimiterSet) -> Vec<String> {
    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return vec![String::new()];
    }

    let fallback;
    let separator = if delimiters.contains(CANONICAL_SEPARATOR) {
        CANONICAL_SEPARATOR
    } else {
        fallback = fallback_separator(trimmed, delimiters).to_string();
        fallback.as_str()
    };

    let mut normalized = trimmed.to_string();
    for delimiter in delimiters.iter().filter(|d| *d != separator) {
        normalized = normalized.replace(delimiter, separator);
    }

    normalized
        .split(separator)
        .map(|token| token.trim().to_string())
        .collect()
}

/// First candidate separator that occurs in neither the payload nor any
/// delimiter, so only real delimiters ever split.
fn fallback_separator(payload: &str, delimiters: &DelimiterSet) -> char {
    std::iter::once(FALLBACK_SEPARATOR)
        .chain(PRIVATE_USE)
        .find(|c| !payload.contains(*c) && !delimiters.iter().any(|d| d.contains(*c)))
        .unwrap_or(FALLBACK_SEPARATOR)
}
