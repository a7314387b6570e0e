//! Regional flag shortcodes.
//!
//! `:flag-xx:` with `xx` two lowercase ASCII letters renders as the pair of
//! regional indicator symbols for those letters. The pair is synthesized, so
//! flags never need table entries.

/// Shortcode prefix for flags.
const FLAG_PREFIX: &str = ":flag-";

/// First regional indicator symbol (`🇦`, for `a`).
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Regional indicator pair for a complete `:flag-xx:` token.
///
/// `token` includes both colons. Returns `None` unless the country code is
/// exactly two lowercase ASCII letters.
pub(crate) fn regional_flag(token: &str) -> Option<[char; 2]> {
    let code = token.strip_prefix(FLAG_PREFIX)?.strip_suffix(':')?;
    let &[first, second] = code.as_bytes() else {
        return None;
    };
    Some([regional_indicator(first)?, regional_indicator(second)?])
}

/// Map a lowercase ASCII letter to its regional indicator symbol.
fn regional_indicator(letter: u8) -> Option<char> {
    if !letter.is_ascii_lowercase() {
        return None;
    }
    char::from_u32(REGIONAL_INDICATOR_A + u32::from(letter - b'a'))
}

#[cfg(test)]
mod tests;
