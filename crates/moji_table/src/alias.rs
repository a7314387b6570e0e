//! Alias resolution over the shortcode table.
//!
//! Several shortcodes can name the same emoji (`:+1:`, `:thumbsup:`,
//! `:thumbs_up:`). These lookups answer which spellings exist and which one
//! is canonical. None of them fail: unknown shortcodes yield an empty alias
//! list and normalize to themselves.

use crate::table::{code_table, CodeTable};

impl CodeTable {
    /// Every shortcode producing the same emoji as `code`, canonical first.
    ///
    /// Includes `code` itself. Empty when `code` is not in the table.
    pub fn alias_list(&self, code: &str) -> &[String] {
        self.lookup(code)
            .and_then(|emoji| self.rev_code_map().get(emoji))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether another shortcode maps to the same emoji as `code`.
    pub fn has_alias(&self, code: &str) -> bool {
        self.alias_list(code).len() > 1
    }

    /// Canonical alias for `code`, or `code` unchanged if it is unknown.
    pub fn normalize_short_code<'a>(&'a self, code: &'a str) -> &'a str {
        self.alias_list(code).first().map_or(code, String::as_str)
    }
}

/// [`CodeTable::alias_list`] on the global table.
pub fn alias_list(code: &str) -> &'static [String] {
    code_table().alias_list(code)
}

/// [`CodeTable::has_alias`] on the global table.
pub fn has_alias(code: &str) -> bool {
    code_table().has_alias(code)
}

/// [`CodeTable::normalize_short_code`] on the global table.
pub fn normalize_short_code(code: &str) -> &str {
    code_table().normalize_short_code(code)
}

#[cfg(test)]
mod tests;
