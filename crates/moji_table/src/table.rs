//! Shortcode table.
//!
//! Forward map from shortcode (`:beer:`) to emoji, plus the reverse map from
//! emoji to every shortcode that produces it. Both are derived from the
//! checked-in [`data`](crate::data) sources in a single pass and never
//! change afterward.
//!
//! # Merge Order
//!
//! Sources are merged in declaration order. On a name collision the later
//! source replaces the earlier value, so the last source has the final say.
//!
//! # Alias Order
//!
//! Each reverse-map entry is sorted by length, then lexicographically. The
//! first alias is the canonical spelling used by
//! [`normalize_short_code`](crate::normalize_short_code).

use std::cmp::Ordering;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::data::{Source, SOURCES};

/// Shortcode (with colons) to emoji.
pub type CodeMap = FxHashMap<String, &'static str>;

/// Emoji to its aliases, canonical alias first.
pub type RevCodeMap = FxHashMap<&'static str, Vec<String>>;

/// Immutable bidirectional shortcode table.
///
/// Obtain the process-wide instance with [`code_table`]. The table is
/// `Sync`, so a single `&'static CodeTable` can be shared by every scanner
/// on every thread.
#[derive(Debug)]
pub struct CodeTable {
    codes: CodeMap,
    aliases: RevCodeMap,
}

impl CodeTable {
    /// Merge `sources` (lowest priority first) into a table.
    ///
    /// Entries with an empty name or an empty emoji are skipped.
    pub(crate) fn from_sources(sources: &[Source]) -> Self {
        let mut codes = CodeMap::default();
        for source in sources {
            let mut overridden = 0usize;
            for &(name, emoji) in source.entries {
                if name.is_empty() || emoji.is_empty() {
                    continue;
                }
                if codes.insert(format!(":{name}:"), emoji).is_some() {
                    overridden += 1;
                }
            }
            trace!(
                source = source.name,
                entries = source.entries.len(),
                overridden,
                "merged shortcode source"
            );
        }

        let mut aliases = RevCodeMap::default();
        for (code, &emoji) in &codes {
            aliases.entry(emoji).or_default().push(code.clone());
        }
        for list in aliases.values_mut() {
            list.sort_unstable_by(|a, b| canonical_order(a, b));
        }

        debug!(
            codes = codes.len(),
            emoji = aliases.len(),
            "built shortcode table"
        );
        CodeTable { codes, aliases }
    }

    /// The forward map.
    pub fn code_map(&self) -> &CodeMap {
        &self.codes
    }

    /// The reverse map.
    pub fn rev_code_map(&self) -> &RevCodeMap {
        &self.aliases
    }

    /// Emoji for a complete shortcode such as `:beer:`.
    #[inline]
    pub fn lookup(&self, code: &str) -> Option<&'static str> {
        self.codes.get(code).copied()
    }

    /// Number of shortcodes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Shorter aliases first, ties broken lexicographically.
fn canonical_order(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

// Global singleton for the shortcode table
static CODE_TABLE: OnceLock<CodeTable> = OnceLock::new();

/// Get the global shortcode table (lazily initialized).
///
/// The first caller builds the table; concurrent first callers block until
/// that single build finishes and then observe the same instance.
pub fn code_table() -> &'static CodeTable {
    CODE_TABLE.get_or_init(|| CodeTable::from_sources(SOURCES))
}

/// The global forward map.
pub fn code_map() -> &'static CodeMap {
    code_table().code_map()
}

/// The global reverse map.
pub fn rev_code_map() -> &'static RevCodeMap {
    code_table().rev_code_map()
}

#[cfg(test)]
mod tests;
