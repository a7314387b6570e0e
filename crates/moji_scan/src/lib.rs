//! Emoji shortcode substitution.
//!
//! Rewrites shortcodes such as `:beer:` into emoji, either over a complete
//! string ([`compile`]) or over a byte stream that arrives in fragments
//! ([`EmojiTransformer`], [`EmojiReader`], [`EmojiWriter`]).
//!
//! ```
//! assert_eq!(moji_scan::compile(":beer: Beer!!!"), "\u{1f37a}  Beer!!!");
//! assert_eq!(moji_scan::compile(":flag-us:"), "\u{1f1fa}\u{1f1f8}");
//! assert_eq!(moji_scan::compile(":no-such-code:"), ":no-such-code:");
//! ```
//!
//! Table lookups and alias resolution are re-exported from [`moji_table`].

mod cursor;
mod flag;
mod fmt;
mod io;
mod scanner;
mod stream;

pub use fmt::Message;
pub use io::{EmojiReader, EmojiWriter, DEFAULT_CAPACITY};
pub use moji_table::{
    alias_list, code_map, code_table, has_alias, normalize_short_code, rev_code_map, CodeMap,
    CodeTable, RevCodeMap,
};
pub use scanner::{Scanner, DEFAULT_PADDING};
pub use stream::{EmojiTransformer, Progress, Status};

/// Substitute every shortcode in `text` using the global table.
///
/// Pure: the same input always yields the same output, and text without a
/// `:` is returned unchanged.
pub fn compile(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    Scanner::default().compile(text)
}
