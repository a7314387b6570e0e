//! Static emoji shortcode table.
//!
//! Maps shortcodes such as `:beer:` to their emoji and back, and resolves
//! aliases to a canonical spelling. The table is built once on first use and
//! is read-only afterward.
//!
//! ```
//! assert_eq!(moji_table::code_map().get(":beer:"), Some(&"\u{1f37a}"));
//! assert!(moji_table::has_alias(":+1:"));
//! assert_eq!(moji_table::normalize_short_code(":thumbs_up:"), ":+1:");
//! ```

mod alias;
mod data;
mod table;

pub use alias::{alias_list, has_alias, normalize_short_code};
pub use table::{code_map, code_table, rev_code_map, CodeMap, CodeTable, RevCodeMap};
