//! Single-pass shortcode scanner.
//!
//! Plain text is copied through untouched. A `:` opens a candidate that runs
//! until one of:
//!
//! - a closing `:`: the token is looked up and replaced (or copied verbatim
//!   when unknown);
//! - whitespace: the candidate is abandoned and copied, whitespace included;
//! - end of input: the candidate is copied when the input is final, and
//!   otherwise left unconsumed so the caller can retry with more input.
//!
//! A `:` immediately after the opening `:` restarts the candidate: the first
//! colon is copied and the second one opens a fresh candidate. This keeps
//! `::smile:` rendering as `:` followed by the smile emoji. The restart is a
//! loop, so long runs of colons cost no stack.
//!
//! # Padding
//!
//! A table hit is followed by the scanner's padding (one space by default).
//! Flags are emitted without padding.

use moji_table::{code_table, CodeTable};

use crate::cursor::{Cursor, DELIMITER};
use crate::flag::regional_flag;

/// Padding appended after a table substitution.
pub const DEFAULT_PADDING: &str = " ";

/// Outcome of scanning one candidate.
enum Candidate {
    /// The candidate was closed, abandoned, or restarted into plain output.
    Emitted,
    /// Input ran out inside the candidate, which starts at this offset.
    Unterminated(usize),
}

/// Shortcode scanner bound to a table.
///
/// Scanning is a pure function of the input; a `Scanner` holds no mutable
/// state and can be shared freely.
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'t> {
    table: &'t CodeTable,
    padding: &'t str,
}

impl Default for Scanner<'static> {
    fn default() -> Self {
        Scanner::new(code_table())
    }
}

impl<'t> Scanner<'t> {
    /// Create a scanner over `table` with [`DEFAULT_PADDING`].
    pub fn new(table: &'t CodeTable) -> Self {
        Scanner {
            table,
            padding: DEFAULT_PADDING,
        }
    }

    /// Replace the padding appended after table substitutions.
    #[must_use]
    pub fn with_padding(mut self, padding: &'t str) -> Self {
        self.padding = padding;
        self
    }

    /// The padding appended after table substitutions.
    pub fn padding(&self) -> &'t str {
        self.padding
    }

    /// Substitute every shortcode in `text`.
    pub fn compile(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.scan(text, &mut out, true);
        out
    }

    /// Scan `input`, appending the rewritten text to `out`.
    ///
    /// Returns the number of bytes of `input` consumed. When `at_eof` is
    /// `true` this is always `input.len()`. Otherwise an unterminated trailing
    /// candidate is left unconsumed and the return value is its start offset;
    /// the caller should prepend `&input[consumed..]` to the next chunk.
    pub fn scan(&self, input: &str, out: &mut String, at_eof: bool) -> usize {
        let mut cursor = Cursor::new(input);
        loop {
            let start = cursor.pos();
            cursor.eat_until_delimiter();
            out.push_str(cursor.slice_from(start));
            if cursor.is_eof() {
                return input.len();
            }

            if let Candidate::Unterminated(start) = self.candidate(&mut cursor, out) {
                if at_eof {
                    out.push_str(cursor.tail_from(start));
                    return input.len();
                }
                return start;
            }
        }
    }

    /// Scan one candidate. The cursor is on its opening delimiter.
    fn candidate(&self, cursor: &mut Cursor<'_>, out: &mut String) -> Candidate {
        let mut start = cursor.pos();
        cursor.advance_char();
        loop {
            let Some(c) = cursor.current() else {
                return Candidate::Unterminated(start);
            };

            if c == DELIMITER && cursor.pos() == start + DELIMITER.len_utf8() {
                // Empty candidate: the first colon is literal, the second
                // opens a new candidate.
                out.push(DELIMITER);
                start = cursor.pos();
                cursor.advance_char();
                continue;
            }

            cursor.advance_char();
            if c == DELIMITER {
                self.emojize(cursor.slice_from(start), out);
                return Candidate::Emitted;
            }
            if c.is_whitespace() {
                out.push_str(cursor.slice_from(start));
                return Candidate::Emitted;
            }
        }
    }

    /// Append the replacement for a complete `:token:`.
    ///
    /// Table hits get padding, flags do not, unknown tokens are copied.
    pub fn emojize(&self, token: &str, out: &mut String) {
        if let Some(emoji) = self.table.lookup(token) {
            out.push_str(emoji);
            out.push_str(self.padding);
        } else if let Some(flag) = regional_flag(token) {
            out.extend(flag);
        } else {
            out.push_str(token);
        }
    }
}

#[cfg(test)]
mod tests;
