//! Fragment-at-a-time emoji transform.
//!
//! [`EmojiTransformer`] applies the scanner to a byte stream that arrives in
//! arbitrary fragments. Two kinds of input can straddle a fragment boundary
//! and are carried into the next call:
//!
//! - an unterminated shortcode candidate (`... :bee` | `r: ...`);
//! - an incomplete UTF-8 sequence.
//!
//! On the final fragment (`at_eof`) everything carried is flushed literally.
//!
//! # Short Destination
//!
//! When the encoded output for a fragment does not fit in `dst`, the
//! transformer copies what fits, keeps the rest, and reports
//! [`Status::ShortDst`] with `consumed == 0`. The caller must call again with
//! the *same* `src` (and room in `dst`); the retained output is drained
//! before any new input is read, and `src` is acknowledged as consumed only
//! by the call that writes its last output byte.
//!
//! # Ownership
//!
//! A transformer carries per-stream state and every mutating method takes
//! `&mut self`: one stream, one owner. Independent transformers share the
//! code table and may run on different threads.

use std::borrow::Cow;

use moji_table::CodeTable;
use tracing::{trace, warn};

use crate::scanner::Scanner;

/// Whether a [`EmojiTransformer::transform`] call finished its fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// All output for `src` has been written.
    Done,
    /// `dst` filled up; call again with the same `src`.
    ShortDst,
}

/// Result of one [`EmojiTransformer::transform`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Bytes written to `dst`.
    pub written: usize,
    /// Bytes of `src` consumed. Zero unless `status` is [`Status::Done`].
    pub consumed: usize,
    pub status: Status,
}

/// Streaming shortcode substitution over byte fragments.
#[derive(Debug)]
pub struct EmojiTransformer<'t> {
    scanner: Scanner<'t>,
    /// Unconsumed input held over from the previous fragment.
    carry: Vec<u8>,
    /// Encoded output not yet copied out.
    pending: Vec<u8>,
    /// Read offset into `pending`.
    pending_pos: usize,
    /// Length of the `src` that produced `pending`.
    pending_src: usize,
}

impl Default for EmojiTransformer<'static> {
    fn default() -> Self {
        EmojiTransformer::new(Scanner::default())
    }
}

impl<'t> EmojiTransformer<'t> {
    /// Create a transformer driving `scanner`.
    pub fn new(scanner: Scanner<'t>) -> Self {
        EmojiTransformer {
            scanner,
            carry: Vec::new(),
            pending: Vec::new(),
            pending_pos: 0,
            pending_src: 0,
        }
    }

    /// Create a transformer over `table` with the default padding.
    pub fn with_table(table: &'t CodeTable) -> Self {
        Self::new(Scanner::new(table))
    }

    /// Transform one fragment.
    ///
    /// `at_eof` marks `src` as the last fragment of the stream; any carried
    /// candidate is then flushed literally. See the module docs for the
    /// short-destination protocol.
    pub fn transform(&mut self, dst: &mut [u8], src: &[u8], at_eof: bool) -> Progress {
        if !self.has_pending_output() {
            self.encode(src, at_eof);
        }

        let remaining = &self.pending[self.pending_pos..];
        let written = remaining.len().min(dst.len());
        dst[..written].copy_from_slice(&remaining[..written]);
        self.pending_pos += written;

        if self.has_pending_output() {
            trace!(
                written,
                pending = self.pending.len() - self.pending_pos,
                "short destination buffer"
            );
            return Progress {
                written,
                consumed: 0,
                status: Status::ShortDst,
            };
        }

        Progress {
            written,
            consumed: self.pending_src.min(src.len()),
            status: Status::Done,
        }
    }

    /// Transform one fragment, appending all of its output to `out`.
    ///
    /// Drives [`transform`](Self::transform) through a fixed scratch buffer,
    /// retrying on [`Status::ShortDst`].
    pub fn transform_into(&mut self, src: &[u8], at_eof: bool, out: &mut Vec<u8>) {
        let mut scratch = [0u8; SCRATCH_LEN];
        loop {
            let progress = self.transform(&mut scratch, src, at_eof);
            out.extend_from_slice(&scratch[..progress.written]);
            if progress.status == Status::Done {
                return;
            }
        }
    }

    /// Bytes held back waiting for more input.
    pub fn carried(&self) -> &[u8] {
        &self.carry
    }

    /// Discard all per-stream state.
    pub fn reset(&mut self) {
        self.carry.clear();
        self.pending.clear();
        self.pending_pos = 0;
        self.pending_src = 0;
    }

    fn has_pending_output(&self) -> bool {
        self.pending_pos < self.pending.len()
    }

    /// Run the scanner over carry + `src`, filling `pending`.
    fn encode(&mut self, src: &[u8], at_eof: bool) {
        let mut input = std::mem::take(&mut self.carry);
        input.extend_from_slice(src);

        let (text, decoded) = decode_utf8(&input, at_eof);
        let mut out = String::with_capacity(text.len());
        let scanned = self.scanner.scan(&text, &mut out, at_eof);

        self.carry.extend_from_slice(&text.as_bytes()[scanned..]);
        self.carry.extend_from_slice(&input[decoded..]);
        if !self.carry.is_empty() {
            trace!(carried = self.carry.len(), "holding back unterminated input");
        }

        self.pending = out.into_bytes();
        self.pending_pos = 0;
        self.pending_src = src.len();
    }
}

/// Size of the scratch buffer used by [`EmojiTransformer::transform_into`].
const SCRATCH_LEN: usize = 4096;

/// Decode `bytes` as UTF-8, replacing invalid sequences with U+FFFD.
///
/// Returns the text and the number of bytes it covers. A truncated sequence
/// at the very end is left undecoded unless `at_eof`, so it can be completed
/// by the next fragment.
fn decode_utf8(bytes: &[u8], at_eof: bool) -> (Cow<'_, str>, usize) {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return (Cow::Borrowed(text), bytes.len());
    }

    let mut text = String::with_capacity(bytes.len());
    let mut decoded = 0;
    loop {
        let rest = &bytes[decoded..];
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                text.push_str(valid);
                decoded = bytes.len();
                break;
            }
            Err(err) => {
                let (valid, _) = rest.split_at(err.valid_up_to());
                text.push_str(&String::from_utf8_lossy(valid));
                decoded += valid.len();
                match err.error_len() {
                    Some(len) => {
                        warn!(offset = decoded, len, "replacing invalid UTF-8");
                        text.push(char::REPLACEMENT_CHARACTER);
                        decoded += len;
                    }
                    None if at_eof => {
                        warn!(offset = decoded, "replacing truncated UTF-8 at end of stream");
                        text.push(char::REPLACEMENT_CHARACTER);
                        decoded = bytes.len();
                        break;
                    }
                    None => break,
                }
            }
        }
    }
    (Cow::Owned(text), decoded)
}

#[cfg(test)]
mod tests;
