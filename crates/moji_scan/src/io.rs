//! `std::io` adapters around [`EmojiTransformer`].
//!
//! [`EmojiReader`] substitutes shortcodes in everything read through it;
//! [`EmojiWriter`] substitutes shortcodes in everything written through it.
//! Both hold back an unterminated trailing shortcode until more input
//! arrives or the stream ends.

use std::io::{self, Read, Write};

use tracing::trace;

use crate::stream::{EmojiTransformer, Status};

/// Default read chunk size.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Reader that substitutes shortcodes in the bytes of `R`.
#[derive(Debug)]
pub struct EmojiReader<'t, R> {
    inner: R,
    transformer: EmojiTransformer<'t>,
    /// Fragment read from `inner` and not yet acknowledged by the transformer.
    src: Vec<u8>,
    capacity: usize,
    /// `src` holds a fragment the transformer has not finished.
    src_pending: bool,
    /// `inner` returned EOF.
    at_eof: bool,
    /// The final fragment has been fully written out.
    finished: bool,
}

impl<R: Read> EmojiReader<'static, R> {
    /// Wrap `inner` with the global table and default padding.
    pub fn new(inner: R) -> Self {
        Self::with_transformer(inner, EmojiTransformer::default())
    }
}

impl<'t, R: Read> EmojiReader<'t, R> {
    /// Wrap `inner` with a configured transformer.
    pub fn with_transformer(inner: R, transformer: EmojiTransformer<'t>) -> Self {
        EmojiReader {
            inner,
            transformer,
            src: Vec::new(),
            capacity: DEFAULT_CAPACITY,
            src_pending: false,
            at_eof: false,
            finished: false,
        }
    }

    /// Read from `inner` in chunks of `capacity` bytes (minimum 1).
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Unwrap the inner reader. Carried input is discarded.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill_src(&mut self) -> io::Result<()> {
        self.src.resize(self.capacity, 0);
        let n = loop {
            match self.inner.read(&mut self.src) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.src.clear();
                    return Err(e);
                }
            }
        };
        self.src.truncate(n);
        self.at_eof = n == 0;
        self.src_pending = true;
        Ok(())
    }
}

impl<R: Read> Read for EmojiReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            if self.finished {
                return Ok(0);
            }
            if !self.src_pending {
                self.fill_src()?;
            }

            let progress = self.transformer.transform(buf, &self.src, self.at_eof);
            if progress.status == Status::Done {
                self.src_pending = false;
                self.finished = self.at_eof;
            }
            if progress.written > 0 {
                return Ok(progress.written);
            }
        }
    }
}

/// Writer that substitutes shortcodes before forwarding to `W`.
///
/// A shortcode split across two `write` calls is still substituted, so the
/// tail of the last write may be held back. Call [`finish`](Self::finish)
/// to flush it; dropping the writer discards it.
///
/// Once `write` accepts a buffer, its substituted output is owned by the
/// writer. If `W` fails while taking it, the output stays queued and is sent
/// ahead of anything else by the next `write`, `flush` or `finish`; the error
/// surfaces from that call if `W` fails again.
#[derive(Debug)]
pub struct EmojiWriter<'t, W: Write> {
    inner: W,
    transformer: EmojiTransformer<'t>,
    /// Substituted output not yet taken by `inner`.
    out: Vec<u8>,
    /// Bytes of `out` already written.
    sent: usize,
}

impl<W: Write> EmojiWriter<'static, W> {
    /// Wrap `inner` with the global table and default padding.
    pub fn new(inner: W) -> Self {
        Self::with_transformer(inner, EmojiTransformer::default())
    }
}

impl<'t, W: Write> EmojiWriter<'t, W> {
    /// Wrap `inner` with a configured transformer.
    pub fn with_transformer(inner: W, transformer: EmojiTransformer<'t>) -> Self {
        EmojiWriter {
            inner,
            transformer,
            out: Vec::new(),
            sent: 0,
        }
    }

    /// Flush the held-back tail and the inner writer, returning it.
    pub fn finish(mut self) -> io::Result<W> {
        self.send_queued()?;
        self.transformer.transform_into(&[], true, &mut self.out);
        self.send_queued()?;
        self.inner.flush()?;
        Ok(self.inner)
    }

    /// Substituted bytes accepted but not yet taken by the inner writer.
    pub fn queued(&self) -> &[u8] {
        &self.out[self.sent..]
    }

    /// Write the queued output to `inner`, keeping whatever it refuses.
    fn send_queued(&mut self) -> io::Result<()> {
        while self.sent < self.out.len() {
            match self.inner.write(&self.out[self.sent..]) {
                Ok(0) => return Err(io::Error::from(io::ErrorKind::WriteZero)),
                Ok(n) => self.sent += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        self.out.clear();
        self.sent = 0;
        Ok(())
    }
}

impl<W: Write> Write for EmojiWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Nothing from `buf` is taken until earlier output is out.
        self.send_queued()?;
        self.transformer.transform_into(buf, false, &mut self.out);
        if let Err(e) = self.send_queued() {
            trace!(error = %e, queued = self.queued().len(), "deferring inner write error");
        }
        Ok(buf.len())
    }

    /// Sends queued output and flushes the inner writer. A held-back
    /// shortcode candidate stays held until more input or
    /// [`finish`](EmojiWriter::finish).
    fn flush(&mut self) -> io::Result<()> {
        self.send_queued()?;
        self.inner.flush()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
