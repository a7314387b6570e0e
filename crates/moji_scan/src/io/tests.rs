use super::*;
use pretty_assertions::assert_eq;

const BEER: &str = "\u{1f37a}";

/// Reader yielding at most `step` bytes per `read` call.
struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Reader that fails once with `Interrupted` before every successful read.
struct Flaky<'a> {
    data: &'a [u8],
    interrupt: bool,
}

impl Read for Flaky<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if self.interrupt {
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fn read_all(reader: &mut impl Read) -> String {
    let mut out = String::new();
    reader.read_to_string(&mut out).unwrap();
    out
}

// === Reader ===

#[test]
fn reader_substitutes() {
    let mut reader = EmojiReader::new(":beer: Beer!!!".as_bytes());
    assert_eq!(read_all(&mut reader), format!("{BEER}  Beer!!!"));
}

#[test]
fn reader_joins_split_shortcodes() {
    let data = "one :beer: two :beer: three".as_bytes();
    let mut reader = EmojiReader::new(Trickle { data, step: 3 });
    assert_eq!(read_all(&mut reader), format!("one {BEER}  two {BEER}  three"));
}

#[test]
fn reader_with_tiny_capacity_and_buffer() {
    let mut reader = EmojiReader::new(":sushi: :flag-us:".as_bytes()).with_capacity(1);
    let mut out = Vec::new();
    let mut buf = [0u8; 1];
    loop {
        let n = reader.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        out.extend_from_slice(&buf[..n]);
    }
    assert_eq!(
        String::from_utf8_lossy(&out),
        "\u{1f363}  \u{1f1fa}\u{1f1f8}"
    );
}

#[test]
fn reader_retries_interrupted_reads() {
    let mut reader = EmojiReader::new(Flaky {
        data: b":beer:",
        interrupt: false,
    });
    assert_eq!(read_all(&mut reader), format!("{BEER} "));
}

#[test]
fn reader_flushes_unterminated_tail_at_eof() {
    let mut reader = EmojiReader::new("see you :soon".as_bytes());
    assert_eq!(read_all(&mut reader), "see you :soon");
}

#[test]
fn reader_empty_input() {
    let mut reader = EmojiReader::new(io::empty());
    assert_eq!(read_all(&mut reader), "");
}

#[test]
fn reader_into_inner_returns_source() {
    let reader = EmojiReader::new(Trickle {
        data: b"rest",
        step: 1,
    });
    assert_eq!(reader.into_inner().data, b"rest");
}

// === Writer ===

#[test]
fn writer_substitutes_across_writes() {
    let mut writer = EmojiWriter::new(Vec::new());
    writer.write_all(b"cheers :be").unwrap();
    writer.write_all(b"er:!").unwrap();
    let out = writer.finish().unwrap();
    assert_eq!(String::from_utf8_lossy(&out), format!("cheers {BEER} !"));
}

#[test]
fn writer_holds_candidate_until_finish() {
    let mut writer = EmojiWriter::new(Vec::new());
    writer.write_all(b"tail :be").unwrap();
    writer.flush().unwrap();
    assert_eq!(writer.inner, b"tail ");

    let out = writer.finish().unwrap();
    assert_eq!(out, b"tail :be");
}

#[test]
fn writer_with_custom_padding() {
    let scanner = crate::Scanner::default().with_padding("_");
    let mut writer = EmojiWriter::with_transformer(Vec::new(), EmojiTransformer::new(scanner));
    write!(writer, "{} :beer:", 1).unwrap();
    let out = writer.finish().unwrap();
    assert_eq!(String::from_utf8_lossy(&out), format!("1 {BEER}_"));
}

#[test]
fn reader_feeds_writer() {
    let mut reader = EmojiReader::new(Trickle {
        data: ":pizza: and :custard:".as_bytes(),
        step: 2,
    })
    .with_capacity(5);
    // Already substituted text passes through the writer unchanged.
    let mut writer = EmojiWriter::new(Vec::new());
    io::copy(&mut reader, &mut writer).unwrap();
    let out = writer.finish().unwrap();
    assert_eq!(
        String::from_utf8_lossy(&out),
        "\u{1f355}  and \u{1f36e} "
    );
}

/// Sink that refuses the next `failures` writes.
struct Refusing {
    bytes: Vec<u8>,
    failures: usize,
}

impl Write for Refusing {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(io::Error::other("sink unavailable"));
        }
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn writer_keeps_output_when_inner_write_fails() {
    let mut writer = EmojiWriter::new(Refusing {
        bytes: Vec::new(),
        failures: 0,
    });
    writer.write_all(b"cheers :be").unwrap();
    writer.inner.failures = 1;

    // The completed shortcode is accepted even though the sink refuses it.
    assert_eq!(writer.write(b"er:").unwrap(), 3);
    assert_eq!(writer.queued(), format!("{BEER} ").as_bytes());

    let sink = writer.finish().unwrap();
    assert_eq!(String::from_utf8_lossy(&sink.bytes), format!("cheers {BEER} "));
}

#[test]
fn writer_rejects_new_input_while_queue_is_stuck() {
    let mut writer = EmojiWriter::new(Refusing {
        bytes: Vec::new(),
        failures: 2,
    });
    assert_eq!(writer.write(b":sushi:").unwrap(), 7);

    // Still refused: the error surfaces and `x` is not taken.
    assert!(writer.write(b" x").is_err());
    assert_eq!(writer.queued(), "\u{1f363} ".as_bytes());

    writer.write_all(b" x").unwrap();
    assert!(writer.queued().is_empty());
    let sink = writer.finish().unwrap();
    assert_eq!(String::from_utf8_lossy(&sink.bytes), "\u{1f363}  x");
}

#[test]
fn writer_flush_sends_queued_output() {
    let mut writer = EmojiWriter::new(Refusing {
        bytes: Vec::new(),
        failures: 1,
    });
    writer.write_all(b":pizza:").unwrap();
    writer.flush().unwrap();
    assert_eq!(writer.inner.bytes, "\u{1f355} ".as_bytes());
}
