#![allow(clippy::unwrap_used)]

//! Streaming and whole-string substitution must agree.

use std::io::{Read, Write};

use moji_scan::{compile, EmojiReader, EmojiTransformer, EmojiWriter, Status};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Copy `reader` to a string through a fixed `buf_len` buffer.
fn copy_buffer(reader: &mut impl Read, buf_len: usize) -> String {
    let mut buf = vec![0u8; buf_len];
    let mut out = Vec::new();
    loop {
        let n = reader.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        out.extend_from_slice(&buf[..n]);
    }
    String::from_utf8(out).unwrap()
}

/// Stream `text` split at `cuts` through a `dst_len` destination.
fn stream_fragments(text: &str, cuts: &[usize], dst_len: usize) -> Vec<u8> {
    let bytes = text.as_bytes();
    let mut bounds: Vec<usize> = cuts.iter().map(|&c| c % (bytes.len() + 1)).collect();
    bounds.push(0);
    bounds.push(bytes.len());
    bounds.sort_unstable();

    let mut transformer = EmojiTransformer::default();
    let mut dst = vec![0u8; dst_len];
    let mut out = Vec::new();
    let last = bounds.len() - 2;
    for (i, window) in bounds.windows(2).enumerate() {
        let src = &bytes[window[0]..window[1]];
        loop {
            let progress = transformer.transform(&mut dst, src, i == last);
            out.extend_from_slice(&dst[..progress.written]);
            if progress.status == Status::Done {
                break;
            }
        }
    }
    out
}

// === Repeated input through a copy buffer ===

#[test]
fn repeated_sushi_through_copy_buffer() {
    let input = ":sushi: ::: :sushi :sushi: :".repeat(1000);
    let expected = "\u{1f363}  ::: :sushi \u{1f363}  :".repeat(1000);
    let mut reader = EmojiReader::new(input.as_bytes());
    assert_eq!(copy_buffer(&mut reader, 4096), expected);
}

#[test]
fn unterminated_candidate_longer_than_buffer() {
    let input = format!(":{}", "sushi".repeat(1000));
    let mut reader = EmojiReader::new(input.as_bytes());
    assert_eq!(copy_buffer(&mut reader, 4096), input);
}

#[test]
fn writer_matches_compile_for_benchmark_inputs() {
    let inputs = [
        "A :smile: a day".to_string(),
        "A :smile: and a :beer: day keeps the doctor away".to_string(),
        format!("A :smile: a day and 10 {}", ":beer: ".repeat(10)),
        "No smiles today.".to_string(),
        format!("No smiles for you or {}", "you ".repeat(1000)),
    ];
    for input in &inputs {
        let mut writer = EmojiWriter::new(Vec::new());
        for chunk in input.as_bytes().chunks(7) {
            writer.write_all(chunk).unwrap();
        }
        let out = writer.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), compile(input));
    }
}

// === Properties ===

/// Text biased toward shortcode-shaped input.
fn shortcode_text() -> impl Strategy<Value = String> {
    let pieces = prop::sample::select(vec![
        ":", "::", " ", "\n", ":beer:", ":smile:", ":flag-us:", ":flag-", "sushi", "ビール",
        "\u{1f37a}",
    ]);
    proptest::collection::vec(
        prop_oneof![
            pieces.prop_map(str::to_string),
            "[a-z+_-]{1,6}",
            "\\PC{1,4}",
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn text_without_delimiters_is_unchanged(text in "[^:]{0,64}") {
        prop_assert_eq!(compile(&text), text);
    }

    #[test]
    fn compile_is_deterministic(text in shortcode_text()) {
        prop_assert_eq!(compile(&text), compile(&text));
    }

    #[test]
    fn any_fragmentation_matches_compile(
        text in shortcode_text(),
        cuts in proptest::collection::vec(any::<usize>(), 0..8),
        dst_len in 1usize..32,
    ) {
        let streamed = stream_fragments(&text, &cuts, dst_len);
        prop_assert_eq!(String::from_utf8(streamed).unwrap(), compile(&text));
    }

    #[test]
    fn reader_matches_compile(
        text in shortcode_text(),
        capacity in 1usize..16,
        buf_len in 1usize..16,
    ) {
        let mut reader = EmojiReader::new(text.as_bytes()).with_capacity(capacity);
        prop_assert_eq!(copy_buffer(&mut reader, buf_len), compile(&text));
    }

    #[test]
    fn writer_matches_compile(text in shortcode_text(), chunk in 1usize..16) {
        let mut writer = EmojiWriter::new(Vec::new());
        for piece in text.as_bytes().chunks(chunk) {
            writer.write_all(piece).unwrap();
        }
        let out = writer.finish().unwrap();
        prop_assert_eq!(String::from_utf8(out).unwrap(), compile(&text));
    }
}
