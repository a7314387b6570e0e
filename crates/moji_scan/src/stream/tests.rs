use super::*;
use pretty_assertions::assert_eq;

const BEER: &str = "\u{1f37a}";

/// Helper: stream `fragments` (last one final) through a `dst_len` buffer,
/// following the retry protocol, and collect the output.
fn stream(fragments: &[&[u8]], dst_len: usize) -> Vec<u8> {
    let mut transformer = EmojiTransformer::default();
    let mut dst = vec![0u8; dst_len];
    let mut out = Vec::new();
    for (i, fragment) in fragments.iter().enumerate() {
        let at_eof = i + 1 == fragments.len();
        loop {
            let progress = transformer.transform(&mut dst, fragment, at_eof);
            out.extend_from_slice(&dst[..progress.written]);
            match progress.status {
                Status::Done => {
                    assert_eq!(progress.consumed, fragment.len());
                    break;
                }
                Status::ShortDst => assert_eq!(progress.consumed, 0),
            }
        }
    }
    out
}

fn stream_str(fragments: &[&str], dst_len: usize) -> String {
    let fragments: Vec<&[u8]> = fragments.iter().map(|f| f.as_bytes()).collect();
    String::from_utf8_lossy(&stream(&fragments, dst_len)).into_owned()
}

// === Fragment boundaries ===

#[test]
fn single_final_fragment() {
    assert_eq!(stream_str(&[":beer: Beer!!!"], 64), format!("{BEER}  Beer!!!"));
}

#[test]
fn shortcode_split_across_fragments() {
    assert_eq!(
        stream_str(&["cheers :be", "er: now"], 64),
        format!("cheers {BEER}  now")
    );
}

#[test]
fn shortcode_split_into_single_bytes() {
    let text = "a :beer: b";
    let fragments: Vec<&str> = (0..text.len()).map(|i| &text[i..=i]).collect();
    assert_eq!(stream_str(&fragments, 64), format!("a {BEER}  b"));
}

#[test]
fn continuity_colons_split_between_colons() {
    assert_eq!(stream_str(&[":", ":smile:"], 64), ":\u{1f604} ");
}

#[test]
fn carried_candidate_flushed_by_empty_final_fragment() {
    assert_eq!(stream_str(&["tail :sus", ""], 64), "tail :sus");
}

#[test]
fn candidate_is_held_until_closed() {
    let mut transformer = EmojiTransformer::default();
    let mut dst = [0u8; 64];

    let progress = transformer.transform(&mut dst, b"x :sush", false);
    assert_eq!(progress.written, 2);
    assert_eq!(progress.consumed, 7);
    assert_eq!(&dst[..2], b"x ");
    assert_eq!(transformer.carried(), b":sush");

    let progress = transformer.transform(&mut dst, b"i:", true);
    assert_eq!(progress.status, Status::Done);
    assert_eq!(&dst[..progress.written], "\u{1f363} ".as_bytes());
    assert!(transformer.carried().is_empty());
}

// === UTF-8 boundaries ===

#[test]
fn multibyte_char_split_across_fragments() {
    let text = "ビール :beer:";
    let bytes = text.as_bytes();
    // Split inside the first character (3 bytes).
    let out = stream(&[&bytes[..1], &bytes[1..2], &bytes[2..]], 64);
    assert_eq!(String::from_utf8_lossy(&out), format!("ビール {BEER} "));
}

#[test]
fn invalid_utf8_is_replaced() {
    let out = stream(&[b"a\xffb".as_slice()], 64);
    assert_eq!(String::from_utf8_lossy(&out), "a\u{fffd}b");
}

#[test]
fn truncated_utf8_at_eof_is_replaced() {
    let out = stream(&[b"ok \xf0\x9f".as_slice()], 64);
    assert_eq!(String::from_utf8_lossy(&out), "ok \u{fffd}");
}

#[test]
fn decode_leaves_truncated_tail_when_not_final() {
    let (text, decoded) = decode_utf8(b"ab\xe3\x83", false);
    assert_eq!(text, "ab");
    assert_eq!(decoded, 2);
}

#[test]
fn decode_valid_input_borrows() {
    let (text, decoded) = decode_utf8("plain".as_bytes(), false);
    assert!(matches!(text, Cow::Borrowed("plain")));
    assert_eq!(decoded, 5);
}

// === Short destination ===

#[test]
fn short_destination_retains_remainder() {
    let mut transformer = EmojiTransformer::default();
    let mut dst = [0u8; 3];
    let src = b":beer:!";

    let first = transformer.transform(&mut dst, src, true);
    assert_eq!(
        first,
        Progress {
            written: 3,
            consumed: 0,
            status: Status::ShortDst,
        }
    );

    let second = transformer.transform(&mut dst, src, true);
    assert_eq!(second.status, Status::Done);
    assert_eq!(second.consumed, src.len());
    // 4 emoji bytes + padding + '!' = 6 bytes, 3 already written.
    assert_eq!(second.written, 3);
}

#[test]
fn zero_length_destination_makes_no_progress() {
    let mut transformer = EmojiTransformer::default();
    let progress = transformer.transform(&mut [], b"abc", true);
    assert_eq!(progress.written, 0);
    assert_eq!(progress.status, Status::ShortDst);

    let mut dst = [0u8; 8];
    let progress = transformer.transform(&mut dst, b"abc", true);
    assert_eq!(&dst[..progress.written], b"abc");
    assert_eq!(progress.consumed, 3);
}

#[test]
fn every_destination_size_gives_same_output() {
    let text = "A :smile: and a :beer: day keeps the doctor away :flag-us:";
    let expected = Scanner::default().compile(text);
    for dst_len in 1..=16 {
        let fragments = ["A :smi", "le: and a :beer: day keeps", " the doctor away :flag-us:"];
        assert_eq!(stream_str(&fragments, dst_len), expected, "dst_len = {dst_len}");
    }
}

#[test]
fn transform_into_collects_everything() {
    let mut transformer = EmojiTransformer::default();
    let text = ":sushi: ".repeat(2000);
    let mut out = Vec::new();
    transformer.transform_into(text.as_bytes(), true, &mut out);
    assert_eq!(out, "\u{1f363}  ".repeat(2000).into_bytes());
}

// === Reset & configuration ===

#[test]
fn reset_discards_carried_candidate() {
    let mut transformer = EmojiTransformer::default();
    let mut dst = [0u8; 16];
    transformer.transform(&mut dst, b":be", false);
    assert_eq!(transformer.carried(), b":be");

    transformer.reset();
    assert!(transformer.carried().is_empty());
    let progress = transformer.transform(&mut dst, b"er:", true);
    assert_eq!(&dst[..progress.written], b"er:");
}

#[test]
fn custom_scanner_padding_applies() {
    let scanner = Scanner::new(moji_table::code_table()).with_padding("");
    let mut transformer = EmojiTransformer::new(scanner);
    let mut out = Vec::new();
    transformer.transform_into(b":beer:!", true, &mut out);
    assert_eq!(out, format!("{BEER}!").into_bytes());
}

#[test]
fn with_table_uses_default_padding() {
    let mut transformer = EmojiTransformer::with_table(moji_table::code_table());
    let mut out = Vec::new();
    transformer.transform_into(b":beer:", true, &mut out);
    assert_eq!(out, format!("{BEER} ").into_bytes());
}
