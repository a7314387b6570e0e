use super::*;
use pretty_assertions::assert_eq;

const BEER: &str = "\u{1f37a}";
const SMILE: &str = "\u{1f604}";
const SUSHI: &str = "\u{1f363}";
const FLAG_US: &str = "\u{1f1fa}\u{1f1f8}";

/// Helper: compile with the global table and default padding.
fn compile(text: &str) -> String {
    Scanner::default().compile(text)
}

/// Helper: scan a non-final chunk, returning (output, consumed).
fn scan_partial(text: &str) -> (String, usize) {
    let mut out = String::new();
    let consumed = Scanner::default().scan(text, &mut out, false);
    (out, consumed)
}

// === Substitution ===

#[test]
fn beer_then_text() {
    assert_eq!(compile(":beer: test"), format!("{BEER}  test"));
}

#[test]
fn beer_with_japanese_text() {
    assert_eq!(compile(":beer: ビール!!!"), format!("{BEER}  ビール!!!"));
}

#[test]
fn plus_one_gets_padding() {
    assert_eq!(compile(":+1:"), "\u{1f44d} ");
}

#[test]
fn two_codes_in_one_line() {
    assert_eq!(
        compile("A :smile: and another: :smile:"),
        format!("A {SMILE}  and another: {SMILE} ")
    );
}

#[test]
fn adjacent_codes() {
    assert_eq!(compile(":beer::beer:"), format!("{BEER} {BEER} "));
}

// === Flags ===

#[test]
fn flag_has_no_padding() {
    assert_eq!(compile(":flag-us:"), FLAG_US);
    assert_eq!(compile("go :flag-us:!"), format!("go {FLAG_US}!"));
}

#[test]
fn malformed_flag_is_literal() {
    assert_eq!(compile(":flag-USA:"), ":flag-USA:");
}

// === Literal passthrough ===

#[test]
fn unknown_code_unchanged() {
    assert_eq!(compile(":no-such-code:"), ":no-such-code:");
}

#[test]
fn text_without_delimiters_unchanged() {
    assert_eq!(compile("No smiles today."), "No smiles today.");
    assert_eq!(compile(""), "");
}

#[test]
fn whitespace_aborts_candidate() {
    assert_eq!(compile(":sushi is good:"), ":sushi is good:");
    assert_eq!(compile(":beer\n:"), ":beer\n:");
}

#[test]
fn unicode_whitespace_aborts_candidate() {
    // U+3000 IDEOGRAPHIC SPACE
    assert_eq!(compile(":beer\u{3000}:beer:"), format!(":beer\u{3000}{BEER} "));
}

#[test]
fn lone_colon_at_end() {
    assert_eq!(compile("ratio :"), "ratio :");
    assert_eq!(compile(":"), ":");
}

#[test]
fn unterminated_candidate_flushed_at_eof() {
    assert_eq!(compile("see :beer"), "see :beer");
}

#[test]
fn closing_colon_does_not_reopen() {
    // `:qq:` closes as an unknown token; `beer` is plain text afterwards.
    assert_eq!(compile(":qq:beer:"), ":qq:beer:");
}

// === Colon runs ===

#[test]
fn continuity_colons() {
    assert_eq!(compile("::smile:"), format!(":{SMILE} "));
}

#[test]
fn colon_runs_stay_literal() {
    assert_eq!(compile(":::"), ":::");
    assert_eq!(compile("::: "), "::: ");
}

#[test]
fn repeated_pattern_from_stream_test() {
    assert_eq!(
        compile(":sushi: ::: :sushi :sushi: :"),
        format!("{SUSHI}  ::: :sushi {SUSHI}  :")
    );
}

#[test]
fn long_colon_run_does_not_recurse() {
    let text = ":".repeat(100_000);
    assert_eq!(compile(&text), text);
}

// === Partial input ===

#[test]
fn partial_holds_back_open_candidate() {
    let (out, consumed) = scan_partial("hello :be");
    assert_eq!(out, "hello ");
    assert_eq!(consumed, 6);
}

#[test]
fn partial_after_colon_run_holds_last_colon() {
    let (out, consumed) = scan_partial("a::");
    assert_eq!(out, "a:");
    assert_eq!(consumed, 2);
}

#[test]
fn partial_without_candidate_consumes_everything() {
    let (out, consumed) = scan_partial("hello :beer: ");
    assert_eq!(out, format!("hello {BEER}  "));
    assert_eq!(consumed, 13);
}

// === Configuration ===

#[test]
fn custom_padding() {
    let scanner = Scanner::default().with_padding("");
    assert_eq!(scanner.padding(), "");
    assert_eq!(scanner.compile(":beer:!"), format!("{BEER}!"));

    let scanner = Scanner::default().with_padding("  ");
    assert_eq!(scanner.compile(":beer:"), format!("{BEER}  "));
    // Flags stay unpadded.
    assert_eq!(scanner.compile(":flag-us:"), FLAG_US);
}

#[test]
fn default_padding_is_one_space() {
    assert_eq!(Scanner::default().padding(), DEFAULT_PADDING);
    assert_eq!(DEFAULT_PADDING, " ");
}

#[test]
fn emojize_single_tokens() {
    let scanner = Scanner::default();
    let mut out = String::new();
    scanner.emojize(":sushi:", &mut out);
    scanner.emojize(":flag-jp:", &mut out);
    scanner.emojize(":nope:", &mut out);
    assert_eq!(out, format!("{SUSHI} \u{1f1ef}\u{1f1f5}:nope:"));
}
