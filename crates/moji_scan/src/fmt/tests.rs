use super::*;
use pretty_assertions::assert_eq;
use std::fmt::Write as _;

const BEER: &str = "\u{1f37a}";
const BEER_TEXT: &str = " ビール!!!";

#[test]
fn format_substitutes_after_formatting() {
    assert_eq!(
        emoji_format!("{} :beer:{}", "test", BEER_TEXT),
        format!("test {BEER}  ビール!!!")
    );
}

#[test]
fn format_substitutes_shortcodes_from_arguments() {
    assert_eq!(emoji_format!("{}{}", ":be", "er:"), format!("{BEER} "));
}

#[test]
fn format_multiple_codes() {
    let text = emoji_format!("{}{}{}{}", ":beer:", BEER_TEXT, ":beer:", BEER_TEXT);
    assert_eq!(text, format!("{BEER}  ビール!!!{BEER}  ビール!!!"));
}

#[test]
fn write_to_string() {
    let mut out = String::new();
    emoji_write!(out, "{} :beer:", "test").unwrap();
    assert_eq!(out, format!("test {BEER} "));
}

#[test]
fn writeln_appends_newline() {
    let mut out = String::new();
    emoji_writeln!(out, ":beer:{}", BEER_TEXT).unwrap();
    emoji_writeln!(out).unwrap();
    assert_eq!(out, format!("{BEER}  ビール!!!\n\n"));
}

#[test]
fn write_to_io_writer() {
    let mut out: Vec<u8> = Vec::new();
    emoji_write!(&mut out as &mut dyn std::io::Write, ":sushi:").unwrap();
    assert_eq!(out, "\u{1f363} ".as_bytes());
}

#[test]
fn print_macros_expand() {
    emoji_print!(":beer:{}", BEER_TEXT);
    emoji_println!(":beer:{}", BEER_TEXT);
    emoji_println!();
}

#[test]
fn error_message_is_substituted() {
    let err = emoji_error!("{} :beer:{}", "test", BEER_TEXT);
    assert_eq!(err.to_string(), format!("test {BEER}  ビール!!!"));
    assert_eq!(err.as_str(), err.to_string());
}

#[test]
fn message_is_a_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Message::new(":x:"));
}
