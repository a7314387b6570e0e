use super::*;
use pretty_assertions::assert_eq;

#[test]
fn us_flag() {
    assert_eq!(regional_flag(":flag-us:"), Some(['\u{1f1fa}', '\u{1f1f8}']));
}

#[test]
fn letter_bounds() {
    assert_eq!(regional_indicator(b'a'), Some('\u{1f1e6}'));
    assert_eq!(regional_indicator(b'z'), Some('\u{1f1ff}'));
    assert_eq!(regional_indicator(b'A'), None);
    assert_eq!(regional_indicator(b'{'), None);
}

#[test]
fn uppercase_code_is_not_a_flag() {
    assert_eq!(regional_flag(":flag-US:"), None);
}

#[test]
fn code_must_be_two_letters() {
    assert_eq!(regional_flag(":flag-u:"), None);
    assert_eq!(regional_flag(":flag-usa:"), None);
    assert_eq!(regional_flag(":flag-:"), None);
    assert_eq!(regional_flag(":flag-1a:"), None);
}

#[test]
fn token_must_be_complete() {
    assert_eq!(regional_flag("flag-us:"), None);
    assert_eq!(regional_flag(":flag-us"), None);
    assert_eq!(regional_flag(":flags-us:"), None);
}

#[test]
fn non_ascii_code_is_not_a_flag() {
    // Two bytes, but one character.
    assert_eq!(regional_flag(":flag-é:"), None);
}
