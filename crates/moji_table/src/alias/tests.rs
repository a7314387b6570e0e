use super::*;
use crate::table::code_map;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn plus_one_has_alias() {
    assert!(has_alias(":+1:"));
}

#[test]
fn unknown_code_has_no_alias() {
    assert!(!has_alias(":no-good:"));
}

#[test]
fn single_spelling_has_no_alias() {
    assert_eq!(alias_list(":taco:"), [":taco:".to_string()]);
    assert!(!has_alias(":taco:"));
}

#[test]
fn alias_list_includes_the_code_itself() {
    let aliases = alias_list(":thumbs_up:");
    assert_eq!(aliases, [":+1:", ":thumbsup:", ":thumbs_up:"]);
}

#[test]
fn alias_list_of_unknown_code_is_empty() {
    assert!(alias_list(":no-such-code:").is_empty());
    assert!(alias_list("").is_empty());
    // Bare names are not shortcodes.
    assert!(alias_list("beer").is_empty());
}

#[test]
fn normalize_to_shortest_alias() {
    assert_eq!(normalize_short_code(":thumbs_up:"), ":+1:");
    assert_eq!(normalize_short_code(":thumbsup:"), ":+1:");
    assert_eq!(normalize_short_code(":grinning_face_with_smiling_eyes:"), ":smile:");
}

#[test]
fn normalize_unknown_is_unchanged() {
    assert_eq!(normalize_short_code(":no-good:"), ":no-good:");
}

#[test]
fn canonical_form_is_stable_for_every_code() {
    for code in code_map().keys() {
        let once = normalize_short_code(code);
        assert_eq!(normalize_short_code(once), once, "unstable for {code}");
        assert_eq!(code_map().get(once), code_map().get(code.as_str()));
    }
}

proptest! {
    #[test]
    fn normalize_is_idempotent(code in "(:[a-z_+\\-0-9]{0,12}:)|\\PC{0,16}") {
        let once = normalize_short_code(&code);
        prop_assert_eq!(normalize_short_code(once), once);
    }

    #[test]
    fn has_alias_agrees_with_alias_list(code in "(:[a-z_+\\-0-9]{0,12}:)|\\PC{0,16}") {
        prop_assert_eq!(has_alias(&code), alias_list(&code).len() > 1);
    }
}
