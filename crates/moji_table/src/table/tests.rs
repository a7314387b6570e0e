use super::*;
use pretty_assertions::assert_eq;

// === Merging ===

#[test]
fn names_are_wrapped_in_colons() {
    assert_eq!(code_map().get(":beer:"), Some(&"\u{1f37a}"));
    assert_eq!(code_map().get("beer"), None);
}

#[test]
fn later_source_overrides_earlier() {
    // gemoji maps `umbrella` to the rain umbrella, emoji-data (merged last)
    // to the plain one.
    assert_eq!(code_table().lookup(":umbrella:"), Some("\u{2602}\u{fe0f}"));
}

#[test]
fn gemoji_spelling_wins_over_colliding_cldr_name() {
    // unicode.org names U+1F415 `dog`; emoji-data restores the gemoji face.
    assert_eq!(code_table().lookup(":dog:"), Some("\u{1f436}"));
    assert_eq!(code_table().lookup(":dog2:"), Some("\u{1f415}"));
    assert_eq!(code_table().lookup(":sunglasses:"), Some("\u{1f60e}"));
}

#[test]
fn override_moves_alias_between_emoji() {
    let table = CodeTable::from_sources(&[
        Source {
            name: "first",
            entries: &[("a", "1"), ("b", "1")],
        },
        Source {
            name: "second",
            entries: &[("b", "2")],
        },
    ]);

    assert_eq!(table.lookup(":b:"), Some("2"));
    assert_eq!(table.rev_code_map()["1"], vec![":a:".to_string()]);
    assert_eq!(table.rev_code_map()["2"], vec![":b:".to_string()]);
}

#[test]
fn empty_entries_are_skipped() {
    let table = CodeTable::from_sources(&[Source {
        name: "sparse",
        entries: &[("", "1"), ("blank", ""), ("ok", "2")],
    }]);

    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup(":ok:"), Some("2"));
    assert_eq!(table.lookup("::"), None);
    assert_eq!(table.lookup(":blank:"), None);
}

#[test]
fn empty_source_list_builds_empty_table() {
    let table = CodeTable::from_sources(&[]);
    assert!(table.is_empty());
    assert!(table.rev_code_map().is_empty());
}

// === Coverage ===

#[test]
fn common_shortcodes_resolve() {
    for (code, emoji) in [
        (":tiger:", "\u{1f42f}"),
        (":smile_cat:", "\u{1f638}"),
        (":heavy_check_mark:", "\u{2714}\u{fe0f}"),
        (":white_check_mark:", "\u{2705}"),
        (":rocket:", "\u{1f680}"),
        (":tada:", "\u{1f389}"),
        (":party_popper:", "\u{1f389}"),
        (":hourglass_flowing_sand:", "\u{23f3}"),
    ] {
        assert_eq!(code_table().lookup(code), Some(emoji), "{code}");
    }
}

#[test]
fn table_covers_every_source() {
    assert!(code_table().len() > 1500, "only {} codes", code_table().len());
    assert!(rev_code_map().len() > 1000);
}

// === Alias ordering ===

#[test]
fn aliases_sorted_by_length_then_lexically() {
    let table = CodeTable::from_sources(&[Source {
        name: "order",
        entries: &[("ccc", "x"), ("bb", "x"), ("aa", "x"), ("d", "x")],
    }]);

    assert_eq!(table.rev_code_map()["x"], vec![":d:", ":aa:", ":bb:", ":ccc:"]);
}

#[test]
fn thumbs_up_aliases() {
    assert_eq!(
        rev_code_map()["\u{1f44d}"],
        vec![":+1:", ":thumbsup:", ":thumbs_up:"]
    );
}

// === Table invariants ===

#[test]
fn every_code_is_listed_under_its_emoji() {
    for (code, emoji) in code_map() {
        let aliases = &rev_code_map()[emoji];
        assert!(
            aliases.contains(code),
            "{code} missing from aliases of {emoji:?}: {aliases:?}"
        );
    }
}

#[test]
fn every_alias_maps_back_to_its_emoji() {
    for (emoji, aliases) in rev_code_map() {
        assert!(!aliases.is_empty());
        for alias in aliases {
            assert_eq!(code_map().get(alias), Some(emoji));
        }
    }
}

#[test]
fn codes_are_scannable() {
    // A shortcode with interior whitespace or colons could never be closed
    // by the scanner, so the table must not contain one.
    for (code, emoji) in code_map() {
        assert!(!emoji.is_empty(), "{code} has an empty emoji");
        let name = code
            .strip_prefix(':')
            .and_then(|rest| rest.strip_suffix(':'))
            .unwrap_or_default();
        assert!(!name.is_empty(), "malformed code {code:?}");
        assert!(!name.contains(':'), "colon inside {code:?}");
        assert!(
            !name.chars().any(char::is_whitespace),
            "whitespace inside {code:?}"
        );
    }
}

// === Singleton ===

#[test]
fn code_table_is_built_once() {
    assert!(std::ptr::eq(code_table(), code_table()));
    assert!(std::ptr::eq(code_map(), code_table().code_map()));
}

#[test]
fn concurrent_first_access_sees_one_table() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| code_table() as *const CodeTable as usize))
        .collect();

    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().unwrap_or_default())
        .collect();

    let first = addresses[0];
    assert_ne!(first, 0);
    assert!(addresses.iter().all(|&a| a == first));
}
