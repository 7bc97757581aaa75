//! Round-trip properties of the dispatcher over generated input.

use proptest::prelude::*;
use textcodec_core::impls::round_trips;
use textcodec_core::{Format, TranslationError, translate};

/// Characters MORSE can carry, upper-case only.
const MORSE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.,?'!/()&:;=+-_\"$@ ";

fn morse_text() -> impl Strategy<Value = String> {
    let chars: Vec<char> = MORSE_CHARS.chars().collect();
    prop::collection::vec(prop::sample::select(chars), 0..64)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn text_to_text_is_identity(t in "[ -~]*") {
        prop_assert_eq!(translate(&t, "TEXT", "TEXT").unwrap(), t);
    }

    #[test]
    fn binary_round_trips_any_text(t in any::<String>()) {
        let binary = translate(&t, "TEXT", "BINARY").unwrap();
        prop_assert_eq!(translate(&binary, "BINARY", "TEXT").unwrap(), t);
    }

    #[test]
    fn binary_groups_are_eight_bits(t in any::<String>()) {
        let binary = translate(&t, "TEXT", "BINARY").unwrap();
        let groups: Vec<&str> = binary.split_whitespace().collect();
        prop_assert_eq!(groups.len(), t.len());
        prop_assert!(groups.iter().all(|g| g.len() == 8 && g.bytes().all(|b| b == b'0' || b == b'1')));
    }

    #[test]
    fn morse_round_trips_table_text(t in morse_text()) {
        prop_assert!(round_trips(Format::Morse, &t));
        let morse = translate(&t, "TEXT", "MORSE").unwrap();
        prop_assert_eq!(translate(&morse, "MORSE", "TEXT").unwrap(), t);
    }

    #[test]
    fn morse_folds_lower_case(t in "[a-z0-9 ]{0,40}") {
        let morse = translate(&t, "TEXT", "MORSE").unwrap();
        prop_assert_eq!(translate(&morse, "MORSE", "TEXT").unwrap(), t.to_ascii_uppercase());
    }

    #[test]
    fn unknown_tags_are_rejected(tag in "[A-Za-z]{1,8}") {
        prop_assume!(Format::ALL.iter().all(|f| f.as_str() != tag));
        let err = translate("x", "TEXT", &tag).unwrap_err();
        prop_assert_eq!(err, TranslationError::InvalidFormat(tag));
    }

    #[test]
    fn short_binary_groups_are_malformed(bits in "[01]{1,7}") {
        let err = translate(&bits, "BINARY", "TEXT").unwrap_err();
        let is_malformed = matches!(err, TranslationError::MalformedInput { format: Format::Binary, position: 0, .. });
        prop_assert!(is_malformed);
    }
}

#[test]
fn spec_examples() {
    let binary = translate("Hello, World!", "TEXT", "BINARY").unwrap();
    assert!(binary.starts_with("01001000 "));
    assert_eq!(translate("SOS", "TEXT", "MORSE").unwrap(), "... --- ...");
    assert_eq!(
        translate("x", "TEXT", "FOO").unwrap_err(),
        TranslationError::InvalidFormat("FOO".into())
    );
    assert!(matches!(
        translate("1010", "BINARY", "TEXT").unwrap_err(),
        TranslationError::MalformedInput { .. }
    ));
    assert!(matches!(
        translate("🙂", "TEXT", "MORSE").unwrap_err(),
        TranslationError::UnsupportedCharacter { ch: '🙂', .. }
    ));
}
