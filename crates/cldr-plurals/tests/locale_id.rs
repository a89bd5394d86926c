//! Tests for locale id validation and canonicalization.

use cldr_plurals::{DataError, LocaleId};

#[test]
fn canonicalizes_separators_and_casing() {
    assert_eq!(LocaleId::parse("pt_PT").unwrap().as_str(), "pt-PT");
    assert_eq!(LocaleId::parse("PT-pt").unwrap().as_str(), "pt-PT");
    assert_eq!(LocaleId::parse("en").unwrap().as_str(), "en");
}

#[test]
fn trims_alias_list_whitespace() {
    assert_eq!(LocaleId::parse("  he ").unwrap().as_str(), "he");
}

#[test]
fn historical_aliases_stay_distinct() {
    // Alias handling belongs to the source tables, not to normalization.
    assert_ne!(LocaleId::parse("he").unwrap(), LocaleId::parse("iw").unwrap());
}

#[test]
fn rejects_malformed_ids() {
    for token in ["not a locale!", "", "a", "123", "en--US"] {
        let err = LocaleId::parse(token).unwrap_err();
        assert!(
            matches!(err, DataError::LocaleSyntax { .. }),
            "{token:?} should fail as LocaleSyntax, got {err:?}"
        );
    }
}

#[test]
fn root_is_und() {
    assert_eq!(LocaleId::root().as_str(), "und");
    assert_eq!(LocaleId::root(), LocaleId::parse("und").unwrap());
}
