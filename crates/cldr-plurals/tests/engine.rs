//! Tests for the baked rule engine and rule-set classification.

use cldr_plurals::{
    BakedRulesEngine, DataError, FixedDecimalValue, LocaleId, PluralCategory, PluralRuleEngine,
    PluralType,
};

fn locale(s: &str) -> LocaleId {
    LocaleId::parse(s).unwrap()
}

fn written(token: &str) -> FixedDecimalValue {
    FixedDecimalValue::parse(token).unwrap()
}

fn category(
    engine: &BakedRulesEngine,
    loc: &str,
    plural_type: PluralType,
    token: &str,
) -> PluralCategory {
    engine
        .rules_for(&locale(loc), plural_type)
        .unwrap()
        .category_for(&written(token))
}

// =========================================================================
// Cardinal Classification
// =========================================================================

#[test]
fn english_cardinals() {
    let engine = BakedRulesEngine::new();
    assert_eq!(category(&engine, "en", PluralType::Cardinal, "1"), PluralCategory::One);
    assert_eq!(category(&engine, "en", PluralType::Cardinal, "2"), PluralCategory::Other);
    // Visible fraction digits push English out of "one".
    assert_eq!(category(&engine, "en", PluralType::Cardinal, "1.0"), PluralCategory::Other);
}

#[test]
fn russian_cardinals() {
    let engine = BakedRulesEngine::new();
    assert_eq!(category(&engine, "ru", PluralType::Cardinal, "1"), PluralCategory::One);
    assert_eq!(category(&engine, "ru", PluralType::Cardinal, "2"), PluralCategory::Few);
    assert_eq!(category(&engine, "ru", PluralType::Cardinal, "5"), PluralCategory::Many);
    assert_eq!(category(&engine, "ru", PluralType::Cardinal, "21"), PluralCategory::One);
    assert_eq!(category(&engine, "ru", PluralType::Cardinal, "11"), PluralCategory::Many);
}

#[test]
fn arabic_uses_all_six_categories() {
    let engine = BakedRulesEngine::new();
    assert_eq!(category(&engine, "ar", PluralType::Cardinal, "0"), PluralCategory::Zero);
    assert_eq!(category(&engine, "ar", PluralType::Cardinal, "1"), PluralCategory::One);
    assert_eq!(category(&engine, "ar", PluralType::Cardinal, "2"), PluralCategory::Two);
    assert_eq!(category(&engine, "ar", PluralType::Cardinal, "3"), PluralCategory::Few);
    assert_eq!(category(&engine, "ar", PluralType::Cardinal, "11"), PluralCategory::Many);
    assert_eq!(category(&engine, "ar", PluralType::Cardinal, "100"), PluralCategory::Other);
}

#[test]
fn hebrew_aliases_share_rules() {
    let engine = BakedRulesEngine::new();
    for loc in ["he", "iw"] {
        assert_eq!(category(&engine, loc, PluralType::Cardinal, "1"), PluralCategory::One);
        assert_eq!(category(&engine, loc, PluralType::Cardinal, "2"), PluralCategory::Two);
        assert_eq!(category(&engine, loc, PluralType::Cardinal, "20"), PluralCategory::Many);
        assert_eq!(category(&engine, loc, PluralType::Cardinal, "3"), PluralCategory::Other);
    }
}

#[test]
fn no_plural_locales_are_always_other() {
    let engine = BakedRulesEngine::new();
    for token in ["0", "1", "2", "1.5", "100"] {
        assert_eq!(category(&engine, "ja", PluralType::Cardinal, token), PluralCategory::Other);
    }
}

// =========================================================================
// Ordinal Classification
// =========================================================================

#[test]
fn english_ordinals() {
    let engine = BakedRulesEngine::new();
    assert_eq!(category(&engine, "en", PluralType::Ordinal, "1"), PluralCategory::One);
    assert_eq!(category(&engine, "en", PluralType::Ordinal, "2"), PluralCategory::Two);
    assert_eq!(category(&engine, "en", PluralType::Ordinal, "3"), PluralCategory::Few);
    assert_eq!(category(&engine, "en", PluralType::Ordinal, "4"), PluralCategory::Other);
    assert_eq!(category(&engine, "en", PluralType::Ordinal, "11"), PluralCategory::Other);
    assert_eq!(category(&engine, "en", PluralType::Ordinal, "21"), PluralCategory::One);
}

#[test]
fn ordinal_rules_are_independent_of_cardinal_rules() {
    let engine = BakedRulesEngine::new();
    // Swedish: 1 is cardinal "one" and ordinal "one", but 12 differs.
    assert_eq!(category(&engine, "sv", PluralType::Cardinal, "2"), PluralCategory::Other);
    assert_eq!(category(&engine, "sv", PluralType::Ordinal, "2"), PluralCategory::One);
    assert_eq!(category(&engine, "sv", PluralType::Ordinal, "12"), PluralCategory::Other);
}

// =========================================================================
// Unknown Locales And Defaults
// =========================================================================

#[test]
fn unknown_locale_resolves_to_the_default_rule_set() {
    let engine = BakedRulesEngine::new();
    let rules = engine
        .rules_for(&locale("xx-unknown"), PluralType::Cardinal)
        .unwrap();
    assert!(rules.is_default());
    assert_eq!(rules.category_for(&written("1")), PluralCategory::Other);
    assert_eq!(rules.categories(), vec![PluralCategory::Other]);
}

#[test]
fn locale_without_ordinal_data_gets_the_default_rule_set() {
    let engine = BakedRulesEngine::new();
    let rules = engine.rules_for(&locale("ar"), PluralType::Ordinal).unwrap();
    assert!(rules.is_default());
}

// =========================================================================
// Description Parsing
// =========================================================================

#[test]
fn parse_description_compiles_and_classifies() {
    let engine = BakedRulesEngine::new();
    let rules = engine
        .parse_description("one: n = 1; few: n = 2..4")
        .unwrap();

    assert_eq!(rules.category_for(&written("1")), PluralCategory::One);
    assert_eq!(rules.category_for(&written("3")), PluralCategory::Few);
    assert_eq!(rules.category_for(&written("9")), PluralCategory::Other);
    assert_eq!(
        rules.categories(),
        vec![PluralCategory::One, PluralCategory::Few, PluralCategory::Other]
    );
}

#[test]
fn canonical_form_ignores_declaration_order() {
    let engine = BakedRulesEngine::new();
    let forward = engine.parse_description("one: n = 1; few: n = 2..4").unwrap();
    let reversed = engine.parse_description("few: n = 2..4; one: n = 1").unwrap();

    assert_eq!(forward.canonical(), reversed.canonical());
    assert_eq!(forward.id(), reversed.id());
}

#[test]
fn empty_description_is_the_default_rule_set() {
    let engine = BakedRulesEngine::new();
    let rules = engine.parse_description("").unwrap();
    assert!(rules.is_default());
    assert_eq!(rules.canonical(), "");
}

#[test]
fn malformed_descriptions_are_rejected() {
    let engine = BakedRulesEngine::new();

    for description in [
        "no colon here",
        "several: n = 1",
        "one: n = 1; one: n = 2",
    ] {
        let err = engine.parse_description(description).unwrap_err();
        assert!(
            matches!(err, DataError::RuleParse { .. }),
            "{description:?} should fail as RuleParse, got {err:?}"
        );
    }
}

#[test]
fn duplicate_category_error_names_the_category() {
    let engine = BakedRulesEngine::new();
    let err = engine
        .parse_description("one: n = 1; one: n = 2")
        .unwrap_err();
    assert!(err.to_string().contains("one"));
}

// =========================================================================
// Enumeration
// =========================================================================

#[test]
fn available_locales_enumerate_in_declaration_order() {
    let engine = BakedRulesEngine::new();
    let locales = engine.available_locales().unwrap();

    assert_eq!(locales[0], LocaleId::root());
    let he = locales.iter().position(|l| *l == locale("he")).unwrap();
    let iw = locales.iter().position(|l| *l == locale("iw")).unwrap();
    assert_eq!(iw, he + 1);
}
