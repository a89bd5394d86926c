//! Tests for the override registry and the Alternate variant's precedence.

use std::sync::Arc;

use cldr_plurals::{
    BakedRulesEngine, DataError, DataSource, FixedDecimalValue, LocaleId, OverrideRegistry,
    PluralCategory, PluralRulesFactory, PluralType, Variant,
};

fn locale(s: &str) -> LocaleId {
    LocaleId::parse(s).unwrap()
}

fn value(n: u64) -> FixedDecimalValue {
    FixedDecimalValue::from(n)
}

// =========================================================================
// Variant Gating
// =========================================================================

#[test]
fn normal_variant_never_reports_overrides() {
    let factory = PluralRulesFactory::new();
    let instance = factory.instance(&DataSource::baked(), Variant::Normal);

    assert!(!instance.has_override(&locale("he")).unwrap());
    assert!(!instance.has_override(&locale("cs")).unwrap());
}

#[test]
fn alternate_variant_reports_default_overrides() {
    let factory = PluralRulesFactory::new();
    let instance = factory.instance(&DataSource::baked(), Variant::Alternate);

    // Both halves of the alias pair are present independently.
    assert!(instance.has_override(&locale("he")).unwrap());
    assert!(instance.has_override(&locale("iw")).unwrap());
    assert!(!instance.has_override(&locale("ja")).unwrap());
}

// =========================================================================
// Precedence
// =========================================================================

#[test]
fn override_replaces_cardinal_rules_and_never_ordinal() {
    static OVERRIDES: &[(&str, &str)] = &[("en", "one: n = 0..1")];
    let source = DataSource::builder()
        .identity("test-overrides")
        .overrides(OVERRIDES)
        .build();

    let factory = PluralRulesFactory::new();
    let normal = factory.instance(&source, Variant::Normal);
    let alternate = factory.instance(&source, Variant::Alternate);

    let en = locale("en");

    // Cardinal: the override claims 0 is "one"; the default rules say
    // "other".
    assert_eq!(
        alternate
            .category_for(&en, PluralType::Cardinal, &value(0))
            .unwrap(),
        PluralCategory::One
    );
    assert_eq!(
        normal
            .category_for(&en, PluralType::Cardinal, &value(0))
            .unwrap(),
        PluralCategory::Other
    );

    // Ordinal lookups fall through to the engine for both variants.
    let normal_ordinal = normal.rules_for(&en, PluralType::Ordinal).unwrap();
    let alternate_ordinal = alternate.rules_for(&en, PluralType::Ordinal).unwrap();
    assert_eq!(normal_ordinal.canonical(), alternate_ordinal.canonical());
    assert_eq!(
        alternate
            .category_for(&en, PluralType::Ordinal, &value(2))
            .unwrap(),
        PluralCategory::Two
    );
}

#[test]
fn override_fully_replaces_instead_of_merging() {
    // The override only defines "few"; the engine's "one" for English must
    // not leak through.
    static OVERRIDES: &[(&str, &str)] = &[("en", "few: n = 2..4")];
    let source = DataSource::builder()
        .identity("test-replace")
        .overrides(OVERRIDES)
        .build();

    let factory = PluralRulesFactory::new();
    let alternate = factory.instance(&source, Variant::Alternate);

    let en = locale("en");
    let rules = alternate.rules_for(&en, PluralType::Cardinal).unwrap();
    assert_eq!(
        rules.categories(),
        vec![PluralCategory::Few, PluralCategory::Other]
    );
    assert_eq!(
        alternate
            .category_for(&en, PluralType::Cardinal, &value(1))
            .unwrap(),
        PluralCategory::Other
    );
}

// =========================================================================
// Load Failures
// =========================================================================

#[test]
fn malformed_override_row_is_fatal_and_names_the_locale() {
    static OVERRIDES: &[(&str, &str)] = &[("zz", "rubbish without a colon")];
    let engine: Arc<BakedRulesEngine> = Arc::new(BakedRulesEngine::new());
    let registry = OverrideRegistry::new(engine, OVERRIDES);

    let err = registry.has_override(&locale("zz")).unwrap_err();
    assert!(matches!(err, DataError::RuleParse { .. }));

    let message = err.to_string();
    assert!(message.contains("zz"), "error should name the locale: {message}");
    assert!(
        message.contains("rubbish without a colon"),
        "error should carry the raw rule text: {message}"
    );
}

#[test]
fn unknown_category_keyword_in_override_is_fatal() {
    static OVERRIDES: &[(&str, &str)] = &[("zz", "several: n = 2")];
    let engine: Arc<BakedRulesEngine> = Arc::new(BakedRulesEngine::new());
    let registry = OverrideRegistry::new(engine, OVERRIDES);

    let err = registry.has_override(&locale("zz")).unwrap_err();
    assert!(matches!(err, DataError::RuleParse { .. }));
    assert!(err.to_string().contains("several"));
}

#[test]
fn duplicate_override_locale_is_fatal() {
    static OVERRIDES: &[(&str, &str)] = &[("he,iw", "one: n = 1"), ("iw", "one: n = 2")];
    let engine: Arc<BakedRulesEngine> = Arc::new(BakedRulesEngine::new());
    let registry = OverrideRegistry::new(engine, OVERRIDES);

    let err = registry.has_override(&locale("he")).unwrap_err();
    assert!(matches!(err, DataError::DuplicateLocale { .. }));
    assert!(err.to_string().contains("iw"));
}

#[test]
fn ordinal_lookup_never_consults_the_table() {
    // The table is malformed, but ordinal lookups return before loading
    // it, so they keep working.
    static OVERRIDES: &[(&str, &str)] = &[("zz", "rubbish without a colon")];
    let engine: Arc<BakedRulesEngine> = Arc::new(BakedRulesEngine::new());
    let registry = OverrideRegistry::new(engine, OVERRIDES);

    assert!(registry
        .rules_for(&locale("zz"), PluralType::Ordinal)
        .unwrap()
        .is_none());
}
