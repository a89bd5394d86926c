//! Tests for functional-equivalence grouping.

use cldr_plurals::{DataSource, LocaleId, PluralRulesFactory, PluralType, Variant};

fn locale(s: &str) -> LocaleId {
    LocaleId::parse(s).unwrap()
}

// =========================================================================
// Normal Variant
// =========================================================================

#[test]
fn locales_with_identical_rules_share_a_representative() {
    let factory = PluralRulesFactory::new();
    let instance = factory.instance(&DataSource::baked(), Variant::Normal);

    let ru = instance.functional_equivalent(&locale("ru")).unwrap();
    let uk = instance.functional_equivalent(&locale("uk")).unwrap();

    assert_eq!(ru.locale, uk.locale);
    assert_eq!(ru.locale, locale("ru"));
    assert!(ru.available);
    assert!(uk.available);
}

#[test]
fn representative_is_first_in_enumeration_order() {
    let factory = PluralRulesFactory::new();
    let instance = factory.instance(&DataSource::baked(), Variant::Normal);

    // "de" and "en" sit in the same alias row; "ast" is declared first.
    let de = instance.functional_equivalent(&locale("de")).unwrap();
    let en = instance.functional_equivalent(&locale("en")).unwrap();
    assert_eq!(de.locale, locale("ast"));
    assert_eq!(en.locale, locale("ast"));

    // A locale declared in its own later row but with byte-identical rules
    // joins the earlier group.
    let pt_pt = instance.functional_equivalent(&locale("pt-PT")).unwrap();
    assert_eq!(pt_pt.locale, locale("ast"));
    assert!(pt_pt.available);
}

#[test]
fn unknown_locale_resolves_to_root_and_is_not_available() {
    let factory = PluralRulesFactory::new();
    let instance = factory.instance(&DataSource::baked(), Variant::Normal);

    // Unknown locales fall back to the default other-only rules, whose
    // group representative is the root locale.
    let equivalent = instance.functional_equivalent(&locale("xx-unknown")).unwrap();
    assert_eq!(equivalent.locale, LocaleId::root());
    assert!(!equivalent.available);
}

#[test]
fn same_canonical_rules_share_a_rule_set_id() {
    let factory = PluralRulesFactory::new();
    let instance = factory.instance(&DataSource::baked(), Variant::Normal);

    let ru = instance.rules_for(&locale("ru"), PluralType::Cardinal).unwrap();
    let uk = instance.rules_for(&locale("uk"), PluralType::Cardinal).unwrap();
    assert_eq!(ru.canonical(), uk.canonical());
    assert_eq!(ru.id(), uk.id());

    let en = instance.rules_for(&locale("en"), PluralType::Cardinal).unwrap();
    assert_ne!(ru.id(), en.id());
}

// =========================================================================
// Alternate Variant
// =========================================================================

#[test]
fn alternate_grouping_reflects_overrides() {
    static OVERRIDES: &[(&str, &str)] = &[("en", "one: n = 0..1")];
    let source = DataSource::builder()
        .identity("test-equivalence")
        .overrides(OVERRIDES)
        .build();

    let factory = PluralRulesFactory::new();
    let normal = factory.instance(&source, Variant::Normal);
    let alternate = factory.instance(&source, Variant::Alternate);

    // Without the override, en groups with the other i=1-and-v=0 locales.
    let normal_en = normal.functional_equivalent(&locale("en")).unwrap();
    let normal_de = normal.functional_equivalent(&locale("de")).unwrap();
    assert_eq!(normal_en.locale, normal_de.locale);

    // With the override, en's rules are unique, so it represents itself.
    let alternate_en = alternate.functional_equivalent(&locale("en")).unwrap();
    let alternate_de = alternate.functional_equivalent(&locale("de")).unwrap();
    assert_ne!(alternate_en.locale, alternate_de.locale);
    assert_eq!(alternate_en.locale, locale("en"));
    assert!(alternate_en.available);
}

#[test]
fn alternate_grouping_is_cached_and_stable() {
    let factory = PluralRulesFactory::new();
    let instance = factory.instance(&DataSource::baked(), Variant::Alternate);

    let first = instance.functional_equivalent(&locale("ka")).unwrap();
    let second = instance.functional_equivalent(&locale("ka")).unwrap();
    assert_eq!(first, second);
}
