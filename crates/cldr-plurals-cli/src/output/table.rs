//! Table formatting utilities for CLI output.

use std::collections::BTreeMap;

use cldr_plurals::{LocaleId, PluralType, RuleSetId};
use comfy_table::{ContentArrangement, Table, presets};

/// One row of the categories table.
pub struct CategoryRow {
    /// Which plural type the category belongs to.
    pub plural_type: PluralType,
    /// Category keyword ("one", "few", ...).
    pub category: String,
    /// Minimal pair pattern, or the no-pattern placeholder.
    pub minimal_pair: String,
}

/// Format category data for one locale as an ASCII table.
pub fn format_category_table(locale: &LocaleId, rows: &[CategoryRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Locale", "Type", "Category", "Minimal pair"]);

    for row in rows {
        table.add_row(vec![
            locale.to_string(),
            row.plural_type.to_string(),
            row.category.clone(),
            row.minimal_pair.clone(),
        ]);
    }

    table
}

/// One row of the resolve table.
pub struct ResolveRow {
    /// The value exactly as written.
    pub value: String,
    /// The resolved category keyword.
    pub category: String,
}

/// Format resolved values as an ASCII table.
pub fn format_resolve_table(
    locale: &LocaleId,
    plural_type: PluralType,
    rows: &[ResolveRow],
) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Value".to_string(),
        format!("{locale} {plural_type} category"),
    ]);

    for row in rows {
        table.add_row(vec![row.value.clone(), row.category.clone()]);
    }

    table
}

/// One functional-equivalence group.
pub struct EquivalenceGroup {
    /// Compact id of the group's canonical rule form.
    pub rule_set_id: RuleSetId,
    /// Group members in enumeration order.
    pub locales: Vec<String>,
}

/// Format equivalence groups as an ASCII table.
pub fn format_equivalence_table(groups: &BTreeMap<LocaleId, EquivalenceGroup>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Representative", "Rule set", "Locales"]);

    for (representative, group) in groups {
        table.add_row(vec![
            representative.to_string(),
            group.rule_set_id.to_string(),
            group.locales.join(", "),
        ]);
    }

    table
}
