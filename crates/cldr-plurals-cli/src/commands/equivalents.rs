//! Implementation of the `cldr-plurals equivalents` command.

use std::collections::BTreeMap;

use cldr_plurals::{DataSource, LocaleId, PluralRulesFactory, PluralType, RuleSetId};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::commands::variant_for;
use crate::output::table::{EquivalenceGroup, format_equivalence_table};

/// Arguments for the equivalents command.
#[derive(Debug, clap::Args)]
pub struct EquivalentsArgs {
    /// Use the override-aware alternate variant
    #[arg(long)]
    pub alternate: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one equivalence group.
#[derive(Serialize)]
struct GroupJson {
    representative: String,
    rule_set_id: RuleSetId,
    locales: Vec<String>,
}

/// Run the equivalents command.
pub fn run_equivalents(args: EquivalentsArgs) -> Result<i32> {
    let factory = PluralRulesFactory::new();
    let instance = factory.instance(&DataSource::baked(), variant_for(args.alternate));

    // Group members under their representative, keeping enumeration order
    // within each group.
    let mut groups: BTreeMap<LocaleId, EquivalenceGroup> = BTreeMap::new();
    for locale in instance.available_locales().into_diagnostic()? {
        let equivalent = instance.functional_equivalent(&locale).into_diagnostic()?;
        let rules = instance
            .rules_for(&locale, PluralType::Cardinal)
            .into_diagnostic()?;
        groups
            .entry(equivalent.locale)
            .or_insert_with(|| EquivalenceGroup {
                rule_set_id: rules.id(),
                locales: Vec::new(),
            })
            .locales
            .push(locale.to_string());
    }

    if args.json {
        let json: Vec<GroupJson> = groups
            .iter()
            .map(|(representative, group)| GroupJson {
                representative: representative.to_string(),
                rule_set_id: group.rule_set_id,
                locales: group.locales.clone(),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json).into_diagnostic()?
        );
    } else {
        println!("{}", format_equivalence_table(&groups));
    }

    Ok(exitcode::OK)
}
