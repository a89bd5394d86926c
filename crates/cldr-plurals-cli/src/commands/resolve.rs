//! Implementation of the `cldr-plurals resolve` command.

use cldr_plurals::{
    DataSource, FixedDecimalValue, LocaleId, PluralRulesFactory, category_name,
};
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::commands::{TypeArg, variant_for};
use crate::output::table::{ResolveRow, format_resolve_table};

/// Arguments for the resolve command.
#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    /// Locale to resolve against (e.g., en, ru, pt-PT)
    pub locale: String,

    /// Values as written, decimals included (e.g., 1 1.0 21)
    #[arg(required = true)]
    pub values: Vec<String>,

    /// Plural type to resolve
    #[arg(long = "type", value_enum, default_value_t = TypeArg::Cardinal)]
    pub plural_type: TypeArg,

    /// Use the override-aware alternate variant
    #[arg(long)]
    pub alternate: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one resolved value.
#[derive(Serialize)]
struct ResolveJson {
    value: String,
    category: String,
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> Result<i32> {
    let locale = LocaleId::parse(&args.locale).into_diagnostic()?;
    let plural_type = args.plural_type.into();

    let factory = PluralRulesFactory::new();
    let instance = factory.instance(&DataSource::baked(), variant_for(args.alternate));

    // Unlike `categories`, unknown locales are not an error here: they
    // resolve through the default rule set, which is worth being able to
    // demonstrate. Warn so the fallback is visible.
    let available = instance.available_locales().into_diagnostic()?;
    if !available.contains(&locale) {
        eprintln!(
            "{}",
            format!("warning: no rule data for '{locale}'; every value is 'other'").yellow()
        );
    }

    let rules = instance.rules_for(&locale, plural_type).into_diagnostic()?;

    let mut rows = Vec::new();
    for token in &args.values {
        let value = FixedDecimalValue::parse(token).into_diagnostic()?;
        rows.push(ResolveRow {
            value: value.to_string(),
            category: category_name(rules.category_for(&value)).to_string(),
        });
    }

    if args.json {
        let json: Vec<ResolveJson> = rows
            .iter()
            .map(|row| ResolveJson {
                value: row.value.clone(),
                category: row.category.clone(),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json).into_diagnostic()?
        );
    } else {
        println!("{}", format_resolve_table(&locale, plural_type, &rows));
    }

    Ok(exitcode::OK)
}
