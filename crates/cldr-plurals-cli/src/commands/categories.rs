//! Implementation of the `cldr-plurals categories` command.

use cldr_plurals::{
    DataSource, LocaleId, PluralRulesFactory, PluralType, category_name,
};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::commands::variant_for;
use crate::output::UnknownLocaleDiagnostic;
use crate::output::table::{CategoryRow, format_category_table};

/// Arguments for the categories command.
#[derive(Debug, clap::Args)]
pub struct CategoriesArgs {
    /// Locale to inspect (e.g., en, ru, pt-PT)
    pub locale: String,

    /// Use the override-aware alternate variant
    #[arg(long)]
    pub alternate: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one category of one plural type.
#[derive(Serialize)]
struct CategoryJson {
    plural_type: String,
    category: String,
    minimal_pair: String,
}

/// Run the categories command.
pub fn run_categories(args: CategoriesArgs) -> Result<i32> {
    let locale = LocaleId::parse(&args.locale).into_diagnostic()?;

    let factory = PluralRulesFactory::new();
    let instance = factory.instance(&DataSource::baked(), variant_for(args.alternate));

    let available = instance.available_locales().into_diagnostic()?;
    if !available.contains(&locale) {
        return Err(UnknownLocaleDiagnostic::new(&args.locale, &available).into());
    }

    let mut rows = Vec::new();
    for plural_type in [PluralType::Cardinal, PluralType::Ordinal] {
        let rules = instance.rules_for(&locale, plural_type).into_diagnostic()?;
        for category in rules.categories() {
            let pattern = instance
                .sample_pattern(&locale, plural_type, category)
                .into_diagnostic()?;
            rows.push(CategoryRow {
                plural_type,
                category: category_name(category).to_string(),
                minimal_pair: pattern,
            });
        }
    }

    if args.json {
        let json: Vec<CategoryJson> = rows
            .iter()
            .map(|row| CategoryJson {
                plural_type: row.plural_type.to_string(),
                category: row.category.clone(),
                minimal_pair: row.minimal_pair.clone(),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json).into_diagnostic()?
        );
    } else {
        println!("{}", format_category_table(&locale, &rows));

        let samples = instance.extra_samples_for(&locale).into_diagnostic()?;
        if !samples.is_empty() {
            let rendered: Vec<String> = samples.iter().map(ToString::to_string).collect();
            println!("extra samples: {}", rendered.join(", "));
        }
    }

    Ok(exitcode::OK)
}
