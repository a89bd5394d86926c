//! Miette diagnostic for unknown locales.

use cldr_plurals::suggest::suggest_locales;
use cldr_plurals::LocaleId;
use miette::Diagnostic;
use thiserror::Error;

/// How many suggestions to surface in the help text.
const SUGGESTION_LIMIT: usize = 3;

/// A miette-compatible diagnostic for a locale without rule data.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("no plural rule data for locale '{locale}'")]
#[diagnostic(code(cldr_plurals::unknown_locale))]
pub struct UnknownLocaleDiagnostic {
    locale: String,

    #[help]
    help: Option<String>,
}

impl UnknownLocaleDiagnostic {
    /// Create a diagnostic, ranking the closest available locales.
    pub fn new(locale: &str, available: &[LocaleId]) -> Self {
        let suggestions = suggest_locales(locale, available, SUGGESTION_LIMIT);
        let help = if suggestions.is_empty() {
            None
        } else {
            let rendered: Vec<String> = suggestions.iter().map(ToString::to_string).collect();
            Some(format!("did you mean: {}?", rendered.join(", ")))
        };

        Self {
            locale: locale.to_string(),
            help,
        }
    }
}
