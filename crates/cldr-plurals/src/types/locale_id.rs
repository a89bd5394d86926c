//! Validated locale identifiers.

use std::fmt;
use std::str::FromStr;

use icu_locale_core::LanguageIdentifier;
use serde::Serialize;

use crate::error::DataError;

/// A validated, canonicalized locale identifier.
///
/// Wraps the string form of an `icu_locale_core::LanguageIdentifier`, so
/// separators and casing are normalized (`"pt_PT"` becomes `"pt-PT"`).
/// Historical alias codes are *not* folded together: `"he"` and `"iw"` are
/// two distinct ids, and source tables that want both must list both.
///
/// # Example
///
/// ```
/// use cldr_plurals::LocaleId;
///
/// let locale = LocaleId::parse("pt_PT").unwrap();
/// assert_eq!(locale.as_str(), "pt-PT");
/// assert!(LocaleId::parse("not a locale!").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LocaleId(String);

impl LocaleId {
    /// Parse and canonicalize a locale id token.
    ///
    /// Surrounding whitespace is trimmed (source tables are comma-separated
    /// alias lists). Fails with [`DataError::LocaleSyntax`] when the token
    /// is not well-formed.
    pub fn parse(token: &str) -> Result<Self, DataError> {
        let trimmed = token.trim();
        let langid: LanguageIdentifier =
            trimmed.parse().map_err(|e| DataError::LocaleSyntax {
                locale: trimmed.to_string(),
                message: format!("{e}"),
            })?;
        Ok(Self(langid.to_string()))
    }

    /// The root locale, `und`.
    pub fn root() -> Self {
        Self("und".to_string())
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocaleId {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
