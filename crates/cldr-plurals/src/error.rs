//! Error types for curated plural data.
//!
//! Everything here is a construction-time failure: the source tables are
//! build-time curated content, so a bad row aborts the load instead of being
//! skipped. Query-time "no data for this locale" is modeled as an empty or
//! absent result, never as an error.

use thiserror::Error;

use crate::types::{LocaleId, PluralType};

/// An error raised while loading curated plural data.
///
/// `Clone` so that a failed lazy load can hand the same error to every
/// caller that touches the poisoned registry.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// A locale alias appeared twice within one registry load pass.
    #[error("duplicate locale: {locale}")]
    DuplicateLocale { locale: LocaleId },

    /// A (locale, plural type, category) minimal pair was specified twice.
    #[error("duplicate minimal pair for {locale} ({plural_type}, {category})")]
    DuplicatePattern {
        locale: LocaleId,
        plural_type: PluralType,
        category: String,
    },

    /// A minimal pair row named a category keyword outside the CLDR set.
    #[error("unknown plural category keyword '{keyword}' for {locale}")]
    UnknownCategory { locale: LocaleId, keyword: String },

    /// A rule description was rejected by the rule engine's parser.
    #[error("cannot parse plural rules for {locale}: {message}\n\t{rules}")]
    RuleParse {
        locale: LocaleId,
        rules: String,
        message: String,
    },

    /// A sample token is not a valid decimal literal.
    #[error("invalid sample literal '{token}': {message}")]
    NumericLiteral { token: String, message: String },

    /// A locale token in a source table is not a well-formed locale id.
    #[error("invalid locale id '{locale}': {message}")]
    LocaleSyntax { locale: String, message: String },

    /// Attempted to mutate a registry after it was frozen.
    #[error("registry is frozen; samples cannot be added after loading")]
    ImmutableState,
}
