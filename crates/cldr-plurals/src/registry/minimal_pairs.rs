//! Minimal pair phrase templates.
//!
//! A minimal pair is a short phrase template that makes a plural category
//! distinction visible for a locale ("{0} day" vs "{0} days"). The
//! registry stores one optional template per (locale, plural type,
//! category) and distinguishes "locale entirely unknown" from "locale known
//! but missing this category" — the caller degrades the latter to a
//! placeholder string.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use icu_plurals::PluralCategory;

use crate::error::DataError;
use crate::types::{CATEGORIES, LocaleId, PluralType, category_from_keyword, category_rank};

/// Per-type templates for one locale, indexed by category rank.
#[derive(Debug, Default)]
struct PairSet {
    cardinal: [Option<&'static str>; 6],
    ordinal: [Option<&'static str>; 6],
}

impl PairSet {
    fn patterns(&self, plural_type: PluralType) -> &[Option<&'static str>; 6] {
        match plural_type {
            PluralType::Cardinal => &self.cardinal,
            PluralType::Ordinal => &self.ordinal,
        }
    }

    fn patterns_mut(&mut self, plural_type: PluralType) -> &mut [Option<&'static str>; 6] {
        match plural_type {
            PluralType::Cardinal => &mut self.cardinal,
            PluralType::Ordinal => &mut self.ordinal,
        }
    }
}

/// Per-locale minimal pair templates, loaded lazily at most once.
pub struct MinimalPairRegistry {
    cardinal_rows: &'static [(&'static str, &'static str, &'static str)],
    ordinal_rows: &'static [(&'static str, &'static str, &'static str)],
    loaded: OnceLock<Result<BTreeMap<LocaleId, PairSet>, DataError>>,
}

impl MinimalPairRegistry {
    /// A registry over (locale, category keyword, pattern) source rows.
    pub fn new(
        cardinal_rows: &'static [(&'static str, &'static str, &'static str)],
        ordinal_rows: &'static [(&'static str, &'static str, &'static str)],
    ) -> Self {
        Self {
            cardinal_rows,
            ordinal_rows,
            loaded: OnceLock::new(),
        }
    }

    /// The template for (locale, type, category), if known.
    ///
    /// `None` covers both an unknown locale and a per-category miss; use
    /// [`MinimalPairRegistry::categories`] to tell them apart.
    pub fn pattern(
        &self,
        locale: &LocaleId,
        plural_type: PluralType,
        category: PluralCategory,
    ) -> Result<Option<&'static str>, DataError> {
        Ok(self
            .table()?
            .get(locale)
            .and_then(|pairs| pairs.patterns(plural_type)[category_rank(category)]))
    }

    /// The categories a locale has templates for, in canonical order.
    ///
    /// `None` when the locale has no minimal pair data at all (for either
    /// plural type); `Some` with a possibly-empty list otherwise.
    pub fn categories(
        &self,
        locale: &LocaleId,
        plural_type: PluralType,
    ) -> Result<Option<Vec<PluralCategory>>, DataError> {
        Ok(self.table()?.get(locale).map(|pairs| {
            let patterns = pairs.patterns(plural_type);
            CATEGORIES
                .iter()
                .copied()
                .filter(|category| patterns[category_rank(*category)].is_some())
                .collect()
        }))
    }

    fn table(&self) -> Result<&BTreeMap<LocaleId, PairSet>, DataError> {
        self.loaded
            .get_or_init(|| Self::load(self.cardinal_rows, self.ordinal_rows))
            .as_ref()
            .map_err(DataError::clone)
    }

    fn load(
        cardinal_rows: &'static [(&'static str, &'static str, &'static str)],
        ordinal_rows: &'static [(&'static str, &'static str, &'static str)],
    ) -> Result<BTreeMap<LocaleId, PairSet>, DataError> {
        let mut table: BTreeMap<LocaleId, PairSet> = BTreeMap::new();

        for (plural_type, rows) in [
            (PluralType::Cardinal, cardinal_rows),
            (PluralType::Ordinal, ordinal_rows),
        ] {
            for (locale, keyword, pattern) in rows {
                let locale = LocaleId::parse(locale)?;
                let Some(category) = category_from_keyword(keyword) else {
                    return Err(DataError::UnknownCategory {
                        locale,
                        keyword: (*keyword).to_string(),
                    });
                };

                let slot =
                    &mut table.entry(locale.clone()).or_default().patterns_mut(plural_type)
                        [category_rank(category)];
                if slot.is_some() {
                    return Err(DataError::DuplicatePattern {
                        locale,
                        plural_type,
                        category: (*keyword).to_string(),
                    });
                }
                *slot = Some(*pattern);
            }
        }

        Ok(table)
    }
}
