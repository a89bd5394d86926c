//! Extra numeric samples per locale.
//!
//! Some locales need additional sample values to exercise their plural rule
//! boundaries (explicit decimals like "1.0", or integers past the usual
//! illustrative range). This registry owns that mapping, loaded once from a
//! source table of (alias-list, value-list) string pairs.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use crate::error::DataError;
use crate::types::{FixedDecimalValue, LocaleId};

/// An immutable-after-freeze multimap from locale to sample values.
#[derive(Debug, Default)]
pub struct LocaleSamples {
    map: BTreeMap<LocaleId, BTreeSet<FixedDecimalValue>>,
    frozen: bool,
}

impl LocaleSamples {
    /// An empty, unfrozen map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sample value for a locale.
    ///
    /// Fails with [`DataError::ImmutableState`] once the map is frozen.
    pub fn insert(&mut self, locale: LocaleId, value: FixedDecimalValue) -> Result<(), DataError> {
        if self.frozen {
            return Err(DataError::ImmutableState);
        }
        self.map.entry(locale).or_default().insert(value);
        Ok(())
    }

    /// Freeze the map; all later `insert` calls fail.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Whether a locale has any samples.
    pub fn contains(&self, locale: &LocaleId) -> bool {
        self.map.contains_key(locale)
    }

    /// The sample set for a locale, if any.
    pub fn get(&self, locale: &LocaleId) -> Option<&BTreeSet<FixedDecimalValue>> {
        self.map.get(locale)
    }

    /// Iterate all (locale, samples) entries in locale order.
    pub fn iter(&self) -> impl Iterator<Item = (&LocaleId, &BTreeSet<FixedDecimalValue>)> {
        self.map.iter()
    }

    /// Number of locales with samples.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no locale has samples.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Owns the per-locale extra samples, loading them lazily at most once.
pub struct SampleRegistry {
    rows: &'static [(&'static str, &'static str)],
    loaded: OnceLock<Result<LocaleSamples, DataError>>,
}

impl SampleRegistry {
    /// A registry over (alias-list, value-list) source rows.
    ///
    /// Nothing is parsed until the first query.
    pub fn new(rows: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            rows,
            loaded: OnceLock::new(),
        }
    }

    /// The full mapping, loading it on first call.
    pub fn all(&self) -> Result<&LocaleSamples, DataError> {
        self.loaded
            .get_or_init(|| Self::load(self.rows))
            .as_ref()
            .map_err(DataError::clone)
    }

    /// The samples for one locale; the empty set when there are none.
    pub fn samples_for(&self, locale: &LocaleId) -> Result<&BTreeSet<FixedDecimalValue>, DataError> {
        static EMPTY: BTreeSet<FixedDecimalValue> = BTreeSet::new();
        Ok(self.all()?.get(locale).unwrap_or(&EMPTY))
    }

    fn load(rows: &'static [(&'static str, &'static str)]) -> Result<LocaleSamples, DataError> {
        let mut samples = LocaleSamples::new();

        for (aliases, values) in rows {
            let parsed: Vec<FixedDecimalValue> = values
                .split(',')
                .map(FixedDecimalValue::parse)
                .collect::<Result<_, _>>()?;

            for alias in aliases.split(',') {
                let locale = LocaleId::parse(alias)?;
                if samples.contains(&locale) {
                    return Err(DataError::DuplicateLocale { locale });
                }
                for value in &parsed {
                    samples.insert(locale.clone(), *value)?;
                }
            }
        }

        samples.freeze();
        Ok(samples)
    }
}
