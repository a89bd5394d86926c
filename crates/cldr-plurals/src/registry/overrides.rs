//! Replacement plural rule definitions per locale.
//!
//! An override fully replaces the engine's default cardinal rule set for a
//! locale; no merging occurs. Ordinal lookups never consult this registry.
//! Overrides are curated data, so a rule that fails to parse aborts the
//! whole load with the offending locale and raw text in the error.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::engine::{PluralRuleEngine, RuleSet};
use crate::error::DataError;
use crate::types::{LocaleId, PluralType};

/// Per-locale replacement cardinal rules, loaded lazily at most once.
pub struct OverrideRegistry {
    engine: Arc<dyn PluralRuleEngine>,
    rows: &'static [(&'static str, &'static str)],
    loaded: OnceLock<Result<HashMap<LocaleId, Arc<RuleSet>>, DataError>>,
}

impl OverrideRegistry {
    /// A registry over (alias-list, rule-description) source rows.
    ///
    /// Descriptions are compiled through the engine's parser on first
    /// query.
    pub fn new(
        engine: Arc<dyn PluralRuleEngine>,
        rows: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            engine,
            rows,
            loaded: OnceLock::new(),
        }
    }

    /// Whether a locale has a replacement rule set.
    pub fn has_override(&self, locale: &LocaleId) -> Result<bool, DataError> {
        Ok(self.table()?.contains_key(locale))
    }

    /// The replacement rule set for a locale, cardinal only.
    ///
    /// Ordinal lookups always return `None` so callers fall through to the
    /// default engine.
    pub fn rules_for(
        &self,
        locale: &LocaleId,
        plural_type: PluralType,
    ) -> Result<Option<Arc<RuleSet>>, DataError> {
        if plural_type == PluralType::Ordinal {
            return Ok(None);
        }
        Ok(self.table()?.get(locale).map(Arc::clone))
    }

    fn table(&self) -> Result<&HashMap<LocaleId, Arc<RuleSet>>, DataError> {
        self.loaded
            .get_or_init(|| self.load())
            .as_ref()
            .map_err(DataError::clone)
    }

    fn load(&self) -> Result<HashMap<LocaleId, Arc<RuleSet>>, DataError> {
        let mut table = HashMap::new();

        for (aliases, rules_text) in self.rows {
            let mut compiled: Option<Arc<RuleSet>> = None;
            for alias in aliases.split(',') {
                let locale = LocaleId::parse(alias)?;
                if table.contains_key(&locale) {
                    return Err(DataError::DuplicateLocale { locale });
                }
                let rules = match &compiled {
                    Some(rules) => Arc::clone(rules),
                    None => {
                        let rules = self.engine.parse_description(rules_text).map_err(|e| {
                            // The engine has no locale context; attach ours.
                            match e {
                                DataError::RuleParse { rules, message, .. } => {
                                    DataError::RuleParse {
                                        locale: locale.clone(),
                                        rules,
                                        message,
                                    }
                                }
                                other => other,
                            }
                        })?;
                        compiled = Some(Arc::clone(&rules));
                        rules
                    }
                };
                table.insert(locale, rules);
            }
        }

        Ok(table)
    }
}
