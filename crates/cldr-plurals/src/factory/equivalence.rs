//! Functional-equivalence grouping.
//!
//! Two locales are functionally equivalent when their resolved plural rule
//! sets have identical canonical string forms. The resolver groups locales
//! by that form and picks, per group, the first-encountered member in
//! enumeration order as the representative.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use serde::Serialize;

use crate::engine::RuleSet;
use crate::types::LocaleId;

/// The outcome of a functional-equivalence lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equivalent {
    /// The canonical representative of the queried locale's rule group.
    pub locale: LocaleId,
    /// Whether the queried locale itself is in the available set.
    pub available: bool,
}

/// Groups locales that share byte-identical canonical rule forms.
#[derive(Debug)]
pub struct FunctionalEquivalenceResolver {
    representatives: HashMap<String, LocaleId>,
    available: BTreeSet<LocaleId>,
}

impl FunctionalEquivalenceResolver {
    /// Build the grouping from (locale, resolved rules) pairs.
    ///
    /// Pair order is enumeration order: the first locale seen with a given
    /// canonical form becomes that group's representative.
    pub fn build(entries: impl IntoIterator<Item = (LocaleId, Arc<RuleSet>)>) -> Self {
        let mut representatives: HashMap<String, LocaleId> = HashMap::new();
        let mut available = BTreeSet::new();

        for (locale, rules) in entries {
            representatives
                .entry(rules.canonical().to_string())
                .or_insert_with(|| locale.clone());
            available.insert(locale);
        }

        Self {
            representatives,
            available,
        }
    }

    /// Resolve a locale, given its already-resolved rule set.
    ///
    /// A rule form matching no group resolves to the root locale, mirroring
    /// ICU's fallback.
    pub fn resolve(&self, locale: &LocaleId, rules: &RuleSet) -> Equivalent {
        let representative = self
            .representatives
            .get(rules.canonical())
            .cloned()
            .unwrap_or_else(LocaleId::root);
        Equivalent {
            locale: representative,
            available: self.available.contains(locale),
        }
    }
}
