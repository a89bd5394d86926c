//! The plural rule engine seam.
//!
//! Rule-grammar parsing and evaluation are not implemented here; they are
//! delegated to `icu_plurals`. This module defines the contract this crate
//! needs from an engine ([`PluralRuleEngine`]), the compiled form of one
//! locale's rules ([`RuleSet`]), and the default baked-data implementation
//! ([`BakedRulesEngine`]).

mod baked;
mod description;

use std::fmt;
use std::sync::Arc;

use icu_plurals::provider::rules::reference;
use icu_plurals::provider::rules::reference::ast;
use icu_plurals::{PluralCategory, PluralOperands};

pub use baked::BakedRulesEngine;

use crate::error::DataError;
use crate::factory::Equivalent;
use crate::types::{FixedDecimalValue, LocaleId, PluralType, RuleSetId, category_rank};

/// The external rule-engine contract.
///
/// Implementations own the locale-to-rules data and the rule grammar; this
/// crate only routes lookups through them. All methods are fallible because
/// engine data may itself be lazily loaded curated content.
pub trait PluralRuleEngine: Send + Sync {
    /// Resolve the rule set for a locale and plural type.
    ///
    /// Locales unknown to the engine resolve to the default rule set (every
    /// value is `other`), mirroring ICU; "unknown locale" is not an error.
    fn rules_for(
        &self,
        locale: &LocaleId,
        plural_type: PluralType,
    ) -> Result<Arc<RuleSet>, DataError>;

    /// Parse a rule description such as `"one: n = 1; few: n = 2..4"`.
    ///
    /// Malformed grammar fails with [`DataError::RuleParse`]; callers that
    /// know which locale the description belongs to attach it to the error.
    fn parse_description(&self, description: &str) -> Result<Arc<RuleSet>, DataError>;

    /// Locales the engine has rule data for, in stable enumeration order.
    fn available_locales(&self) -> Result<Vec<LocaleId>, DataError>;

    /// The engine's own functional-equivalence grouping over its default
    /// (non-overridden) cardinal rules.
    fn functional_equivalent(&self, locale: &LocaleId) -> Result<Equivalent, DataError>;
}

/// One category's parsed rule.
#[derive(Debug, Clone)]
struct RuleEntry {
    category: PluralCategory,
    rule: ast::Rule,
}

/// A compiled rule set for one locale and plural type.
///
/// Holds the parsed rules in canonical category order plus the canonical
/// string form used for functional-equivalence grouping. The `other`
/// category is implicit: a value matching no entry is `other`, and an empty
/// rule set classifies everything as `other`.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    entries: Vec<RuleEntry>,
    canonical: String,
}

impl RuleSet {
    /// The category for a sample value, written form included.
    ///
    /// # Example
    ///
    /// ```
    /// use cldr_plurals::{BakedRulesEngine, FixedDecimalValue, PluralCategory, PluralRuleEngine};
    ///
    /// let engine = BakedRulesEngine::new();
    /// let rules = engine.parse_description("one: i = 1 and v = 0").unwrap();
    ///
    /// let one = FixedDecimalValue::parse("1").unwrap();
    /// let one_dot_zero = FixedDecimalValue::parse("1.0").unwrap();
    /// assert_eq!(rules.category_for(&one), PluralCategory::One);
    /// assert_eq!(rules.category_for(&one_dot_zero), PluralCategory::Other);
    /// ```
    pub fn category_for(&self, value: &FixedDecimalValue) -> PluralCategory {
        self.category_for_operands(&value.operands())
    }

    /// The category for pre-computed plural operands.
    pub fn category_for_operands(&self, operands: &PluralOperands) -> PluralCategory {
        for entry in &self.entries {
            if reference::test_condition(&entry.rule.condition, operands) {
                return entry.category;
            }
        }
        PluralCategory::Other
    }

    /// The categories this rule set can produce, in canonical order.
    ///
    /// Always ends with `Other`.
    pub fn categories(&self) -> Vec<PluralCategory> {
        let mut categories: Vec<PluralCategory> =
            self.entries.iter().map(|entry| entry.category).collect();
        if !categories.contains(&PluralCategory::Other) {
            categories.push(PluralCategory::Other);
        }
        categories
    }

    /// The canonical string form, used for equivalence grouping.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The compact id of the canonical form.
    pub fn id(&self) -> RuleSetId {
        RuleSetId::of(&self.canonical)
    }

    /// Whether this is the default everything-is-`other` rule set.
    pub fn is_default(&self) -> bool {
        self.entries.is_empty()
    }

    fn from_entries(mut entries: Vec<RuleEntry>) -> Self {
        entries.sort_by_key(|entry| category_rank(entry.category));
        let canonical = description::canonical_form(&entries);
        Self { entries, canonical }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}
