//! The keyed, memoized plural rules factory.
//!
//! A [`PluralRulesFactory`] hands out one shared [`PluralRulesInstance`] per
//! (variant, data-source identity) key. The factory is an explicit service
//! passed by reference to whoever needs it, not ambient global state, so
//! tests and parallel tools get the one-instance-per-key guarantee without
//! hidden cross-test coupling.

mod equivalence;

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, OnceLock};

use bon::Builder;
use icu_plurals::PluralCategory;

pub use equivalence::{Equivalent, FunctionalEquivalenceResolver};

use crate::data;
use crate::engine::{BakedRulesEngine, PluralRuleEngine, RuleSet};
use crate::error::DataError;
use crate::registry::{LocaleSamples, MinimalPairRegistry, OverrideRegistry, SampleRegistry};
use crate::types::{FixedDecimalValue, LocaleId, PluralType};

/// Placeholder returned when a locale has no minimal pair for a category.
///
/// Tooling that scans all locales x all categories always wants *some*
/// displayable string, so a per-category miss degrades to this instead of
/// failing.
pub const NO_PATTERN: &str = "{0} {no pattern available}";

/// Which rule-resolution strategy an instance is bound to.
///
/// `Normal` passes every lookup through to the rule engine. `Alternate`
/// consults the override registry first for cardinal lookups. An instance
/// never changes variant; the two strategies exist side by side under
/// distinct factory keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Normal,
    Alternate,
}

/// A handle to one curated data source.
///
/// Bundles an identity string (the memoization key component) with the
/// source tables the registries load from. The defaults are the built-in
/// curated tables; tests and downstream tools can swap any table while
/// keeping the rest.
///
/// # Example
///
/// ```
/// use cldr_plurals::DataSource;
///
/// let source = DataSource::builder()
///     .identity("trimmed")
///     .extra_samples(&[("he,iw", "10,20")])
///     .build();
/// assert_eq!(source.identity(), "trimmed");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct DataSource {
    /// Identity of this data source; part of the factory's singleton key.
    #[builder(default = "baked".to_string())]
    identity: String,

    /// Extra numeric samples per locale alias list.
    #[builder(default = data::EXTRA_SAMPLE_SOURCE)]
    extra_samples: &'static [(&'static str, &'static str)],

    /// Replacement cardinal rule descriptions per locale alias list.
    #[builder(default = data::DEFAULT_OVERRIDE_SOURCE)]
    overrides: &'static [(&'static str, &'static str)],

    /// Cardinal minimal pair rows (locale, category keyword, pattern).
    #[builder(default = data::CARDINAL_PAIR_SOURCE)]
    cardinal_pairs: &'static [(&'static str, &'static str, &'static str)],

    /// Ordinal minimal pair rows (locale, category keyword, pattern).
    #[builder(default = data::ORDINAL_PAIR_SOURCE)]
    ordinal_pairs: &'static [(&'static str, &'static str, &'static str)],
}

impl DataSource {
    /// The built-in curated tables under the default identity.
    pub fn baked() -> Self {
        Self::builder().build()
    }

    /// The identity string of this source.
    pub fn identity(&self) -> &str {
        &self.identity
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::baked()
    }
}

/// Keyed singleton factory for [`PluralRulesInstance`] values.
///
/// # Example
///
/// ```
/// use cldr_plurals::{
///     DataSource, FixedDecimalValue, LocaleId, PluralCategory, PluralRulesFactory, PluralType,
///     Variant,
/// };
///
/// let factory = PluralRulesFactory::new();
/// let source = DataSource::baked();
/// let rules = factory.instance(&source, Variant::Normal);
///
/// let en = LocaleId::parse("en").unwrap();
/// let one = FixedDecimalValue::from(1u64);
/// let category = rules.category_for(&en, PluralType::Cardinal, &one).unwrap();
/// assert_eq!(category, PluralCategory::One);
/// ```
pub struct PluralRulesFactory {
    engine: Arc<dyn PluralRuleEngine>,
    instances: Mutex<HashMap<(Variant, String), Arc<PluralRulesInstance>>>,
}

impl PluralRulesFactory {
    /// A factory over the default baked rule engine.
    pub fn new() -> Self {
        Self::with_engine(Arc::new(BakedRulesEngine::new()))
    }

    /// A factory over a caller-supplied rule engine.
    pub fn with_engine(engine: Arc<dyn PluralRuleEngine>) -> Self {
        Self {
            engine,
            instances: Mutex::new(HashMap::new()),
        }
    }

    /// The memoized instance for (variant, source identity).
    ///
    /// Exactly one instance is constructed per key, even under concurrent
    /// first access; later callers get the same `Arc`. Construction itself
    /// never fails because all data loads are lazy — bad curated data
    /// surfaces from the first data-dependent method instead.
    pub fn instance(&self, source: &DataSource, variant: Variant) -> Arc<PluralRulesInstance> {
        let key = (variant, source.identity.clone());
        let mut instances = self.instances.lock().expect("factory cache lock poisoned");
        if let Some(existing) = instances.get(&key) {
            return Arc::clone(existing);
        }
        let instance = Arc::new(PluralRulesInstance::new(
            Arc::clone(&self.engine),
            source.clone(),
            variant,
        ));
        instances.insert(key, Arc::clone(&instance));
        instance
    }
}

impl Default for PluralRulesFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// A resolver bound to one variant and one data source.
///
/// All registries load lazily on first access and are frozen afterwards;
/// queries for unknown locales return empty or absent results, never
/// errors.
pub struct PluralRulesInstance {
    variant: Variant,
    engine: Arc<dyn PluralRuleEngine>,
    samples: SampleRegistry,
    overrides: OverrideRegistry,
    minimal_pairs: MinimalPairRegistry,
    equivalence: OnceLock<Result<FunctionalEquivalenceResolver, DataError>>,
}

impl PluralRulesInstance {
    fn new(engine: Arc<dyn PluralRuleEngine>, source: DataSource, variant: Variant) -> Self {
        Self {
            variant,
            samples: SampleRegistry::new(source.extra_samples),
            overrides: OverrideRegistry::new(Arc::clone(&engine), source.overrides),
            minimal_pairs: MinimalPairRegistry::new(source.cardinal_pairs, source.ordinal_pairs),
            engine,
            equivalence: OnceLock::new(),
        }
    }

    /// The variant this instance is bound to.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Whether this instance replaces the locale's cardinal rules.
    ///
    /// Always false for the `Normal` variant.
    pub fn has_override(&self, locale: &LocaleId) -> Result<bool, DataError> {
        match self.variant {
            Variant::Normal => Ok(false),
            Variant::Alternate => self.overrides.has_override(locale),
        }
    }

    /// Resolve the rule set for a locale and plural type.
    ///
    /// The `Alternate` variant consults the override registry first for
    /// cardinal lookups; an override fully replaces the default rule set.
    /// Ordinal lookups always use the engine.
    pub fn rules_for(
        &self,
        locale: &LocaleId,
        plural_type: PluralType,
    ) -> Result<Arc<RuleSet>, DataError> {
        if self.variant == Variant::Alternate {
            if let Some(rules) = self.overrides.rules_for(locale, plural_type)? {
                return Ok(rules);
            }
        }
        self.engine.rules_for(locale, plural_type)
    }

    /// The plural category of a sample value under this instance's rules.
    pub fn category_for(
        &self,
        locale: &LocaleId,
        plural_type: PluralType,
        value: &FixedDecimalValue,
    ) -> Result<PluralCategory, DataError> {
        Ok(self.rules_for(locale, plural_type)?.category_for(value))
    }

    /// Locales with rule data, in the engine's enumeration order.
    ///
    /// Both variants delegate to the engine.
    // TODO: include locales that only exist in the override table once the
    // override data grows one; today every override locale is also an
    // engine locale, so the union equals the engine set.
    pub fn available_locales(&self) -> Result<Vec<LocaleId>, DataError> {
        self.engine.available_locales()
    }

    /// The canonical representative of the locale's equivalence group.
    ///
    /// `Normal` delegates to the engine's own grouping. `Alternate` builds
    /// its own (lazily, once), since overridden rule sets are unknown to
    /// the engine.
    pub fn functional_equivalent(&self, locale: &LocaleId) -> Result<Equivalent, DataError> {
        match self.variant {
            Variant::Normal => self.engine.functional_equivalent(locale),
            Variant::Alternate => {
                let resolver = self
                    .equivalence
                    .get_or_init(|| self.build_equivalence())
                    .as_ref()
                    .map_err(DataError::clone)?;
                let rules = self.rules_for(locale, PluralType::Cardinal)?;
                Ok(resolver.resolve(locale, &rules))
            }
        }
    }

    fn build_equivalence(&self) -> Result<FunctionalEquivalenceResolver, DataError> {
        let mut entries = Vec::new();
        for locale in self.engine.available_locales()? {
            let rules = self.rules_for(&locale, PluralType::Cardinal)?;
            entries.push((locale, rules));
        }
        Ok(FunctionalEquivalenceResolver::build(entries))
    }

    /// The categories a locale has minimal pairs for, in canonical order.
    ///
    /// `None` means the locale is entirely unknown to the minimal pair
    /// registry, as opposed to known with no pairs for this plural type.
    pub fn sample_counts(
        &self,
        locale: &LocaleId,
        plural_type: PluralType,
    ) -> Result<Option<Vec<PluralCategory>>, DataError> {
        self.minimal_pairs.categories(locale, plural_type)
    }

    /// The minimal pair template for (locale, type, category).
    ///
    /// Substitutes [`NO_PATTERN`] when the locale or the category has no
    /// pair.
    pub fn sample_pattern(
        &self,
        locale: &LocaleId,
        plural_type: PluralType,
        category: PluralCategory,
    ) -> Result<String, DataError> {
        Ok(self
            .minimal_pairs
            .pattern(locale, plural_type, category)?
            .unwrap_or(NO_PATTERN)
            .to_string())
    }

    /// The full extra-samples mapping, loading it on first call.
    pub fn extra_samples(&self) -> Result<&LocaleSamples, DataError> {
        self.samples.all()
    }

    /// Extra numeric samples for one locale; empty when there are none.
    pub fn extra_samples_for(
        &self,
        locale: &LocaleId,
    ) -> Result<&BTreeSet<FixedDecimalValue>, DataError> {
        self.samples.samples_for(locale)
    }
}
