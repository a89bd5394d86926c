pub mod data;
pub mod engine;
pub mod error;
pub mod factory;
pub mod registry;
pub mod suggest;
pub mod types;

pub use engine::{BakedRulesEngine, PluralRuleEngine, RuleSet};
pub use error::DataError;
pub use factory::{
    DataSource, Equivalent, FunctionalEquivalenceResolver, NO_PATTERN, PluralRulesFactory,
    PluralRulesInstance, Variant,
};
pub use registry::{LocaleSamples, MinimalPairRegistry, OverrideRegistry, SampleRegistry};
pub use types::{FixedDecimalValue, LocaleId, PluralType, RuleSetId, category_name};

// Re-export the category enum of the underlying rule engine; every public
// API in this crate speaks in terms of it.
pub use icu_plurals::PluralCategory;
