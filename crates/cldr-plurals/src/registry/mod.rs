//! Lazily-loaded registries over curated source tables.
//!
//! Each registry is built at most once, on first query, from its static
//! source rows (check-lock-check via `OnceLock`), and is frozen afterwards.
//! Load failures are cached and handed to every subsequent caller; bad
//! curated data never half-loads.

mod minimal_pairs;
mod overrides;
mod samples;

pub use minimal_pairs::MinimalPairRegistry;
pub use overrides::OverrideRegistry;
pub use samples::{LocaleSamples, SampleRegistry};
