use const_fnv1a_hash::fnv1a_hash_str_64;
use serde::{Deserialize, Serialize};

/// A compact, serializable identifier for a rule set.
///
/// `RuleSetId` wraps a 64-bit FNV-1a hash of a rule set's canonical string
/// form. Two locales share a `RuleSetId` exactly when their resolved rules
/// serialize to the same text, which is what functional equivalence means,
/// so equivalence reports can carry this 8-byte id instead of the full rule
/// text.
///
/// # Example
///
/// ```
/// use cldr_plurals::RuleSetId;
///
/// let a = RuleSetId::of("one: n = 1");
/// let b = RuleSetId::of("one: n = 1");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct RuleSetId(u64);

impl RuleSetId {
    /// Create a RuleSetId from a canonical rule string.
    pub const fn of(canonical: &str) -> Self {
        Self(fnv1a_hash_str_64(canonical))
    }

    /// Get the raw hash value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RuleSetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
