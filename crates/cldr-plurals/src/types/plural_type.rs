//! The two plural-type axes: cardinal and ordinal.

use std::fmt;

use serde::Serialize;

/// Which kind of plural selection a rule set describes.
///
/// Cardinal counts quantity ("1 day"), ordinal counts position ("1st day").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PluralType {
    Cardinal,
    Ordinal,
}

impl PluralType {
    /// The CLDR name of this plural type.
    pub fn name(self) -> &'static str {
        match self {
            PluralType::Cardinal => "cardinal",
            PluralType::Ordinal => "ordinal",
        }
    }
}

impl fmt::Display for PluralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
