//! CLI command implementations.

mod categories;
mod equivalents;
mod resolve;

pub use categories::{CategoriesArgs, run_categories};
pub use equivalents::{EquivalentsArgs, run_equivalents};
pub use resolve::{ResolveArgs, run_resolve};

use clap::ValueEnum;
use cldr_plurals::{PluralType, Variant};

/// Plural type selection shared by commands.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TypeArg {
    Cardinal,
    Ordinal,
}

impl From<TypeArg> for PluralType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Cardinal => PluralType::Cardinal,
            TypeArg::Ordinal => PluralType::Ordinal,
        }
    }
}

/// Map the `--alternate` flag to a factory variant.
pub fn variant_for(alternate: bool) -> Variant {
    if alternate {
        Variant::Alternate
    } else {
        Variant::Normal
    }
}
