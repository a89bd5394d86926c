//! Core value types shared across the crate.

mod category;
mod fixed_decimal;
mod locale_id;
mod plural_type;
mod rule_set_id;

pub use category::{category_from_keyword, category_name};
pub(crate) use category::{CATEGORIES, category_rank};
pub use fixed_decimal::FixedDecimalValue;
pub use locale_id::LocaleId;
pub use plural_type::PluralType;
pub use rule_set_id::RuleSetId;
