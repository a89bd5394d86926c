//! Helpers for working with CLDR plural categories.

use icu_plurals::PluralCategory;

/// All plural categories in canonical CLDR order.
///
/// The position of a category in this array is its rank; rule set entries
/// and minimal pair tables are kept in this order so that canonical string
/// forms and listings are deterministic.
pub(crate) const CATEGORIES: [PluralCategory; 6] = [
    PluralCategory::Zero,
    PluralCategory::One,
    PluralCategory::Two,
    PluralCategory::Few,
    PluralCategory::Many,
    PluralCategory::Other,
];

/// Canonical position of a category within [`CATEGORIES`].
pub(crate) fn category_rank(category: PluralCategory) -> usize {
    match category {
        PluralCategory::Zero => 0,
        PluralCategory::One => 1,
        PluralCategory::Two => 2,
        PluralCategory::Few => 3,
        PluralCategory::Many => 4,
        PluralCategory::Other => 5,
    }
}

/// Translate a `PluralCategory` to its CLDR keyword.
pub fn category_name(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Parse a CLDR category keyword ("zero", "one", ..., "other").
///
/// Returns `None` for anything outside the closed keyword set.
pub fn category_from_keyword(keyword: &str) -> Option<PluralCategory> {
    PluralCategory::get_for_cldr_bytes(keyword.as_bytes())
}
