//! Splitting and compiling rule descriptions.
//!
//! A rule description is the `"category: condition; category: condition"`
//! form used by CLDR supplemental data and by the override tables. The
//! splitting on `;` and `:` happens here; the condition grammar itself is
//! parsed and serialized by `icu_plurals`' reference rule parser.

use icu_plurals::provider::rules::reference;

use crate::engine::{RuleEntry, RuleSet};
use crate::types::{category_from_keyword, category_name, category_rank};

/// Compile a rule description into a [`RuleSet`].
///
/// An empty (or all-whitespace) description compiles to the default rule
/// set. Errors carry a message only; callers attach the locale and the raw
/// text.
pub(crate) fn parse_rule_set(description: &str) -> Result<RuleSet, String> {
    let mut entries: Vec<RuleEntry> = Vec::new();

    for part in description.split(';') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let Some((keyword, condition)) = part.split_once(':') else {
            return Err(format!("missing ':' after category keyword in '{part}'"));
        };

        let keyword = keyword.trim();
        let Some(category) = category_from_keyword(keyword) else {
            return Err(format!("unknown plural category keyword '{keyword}'"));
        };

        if entries.iter().any(|entry| entry.category == category) {
            return Err(format!("category '{keyword}' specified twice"));
        }

        let rule = reference::parse(condition.trim().as_bytes())
            .map_err(|e| format!("bad condition for '{keyword}': {e:?}"))?;

        entries.push(RuleEntry { category, rule });
    }

    Ok(RuleSet::from_entries(entries))
}

/// Serialize entries into the canonical `"one: ...; few: ..."` form.
///
/// Entries must already be in canonical category order; this is what makes
/// textually-identical rule definitions compare equal regardless of the
/// order their source wrote them in.
pub(crate) fn canonical_form(entries: &[RuleEntry]) -> String {
    debug_assert!(
        entries
            .windows(2)
            .all(|pair| category_rank(pair[0].category) <= category_rank(pair[1].category))
    );

    let mut out = String::new();
    for entry in entries {
        if !out.is_empty() {
            out.push_str("; ");
        }
        out.push_str(category_name(entry.category));
        out.push_str(": ");
        reference::serialize(&entry.rule, &mut out).expect("writing to a String cannot fail");
    }
    out
}
