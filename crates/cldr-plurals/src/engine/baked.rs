//! Baked CLDR plural rule data and the default engine built on it.
//!
//! Rule descriptions are pre-extracted from the Unicode CLDR supplemental
//! data for a subset of common locales, in modern UTS-35 operand syntax.
//! Each row pairs a comma-separated locale alias list with one rule
//! description; rows are compiled lazily, once, through the reference rule
//! parser of `icu_plurals`.
//!
//! Data sourced from: <https://github.com/unicode-org/cldr-json>

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::engine::{PluralRuleEngine, RuleSet, description};
use crate::error::DataError;
use crate::factory::{Equivalent, FunctionalEquivalenceResolver};
use crate::types::{LocaleId, PluralType};

/// Cardinal rule descriptions. Row order is the engine's locale enumeration
/// order, which also decides equivalence-group representatives, so `und`
/// stays first.
static CARDINAL_RULE_SOURCE: &[(&str, &str)] = &[
    ("und,id,ja,km,ko,lo,ms,my,th,vi,yue,zh", ""),
    ("am,as,bn,fa,gu,hi,kn,zu", "one: i = 0 or n = 1"),
    ("ff,fr,hy,kab", "one: i = 0,1"),
    ("ast,de,en,et,fi,gl,it,nl,sv,sw,ur,yi", "one: i = 1 and v = 0"),
    ("si", "one: n = 0,1 or i = 0 and f = 1"),
    ("ak,bho,ln,mg,nso,pa,ti,wa", "one: n = 0..1"),
    ("tzm", "one: n = 0..1 or n = 11..99"),
    (
        "af,az,bg,el,eo,es,eu,fo,gsw,ha,haw,hu,ka,kk,kl,ks,ky,lb,ml,mn,mr,nb,ne,nn,no,om,or,ps,rm,sd,so,sq,ta,te,tk,tr,ug,uz",
        "one: n = 1",
    ),
    ("da", "one: n = 1 or t != 0 and i = 0,1"),
    ("is", "one: t = 0 and i % 10 = 1 and i % 100 != 11 or t != 0"),
    (
        "mk",
        "one: v = 0 and i % 10 = 1 and i % 100 != 11 or f % 10 = 1 and f % 100 != 11",
    ),
    (
        "ceb,fil,tl",
        "one: v = 0 and i = 1,2,3 or v = 0 and i % 10 != 4,6,9 or v != 0 and f % 10 != 4,6,9",
    ),
    ("pt", "one: i = 0..1"),
    ("pt-PT", "one: i = 1 and v = 0"),
    (
        "lv,prg",
        "zero: n % 10 = 0 or n % 100 = 11..19 or v = 2 and f % 100 = 11..19; \
         one: n % 10 = 1 and n % 100 != 11 or v = 2 and f % 10 = 1 and f % 100 != 11 or v != 2 and f % 10 = 1",
    ),
    (
        "lt",
        "one: n % 10 = 1 and n % 100 != 11..19; few: n % 10 = 2..9 and n % 100 != 11..19; many: f != 0",
    ),
    (
        "ru,uk",
        "one: v = 0 and i % 10 = 1 and i % 100 != 11; \
         few: v = 0 and i % 10 = 2..4 and i % 100 != 12..14; \
         many: v = 0 and i % 10 = 0 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 11..14",
    ),
    (
        "be",
        "one: n % 10 = 1 and n % 100 != 11; \
         few: n % 10 = 2..4 and n % 100 != 12..14; \
         many: n % 10 = 0 or n % 10 = 5..9 or n % 100 = 11..14",
    ),
    (
        "pl",
        "one: i = 1 and v = 0; \
         few: v = 0 and i % 10 = 2..4 and i % 100 != 12..14; \
         many: v = 0 and i != 1 and i % 10 = 0..1 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 12..14",
    ),
    ("cs,sk", "one: i = 1 and v = 0; few: i = 2..4 and v = 0; many: v != 0"),
    (
        "bs,hr,sh,sr",
        "one: v = 0 and i % 10 = 1 and i % 100 != 11 or f % 10 = 1 and f % 100 != 11; \
         few: v = 0 and i % 10 = 2..4 and i % 100 != 12..14 or f % 10 = 2..4 and f % 100 != 12..14",
    ),
    (
        "sl",
        "one: v = 0 and i % 100 = 1; two: v = 0 and i % 100 = 2; few: v = 0 and i % 100 = 3..4 or v != 0",
    ),
    (
        "he,iw",
        "one: i = 1 and v = 0; two: i = 2 and v = 0; many: v = 0 and n != 0..10 and n % 10 = 0",
    ),
    (
        "ar,ars",
        "zero: n = 0; one: n = 1; two: n = 2; few: n % 100 = 3..10; many: n % 100 = 11..99",
    ),
    ("cy", "zero: n = 0; one: n = 1; two: n = 2; few: n = 3; many: n = 6"),
    ("ro,mo", "one: i = 1 and v = 0; few: v != 0 or n = 0 or n % 100 = 2..19"),
    ("ga", "one: n = 1; two: n = 2; few: n = 3..6; many: n = 7..10"),
    ("gd", "one: n = 1,11; two: n = 2,12; few: n = 3..10,13..19"),
    (
        "br",
        "one: n % 10 = 1 and n % 100 != 11,71,91; \
         two: n % 10 = 2 and n % 100 != 12,72,92; \
         few: n % 10 = 3..4,9 and n % 100 != 10..19,70..79,90..99; \
         many: n != 0 and n % 1000000 = 0",
    ),
    ("mt", "one: n = 1; few: n = 0 or n % 100 = 2..10; many: n % 100 = 11..19"),
];

/// Ordinal rule descriptions. Locales absent here resolve to the default
/// rule set, like any other unknown locale.
static ORDINAL_RULE_SOURCE: &[(&str, &str)] = &[
    (
        "und,bg,bs,cs,da,de,el,es,et,fi,he,hr,id,is,ja,km,ko,lt,lv,ml,mn,my,nb,nl,pl,pt,ru,sk,sl,sr,th,tr,zh",
        "",
    ),
    (
        "en",
        "one: n % 10 = 1 and n % 100 != 11; two: n % 10 = 2 and n % 100 != 12; few: n % 10 = 3 and n % 100 != 13",
    ),
    ("sv", "one: n % 10 = 1,2 and n % 100 != 11,12"),
    ("fr,ga,hy,lo,mo,ms,ro,vi", "one: n = 1"),
    ("it", "many: n = 11,8,80,800"),
    ("cy", "zero: n = 0,7,8,9; one: n = 1; two: n = 2; few: n = 3,4; many: n = 5,6"),
    ("uk", "few: n % 10 = 3 and n % 100 != 13"),
    ("kk", "many: n % 10 = 6 or n % 10 = 9 or n % 10 = 0 and n != 0"),
    ("ka", "one: i = 1; many: i = 0 or i % 100 = 2..20,40,60,80"),
    ("hu", "one: n = 1,5"),
    ("ne", "one: n = 1..4"),
];

/// Compiled rules for one plural type, keyed by locale.
struct RuleTable {
    /// Locales in source declaration order.
    order: Vec<LocaleId>,
    rules: HashMap<LocaleId, Arc<RuleSet>>,
}

impl RuleTable {
    fn build(rows: &[(&str, &str)]) -> Result<Self, DataError> {
        let mut order = Vec::new();
        let mut rules = HashMap::new();

        for (aliases, description) in rows {
            let mut compiled: Option<Arc<RuleSet>> = None;
            for alias in aliases.split(',') {
                let locale = LocaleId::parse(alias)?;
                if rules.contains_key(&locale) {
                    return Err(DataError::DuplicateLocale { locale });
                }
                let rule_set = match &compiled {
                    Some(rule_set) => Arc::clone(rule_set),
                    None => {
                        let rule_set = Arc::new(
                            description::parse_rule_set(description).map_err(|message| {
                                DataError::RuleParse {
                                    locale: locale.clone(),
                                    rules: (*description).to_string(),
                                    message,
                                }
                            })?,
                        );
                        compiled = Some(Arc::clone(&rule_set));
                        rule_set
                    }
                };
                order.push(locale.clone());
                rules.insert(locale, rule_set);
            }
        }

        Ok(Self { order, rules })
    }
}

/// The default rule engine, backed by the baked tables above.
///
/// Tables are compiled on first use and cached; so is the
/// functional-equivalence grouping over the cardinal table. All caches hold
/// frozen results, so concurrent first access is safe and later reads need
/// no synchronization.
pub struct BakedRulesEngine {
    cardinal: OnceLock<Result<RuleTable, DataError>>,
    ordinal: OnceLock<Result<RuleTable, DataError>>,
    equivalence: OnceLock<Result<FunctionalEquivalenceResolver, DataError>>,
    default_rules: Arc<RuleSet>,
}

impl BakedRulesEngine {
    /// Create an engine over the built-in baked tables.
    pub fn new() -> Self {
        Self {
            cardinal: OnceLock::new(),
            ordinal: OnceLock::new(),
            equivalence: OnceLock::new(),
            default_rules: Arc::new(RuleSet::default()),
        }
    }

    fn table(&self, plural_type: PluralType) -> Result<&RuleTable, DataError> {
        let (cell, rows) = match plural_type {
            PluralType::Cardinal => (&self.cardinal, CARDINAL_RULE_SOURCE),
            PluralType::Ordinal => (&self.ordinal, ORDINAL_RULE_SOURCE),
        };
        cell.get_or_init(|| RuleTable::build(rows))
            .as_ref()
            .map_err(DataError::clone)
    }

    fn equivalence(&self) -> Result<&FunctionalEquivalenceResolver, DataError> {
        self.equivalence
            .get_or_init(|| {
                let table = self.table(PluralType::Cardinal)?;
                let entries = table.order.iter().map(|locale| {
                    let rules = table.rules.get(locale).expect("order and rules agree");
                    (locale.clone(), Arc::clone(rules))
                });
                Ok(FunctionalEquivalenceResolver::build(entries))
            })
            .as_ref()
            .map_err(DataError::clone)
    }
}

impl Default for BakedRulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PluralRuleEngine for BakedRulesEngine {
    fn rules_for(
        &self,
        locale: &LocaleId,
        plural_type: PluralType,
    ) -> Result<Arc<RuleSet>, DataError> {
        let table = self.table(plural_type)?;
        Ok(table
            .rules
            .get(locale)
            .map(Arc::clone)
            .unwrap_or_else(|| Arc::clone(&self.default_rules)))
    }

    fn parse_description(&self, description: &str) -> Result<Arc<RuleSet>, DataError> {
        description::parse_rule_set(description)
            .map(Arc::new)
            .map_err(|message| DataError::RuleParse {
                locale: LocaleId::root(),
                rules: description.to_string(),
                message,
            })
    }

    fn available_locales(&self) -> Result<Vec<LocaleId>, DataError> {
        Ok(self.table(PluralType::Cardinal)?.order.clone())
    }

    fn functional_equivalent(&self, locale: &LocaleId) -> Result<Equivalent, DataError> {
        let rules = self.rules_for(locale, PluralType::Cardinal)?;
        Ok(self.equivalence()?.resolve(locale, &rules))
    }
}
