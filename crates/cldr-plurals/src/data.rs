//! Built-in curated source tables.
//!
//! Every table uses the same row shape: a comma-separated locale alias list
//! paired with a payload. Alias lists exist because some languages live
//! under two codes historically ("he" and "iw" are the same language); the
//! loaders expand each alias into its own entry and reject duplicates.

/// Extra numeric samples per locale group.
///
/// Values are written-form decimal literals; "1.0" and "1" are distinct
/// samples because the rule grammar can test visible fraction digits.
pub static EXTRA_SAMPLE_SOURCE: &[(&str, &str)] = &[
    ("he,iw", "10,20"),
    (
        "und,az,ka,kk,ky,mk,mn,my,pa,sq,uz",
        "0,0.0,0.1,1,1.0,1.1,2.0,2.1,3,4,5,10,11,1.2,1.121",
    ),
];

/// Replacement cardinal rule descriptions, used by the `Alternate` variant.
///
/// Ported from the historical override proposals; kept in modern UTS-35
/// operand syntax. These fully replace a locale's default cardinal rules.
pub static DEFAULT_OVERRIDE_SOURCE: &[(&str, &str)] = &[
    ("gu,mr,kn,am,fa", "one: i = 0 or n = 1"),
    ("ta,te,uz,ky,hu,az,ka,mn,tr", "one: n = 1"),
    ("bn", "one: i = 0 or n = 1"),
    ("kk", "one: n = 1"),
    ("en,ca,de,et,fi,gl,it,nl,sw,ur", "one: i = 1 and v = 0"),
    ("sv", "one: i = 1 and v = 0 or f = 1"),
    ("pt", "one: n = 1 or f = 1"),
    ("si", "one: n = 0,1 or i = 0 and f = 1"),
    (
        "cs,sk",
        "one: i = 1 and v = 0; few: i = 2..4 and v = 0; many: v != 0",
    ),
    ("da", "one: i = 1 and v = 0 or f = 1"),
    (
        "is",
        "one: i % 10 = 1 and i % 100 != 11 and v = 0 or f % 10 = 1 and f % 100 != 11",
    ),
    ("fil,tl", "one: i = 0,1 and v = 0"),
    (
        "he,iw",
        "one: i = 1 and v = 0; two: i = 2 and v = 0; many: v = 0 and i != 0..10 and i % 10 = 0",
    ),
    ("hi", "one: i = 0 or n = 1"),
    ("hy", "one: i = 0,1"),
    (
        "lv",
        "zero: n % 10 = 0 or n % 100 = 11..19 or v = 2 and f % 100 = 11..19; \
         one: n % 10 = 1 and n % 100 != 11 or v = 2 and f % 10 = 1 and f % 100 != 11 or v != 2 and f % 10 = 1",
    ),
];

/// Cardinal minimal pair templates: (locale, category keyword, pattern).
///
/// `und` carries ADD-SAMPLE markers so tooling over unlisted locales still
/// renders something that is obviously placeholder text.
pub static CARDINAL_PAIR_SOURCE: &[(&str, &str, &str)] = &[
    ("und", "zero", "{0} ADD-SAMPLE-ZERO"),
    ("und", "one", "{0} ADD-SAMPLE-ONE"),
    ("und", "two", "{0} ADD-SAMPLE-TWO"),
    ("und", "few", "{0} ADD-SAMPLE-FEW"),
    ("und", "many", "{0} ADD-SAMPLE-MANY"),
    ("und", "other", "{0} ADD-SAMPLE-OTHER"),
    ("en", "one", "{0} day"),
    ("en", "other", "{0} days"),
    ("de", "one", "{0} Tag"),
    ("de", "other", "{0} Tage"),
    ("fr", "one", "{0} jour"),
    ("fr", "other", "{0} jours"),
    ("da", "one", "{0} dag"),
    ("da", "other", "{0} dage"),
    ("es", "one", "{0} día"),
    ("es", "other", "{0} días"),
    ("ru", "one", "из {0} книги за {0} день"),
    ("ru", "few", "из {0} книг за {0} дня"),
    ("ru", "many", "из {0} книг за {0} дней"),
    ("ru", "other", "из {0} книги за {0} дня"),
    ("cs", "one", "{0} den"),
    ("cs", "few", "{0} dny"),
    ("cs", "many", "{0} dne"),
    ("cs", "other", "{0} dní"),
    ("pl", "one", "{0} miesiąc"),
    ("pl", "few", "{0} miesiące"),
    ("pl", "many", "{0} miesięcy"),
    ("pl", "other", "{0} miesiąca"),
    ("he", "one", "שנה"),
    ("he", "two", "שנתיים"),
    ("he", "many", "{0} שנה"),
    ("he", "other", "{0} שנים"),
    ("ar", "zero", "{0} كتاب"),
    ("ar", "one", "ولد واحد حضر"),
    ("ar", "two", "ولدان حضرا"),
    ("ar", "few", "{0} أولاد حضروا"),
    ("ar", "many", "{0} ولدًا حضروا"),
    ("ar", "other", "{0} ولد حضروا"),
    ("lv", "zero", "{0} diennakšu"),
    ("lv", "one", "{0} diennakts"),
    ("lv", "other", "{0} diennaktis"),
    ("cy", "zero", "{0} cŵn, {0} cathod"),
    ("cy", "one", "{0} ci, {0} gath"),
    ("cy", "two", "{0} gi, {0} gath"),
    ("cy", "few", "{0} chi, {0} cath"),
    ("cy", "many", "{0} chi, {0} chath"),
    ("cy", "other", "{0} ci, {0} cath"),
    ("ja", "other", "{0}日"),
];

/// Ordinal minimal pair templates: (locale, category keyword, pattern).
pub static ORDINAL_PAIR_SOURCE: &[(&str, &str, &str)] = &[
    ("und", "other", "{0} ADD-SAMPLE-OTHER"),
    ("en", "one", "Take the {0}st right."),
    ("en", "two", "Take the {0}nd right."),
    ("en", "few", "Take the {0}rd right."),
    ("en", "other", "Take the {0}th right."),
    ("fr", "one", "Prenez la {0}re à droite."),
    ("fr", "other", "Prenez la {0}e à droite."),
    ("it", "many", "Prendi l'{0}° a destra."),
    ("it", "other", "Prendi la {0}° a destra."),
    ("sv", "one", "Ta {0}:a svängen till höger."),
    ("sv", "other", "Ta {0}:e svängen till höger."),
];
