//! Identifier transformation: affix stripping and case conversion.

use std::collections::BTreeSet;

/// Signature of a casing function.
///
/// Receives the affix-stripped raw name and the abbreviation set.
pub type CaseFn = fn(&str, &Abbreviations) -> String;

/// Segments rendered fully upper-cased (`id` → `ID`).
///
/// Words are stored lower-cased and matched case-insensitively against whole
/// `_`-separated segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abbreviations {
    words: BTreeSet<String>,
}

impl Abbreviations {
    /// Creates an empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            words: BTreeSet::new(),
        }
    }

    /// Adds a word.
    pub fn insert(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        if !word.is_empty() {
            self.words.insert(word);
        }
    }

    /// Adds a word (builder style).
    #[must_use]
    pub fn with(mut self, word: &str) -> Self {
        self.insert(word);
        self
    }

    /// Returns true if `segment` is an abbreviation, ignoring case.
    #[must_use]
    pub fn contains(&self, segment: &str) -> bool {
        self.words.contains(&segment.to_lowercase())
    }

    /// Iterates over the words in lower case.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for Abbreviations {
    fn default() -> Self {
        Self::empty().with("id")
    }
}

impl<'a> Extend<&'a str> for Abbreviations {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

/// A prefix and suffix to strip from raw names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Affix {
    /// Removed from the start, if present.
    pub prefix: String,
    /// Removed from the end, if present.
    pub suffix: String,
}

impl Affix {
    /// Creates an affix pair.
    #[must_use]
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Strips the prefix, then the suffix.
    #[must_use]
    pub fn strip<'a>(&self, raw: &'a str) -> &'a str {
        let raw = raw.strip_prefix(self.prefix.as_str()).unwrap_or(raw);
        raw.strip_suffix(self.suffix.as_str()).unwrap_or(raw)
    }
}

/// Default casing: `snake_case` to `PascalCase` with abbreviation overrides.
///
/// Only the first character of a segment is upper-cased; the rest is kept as
/// is. Empty segments are skipped.
#[must_use]
pub fn pascal_case(raw: &str, abbreviations: &Abbreviations) -> String {
    let mut out = String::with_capacity(raw.len());
    for segment in raw.split('_').filter(|s| !s.is_empty()) {
        if abbreviations.contains(segment) {
            out.push_str(&segment.to_uppercase());
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Turns raw table and column names into identifiers.
#[derive(Debug, Clone, Copy)]
pub struct IdentTransformer<'a> {
    abbreviations: &'a Abbreviations,
    case: CaseFn,
}

impl<'a> IdentTransformer<'a> {
    /// Creates a transformer using [`pascal_case`].
    #[must_use]
    pub fn new(abbreviations: &'a Abbreviations) -> Self {
        Self {
            abbreviations,
            case: pascal_case,
        }
    }

    /// Replaces the casing function.
    #[must_use]
    pub fn with_case(mut self, case: CaseFn) -> Self {
        self.case = case;
        self
    }

    /// Strips the affixes and converts the rest.
    #[must_use]
    pub fn transform(&self, raw: &str, affix: &Affix) -> String {
        (self.case)(affix.strip(raw), self.abbreviations)
    }
}

/// Transforms `raw` with the default abbreviations and casing.
///
/// ```
/// use oxide_ddl_core::transform_identifier;
///
/// assert_eq!(transform_identifier("v_user_id", "v_", ""), "UserID");
/// ```
#[must_use]
pub fn transform_identifier(raw: &str, prefix: &str, suffix: &str) -> String {
    let abbreviations = Abbreviations::default();
    IdentTransformer::new(&abbreviations).transform(raw, &Affix::new(prefix, suffix))
}
