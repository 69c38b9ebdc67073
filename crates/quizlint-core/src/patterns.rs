//! Referent-option pattern matching.
//!
//! A "referent option" is an answer choice whose meaning depends on the
//! choices listed before it, e.g. "Both of the above". The recognized forms
//! are a fixed, closed list; matching is anchored to the whole (trimmed)
//! string so that fragments like "Above average" or "Neither true nor
//! false" never match.

use regex::RegexSet;

/// Whole-string, case-insensitive forms that refer back to other options.
const REFERENT_FORMS: &[&str] = &[
    r"(?i)^both\s+of\s+the\s+above$",
    r"(?i)^both\s+of\s+these$",
    r"(?i)^neither\s+of\s+the\s+above$",
    r"(?i)^all\s+of\s+the\s+above$",
    r"(?i)^none\s+of\s+the\s+above$",
    r"(?i)^all\s+of\s+these$",
    r"(?i)^none\s+of\s+these$",
    r"(?i)^both\s+\(?a\)?\s*(?:and|&)\s*\(?b\)?$",
    r"(?i)^both\s+\(?1\)?\s*(?:and|&)\s*\(?2\)?$",
    r"(?i)^both\s+(?:options?\s+)?(?:a\s*(?:and|&)\s*b|1\s*(?:and|&)\s*2)$",
];

/// Compiled referent-option classifier.
///
/// Built once per validation run; the pattern list itself never changes at
/// runtime.
#[derive(Debug, Clone)]
pub struct ReferentPatterns {
    set: RegexSet,
}

impl ReferentPatterns {
    pub fn new() -> Self {
        let set = RegexSet::new(REFERENT_FORMS).expect("referent patterns compile");
        Self { set }
    }

    /// Whether `option` is a referent option. Any string is a valid input;
    /// the empty string is not a referent option.
    pub fn is_referent(&self, option: &str) -> bool {
        self.set.is_match(option.trim())
    }

    /// Index of the first referent option in `options`, if any.
    pub fn first_referent_index(&self, options: &[String]) -> Option<usize> {
        options.iter().position(|o| self.is_referent(o))
    }
}

impl Default for ReferentPatterns {
    fn default() -> Self {
        Self::new()
    }
}
