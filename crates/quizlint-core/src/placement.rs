//! Referent-option placement rule.
//!
//! A referent option only makes sense after the options it refers to, so it
//! must sit at the end of the list. The last two slots are both accepted:
//! authors commonly append a final "Neither" after a "Both of the above".

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Question;
use crate::patterns::ReferentPatterns;

/// A misplaced referent option, with enough context to locate and fix it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Content file the question came from, relative to the subjects root.
    pub source: String,
    pub collection_id: String,
    pub question_id: String,
    /// The offending option text.
    pub option: String,
    /// Where the option was found.
    pub index: usize,
    /// Total number of options in the question.
    pub option_count: usize,
}

impl Violation {
    /// The latest valid slot (the last option).
    pub fn last_index(&self) -> usize {
        self.option_count.saturating_sub(1)
    }

    /// The earliest valid slot (second-to-last option).
    pub fn second_last_index(&self) -> usize {
        self.option_count.saturating_sub(2)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}/{}: \"{}\" at index {} should be at end (index {} or {}) of {} options",
            self.source,
            self.collection_id,
            self.question_id,
            self.option,
            self.index,
            self.last_index(),
            self.second_last_index(),
            self.option_count,
        )
    }
}

/// Check one question's referent-option placement.
///
/// Returns `None` for non-multiple-choice questions, questions without
/// options, and questions whose first referent option occupies one of the
/// two trailing slots. Only the first referent occurrence is checked.
pub fn validate_referent_placement(
    patterns: &ReferentPatterns,
    question: &Question,
    collection_id: &str,
    source: &str,
) -> Option<Violation> {
    let options = question.options()?;
    if options.is_empty() {
        return None;
    }

    let referent_index = patterns.first_referent_index(options)?;

    let second_last_index = options.len().saturating_sub(2);
    if referent_index >= second_last_index {
        return None;
    }

    Some(Violation {
        source: source.to_string(),
        collection_id: collection_id.to_string(),
        question_id: question.id.clone(),
        option: options[referent_index].clone(),
        index: referent_index,
        option_count: options.len(),
    })
}
