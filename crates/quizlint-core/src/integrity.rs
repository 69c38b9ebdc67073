//! Structural integrity checks for content collections.
//!
//! These go beyond referent placement: identifier uniqueness, answer/option
//! consistency, and option texts that reference other options by letter
//! ("Both A and C"), which break silently when options are reordered.

use std::collections::HashMap;
use std::fmt;

use regex::RegexSet;
use serde::{Deserialize, Serialize};

use crate::model::{Collection, McAnswer, QuestionBody};

/// Options that name specific other options by letter. Referent forms like
/// "All of the above" do not match these.
const FRAGILE_REFERENCE_FORMS: &[&str] = &[
    r"(?i)^both\s+[a-d]\s+and\s+[a-d]$",
    r"(?i)^[a-d]\s+and\s+[a-d]$",
    r"(?i)^options?\s+[a-d]\s+and\s+[a-d]$",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A structural problem found in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub source: String,
    pub collection_id: String,
    pub question_id: Option<String>,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.question_id {
            Some(qid) => write!(
                f,
                "{} - {}/{}: {}: {}",
                self.source, self.collection_id, qid, self.severity, self.message
            ),
            None => write!(
                f,
                "{} - {}: {}: {}",
                self.source, self.collection_id, self.severity, self.message
            ),
        }
    }
}

/// Runs the per-collection structural checks.
#[derive(Debug, Clone)]
pub struct IntegrityChecker {
    fragile: RegexSet,
}

impl IntegrityChecker {
    pub fn new() -> Self {
        let fragile = RegexSet::new(FRAGILE_REFERENCE_FORMS).expect("fragile patterns compile");
        Self { fragile }
    }

    /// Check one collection; findings are ordered by question.
    pub fn check_collection<C: Collection>(&self, collection: &C, source: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        let collection_id = collection.id();

        let mut seen_question_ids: HashMap<&str, usize> = HashMap::new();
        for (index, question) in collection.questions().iter().enumerate() {
            if let Some(first) = seen_question_ids.get(question.id.as_str()) {
                findings.push(Finding {
                    severity: Severity::Error,
                    source: source.to_string(),
                    collection_id: collection_id.to_string(),
                    question_id: Some(question.id.clone()),
                    message: format!(
                        "duplicate question id (first seen at position {first}, again at {index})"
                    ),
                });
            } else {
                seen_question_ids.insert(&question.id, index);
            }

            if let QuestionBody::MultipleChoice {
                options,
                correct_answer,
            } = &question.body
            {
                findings.extend(self.check_multiple_choice(
                    collection_id,
                    &question.id,
                    options,
                    correct_answer,
                    source,
                ));
            }
        }

        findings
    }

    fn check_multiple_choice(
        &self,
        collection_id: &str,
        question_id: &str,
        options: &[String],
        correct_answer: &McAnswer,
        source: &str,
    ) -> Vec<Finding> {
        let mut findings = Vec::new();
        let finding = |severity: Severity, message: String| Finding {
            severity,
            source: source.to_string(),
            collection_id: collection_id.to_string(),
            question_id: Some(question_id.to_string()),
            message,
        };

        if options.is_empty() {
            findings.push(finding(
                Severity::Error,
                "multiple-choice question has no options".into(),
            ));
            return findings;
        }

        match correct_answer {
            McAnswer::Index(index) => {
                if *index < 0 || *index as usize >= options.len() {
                    findings.push(finding(
                        Severity::Error,
                        format!(
                            "correct answer index {index} is out of bounds for {} options",
                            options.len()
                        ),
                    ));
                }
            }
            McAnswer::Text(text) => {
                if !options.iter().any(|o| o == text) {
                    findings.push(finding(
                        Severity::Error,
                        format!("correct answer \"{text}\" matches none of the options"),
                    ));
                }
            }
        }

        for (index, option) in options.iter().enumerate() {
            if self.fragile.is_match(option.trim()) {
                findings.push(finding(
                    Severity::Warning,
                    format!(
                        "option {index} (\"{option}\") references other options by letter \
                         and breaks if options are reordered"
                    ),
                ));
            }
        }

        findings
    }
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks collection ids across a content domain so duplicates anywhere in
/// the corpus are reported once, at the second occurrence.
#[derive(Debug, Default)]
pub struct IdRegistry {
    seen: HashMap<String, String>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a collection id; returns a finding if it was already seen.
    pub fn register(&mut self, id: &str, source: &str) -> Option<Finding> {
        match self.seen.get(id) {
            Some(first_source) => Some(Finding {
                severity: Severity::Error,
                source: source.to_string(),
                collection_id: id.to_string(),
                question_id: None,
                message: format!("duplicate collection id (first seen in {first_source})"),
            }),
            None => {
                self.seen.insert(id.to_string(), source.to_string());
                None
            }
        }
    }
}
