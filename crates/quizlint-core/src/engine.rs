//! Validation run orchestrator.
//!
//! One synchronous pass: discover content files per kind, load them (parse
//! failures are fatal), run every question through the placement and
//! integrity checks, and fold everything into a single report.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use uuid::Uuid;

use crate::corpus::{self, ContentKind};
use crate::integrity::{Finding, IdRegistry, IntegrityChecker};
use crate::model::Collection;
use crate::patterns::ReferentPatterns;
use crate::placement::{validate_referent_placement, Violation};
use crate::report::{KindStats, ValidationReport};

/// Configuration for a validation run.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Root of the subjects content tree.
    pub subjects_dir: PathBuf,
    /// Which content kinds to validate.
    pub kinds: Vec<ContentKind>,
}

impl ValidatorConfig {
    /// Validate both quizzes and exams under `subjects_dir`.
    pub fn new(subjects_dir: impl Into<PathBuf>) -> Self {
        Self {
            subjects_dir: subjects_dir.into(),
            kinds: vec![ContentKind::Quizzes, ContentKind::Exams],
        }
    }
}

/// The content validator.
pub struct Validator {
    patterns: ReferentPatterns,
    integrity: IntegrityChecker,
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            patterns: ReferentPatterns::new(),
            integrity: IntegrityChecker::new(),
            config,
        }
    }

    /// Run the full validation pass.
    ///
    /// Rule violations and findings are collected so one run reports every
    /// problem; unreadable or malformed content files abort immediately.
    pub fn run(&self) -> Result<ValidationReport> {
        let start = Instant::now();
        let root = &self.config.subjects_dir;

        let mut violations = Vec::new();
        let mut findings = Vec::new();
        let mut quiz_stats = KindStats::default();
        let mut exam_stats = KindStats::default();

        for &kind in &self.config.kinds {
            let files = corpus::find_content_files(root, kind.file_name());
            tracing::debug!("found {} {kind} file(s) under {}", files.len(), root.display());

            // Collection ids must be unique within their content domain.
            let mut registry = IdRegistry::new();
            let stats = match kind {
                ContentKind::Quizzes => &mut quiz_stats,
                ContentKind::Exams => &mut exam_stats,
            };

            for path in &files {
                let source = corpus::source_label(root, path);
                match kind {
                    ContentKind::Quizzes => {
                        for quiz in corpus::load_quizzes(path)? {
                            self.process_collection(
                                &quiz,
                                &source,
                                stats,
                                &mut registry,
                                &mut violations,
                                &mut findings,
                            );
                        }
                    }
                    ContentKind::Exams => {
                        for exam in corpus::load_exams(path)? {
                            self.process_collection(
                                &exam,
                                &source,
                                stats,
                                &mut registry,
                                &mut violations,
                                &mut findings,
                            );
                        }
                    }
                }
                stats.files += 1;
            }
        }

        Ok(ValidationReport {
            id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            subjects_dir: root.display().to_string(),
            violations,
            findings,
            quiz_stats,
            exam_stats,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn process_collection<C: Collection>(
        &self,
        collection: &C,
        source: &str,
        stats: &mut KindStats,
        registry: &mut IdRegistry,
        violations: &mut Vec<Violation>,
        findings: &mut Vec<Finding>,
    ) {
        stats.collections += 1;

        if let Some(duplicate) = registry.register(collection.id(), source) {
            findings.push(duplicate);
        }
        findings.extend(self.integrity.check_collection(collection, source));

        for question in collection.questions() {
            if let Some(options) = question.options() {
                stats.multiple_choice += 1;
                if self.patterns.first_referent_index(options).is_some() {
                    stats.with_referents += 1;
                }
            }

            if let Some(violation) =
                validate_referent_placement(&self.patterns, question, collection.id(), source)
            {
                violations.push(violation);
            }
        }
    }
}
