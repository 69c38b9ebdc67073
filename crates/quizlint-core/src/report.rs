//! Validation report types with JSON persistence.
//!
//! A report is the single output of a validation run: every placement
//! violation, every integrity finding, and informational counters. The
//! counters never affect the verdict.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::integrity::{Finding, Severity};
use crate::placement::Violation;

/// Counters for one content kind (quizzes or exams).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindStats {
    /// Content files discovered and loaded.
    pub files: usize,
    /// Collections across those files.
    pub collections: usize,
    /// Multiple-choice questions examined.
    pub multiple_choice: usize,
    /// Of those, questions containing at least one referent option.
    pub with_referents: usize,
}

/// The complete result of one validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Unique run identifier.
    pub id: Uuid,
    /// When the run started.
    pub created_at: DateTime<Utc>,
    /// The subjects root that was validated.
    pub subjects_dir: String,
    /// Misplaced referent options.
    pub violations: Vec<Violation>,
    /// Structural integrity findings.
    pub findings: Vec<Finding>,
    pub quiz_stats: KindStats,
    pub exam_stats: KindStats,
    /// Wall-clock duration of the run in milliseconds.
    pub duration_ms: u64,
}

impl ValidationReport {
    /// Pass iff there are no violations and no error-severity findings.
    /// Warnings and counters are informational.
    pub fn passed(&self) -> bool {
        self.violations.is_empty() && self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    /// One line per violation and finding, in discovery order.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        if !self.violations.is_empty() {
            out.push_str(&format!(
                "Found {} misplaced referent option(s):\n",
                self.violations.len()
            ));
            for violation in &self.violations {
                out.push_str(&format!("  {violation}\n"));
            }
        }

        if !self.findings.is_empty() {
            out.push_str(&format!(
                "Found {} integrity finding(s) ({} error(s), {} warning(s)):\n",
                self.findings.len(),
                self.error_count(),
                self.warning_count()
            ));
            for finding in &self.findings {
                out.push_str(&format!("  {finding}\n"));
            }
        }

        if self.passed() && self.warning_count() == 0 {
            out.push_str("All content valid.\n");
        }

        out.push_str(&format!(
            "Quiz statistics: {}/{} multiple choice questions use referent options\n",
            self.quiz_stats.with_referents, self.quiz_stats.multiple_choice
        ));
        out.push_str(&format!(
            "Exam statistics: {}/{} multiple choice questions use referent options\n",
            self.exam_stats.with_referents, self.exam_stats.multiple_choice
        ));

        out
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ValidationReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
