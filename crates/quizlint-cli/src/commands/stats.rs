//! The `quizlint stats` command.

use std::path::PathBuf;

use anyhow::Result;

use quizlint_core::engine::{Validator, ValidatorConfig};

pub fn execute(subjects_dir: PathBuf) -> Result<()> {
    let report = Validator::new(ValidatorConfig::new(subjects_dir)).run()?;

    println!(
        "Quiz statistics: {}/{} multiple choice questions use referent options",
        report.quiz_stats.with_referents, report.quiz_stats.multiple_choice
    );
    println!(
        "Exam statistics: {}/{} multiple choice questions use referent options",
        report.exam_stats.with_referents, report.exam_stats.multiple_choice
    );
    println!(
        "Scanned {} quiz file(s) and {} exam file(s) in {}ms",
        report.quiz_stats.files, report.exam_stats.files, report.duration_ms
    );

    Ok(())
}
