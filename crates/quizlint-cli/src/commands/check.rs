//! The `quizlint check` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use quizlint_core::corpus::ContentKind;
use quizlint_core::engine::{Validator, ValidatorConfig};
use quizlint_core::report::ValidationReport;

pub fn execute(
    subjects_dir: PathBuf,
    kind: String,
    format: String,
    output: Option<PathBuf>,
    fail_on_warnings: bool,
) -> Result<()> {
    let kinds = parse_kinds(&kind)?;

    let config = ValidatorConfig {
        subjects_dir,
        kinds,
    };
    let report = Validator::new(config).run()?;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            // text format
            print!("{}", report.to_text());
            print_summary(&report);
        }
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    if !report.passed() || (fail_on_warnings && report.warning_count() > 0) {
        std::process::exit(1);
    }

    Ok(())
}

fn parse_kinds(kind: &str) -> Result<Vec<ContentKind>> {
    match kind {
        "quizzes" => Ok(vec![ContentKind::Quizzes]),
        "exams" => Ok(vec![ContentKind::Exams]),
        "all" => Ok(vec![ContentKind::Quizzes, ContentKind::Exams]),
        other => anyhow::bail!("unknown content kind '{other}' (expected quizzes, exams, or all)"),
    }
}

fn print_summary(report: &ValidationReport) {
    let mut table = Table::new();
    table.set_header(vec![
        "Kind",
        "Files",
        "Collections",
        "MC questions",
        "With referents",
    ]);

    for (kind, stats) in [
        ("quizzes", &report.quiz_stats),
        ("exams", &report.exam_stats),
    ] {
        table.add_row(vec![
            kind.to_string(),
            stats.files.to_string(),
            stats.collections.to_string(),
            stats.multiple_choice.to_string(),
            stats.with_referents.to_string(),
        ]);
    }

    eprintln!("\n{table}");
    eprintln!(
        "Verdict: {} ({} violation(s), {} error(s), {} warning(s), {}ms)",
        if report.passed() { "PASS" } else { "FAIL" },
        report.violations.len(),
        report.error_count(),
        report.warning_count(),
        report.duration_ms,
    );
}
