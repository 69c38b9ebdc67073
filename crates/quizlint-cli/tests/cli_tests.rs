//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizlint() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizlint").unwrap()
}

const CLEAN_QUIZZES: &str = r#"[
  {
    "id": "cs101-quiz-1",
    "subjectId": "cs101",
    "topicId": "cs101-topic-1",
    "title": "Variables",
    "questions": [
      {
        "id": "q1",
        "type": "multiple_choice",
        "prompt": "Pick the valid ones",
        "options": ["A", "B", "Both of the above"],
        "correctAnswer": 2,
        "explanation": ""
      }
    ]
  }
]"#;

const MISPLACED_QUIZZES: &str = r#"[
  {
    "id": "cs101-quiz-2",
    "subjectId": "cs101",
    "topicId": "cs101-topic-2",
    "title": "Control Flow",
    "questions": [
      {
        "id": "q7",
        "type": "multiple_choice",
        "prompt": "Pick the valid ones",
        "options": ["Option A", "Both of the above", "Option C", "Option D"],
        "correctAnswer": 1,
        "explanation": ""
      }
    ]
  }
]"#;

fn subjects_with(file_name: &str, content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let subject = dir.path().join("subjects").join("cs101");
    std::fs::create_dir_all(&subject).unwrap();
    std::fs::write(subject.join(file_name), content).unwrap();
    dir
}

#[test]
fn check_clean_corpus_passes() {
    let dir = subjects_with("quizzes.json", CLEAN_QUIZZES);

    quizlint()
        .current_dir(dir.path())
        .arg("check")
        .arg("--subjects-dir")
        .arg("subjects")
        .assert()
        .success()
        .stdout(predicate::str::contains("All content valid"))
        .stdout(predicate::str::contains(
            "Quiz statistics: 1/1 multiple choice questions use referent options",
        ))
        .stderr(predicate::str::contains("PASS"));
}

#[test]
fn check_misplaced_referent_fails_with_location() {
    let dir = subjects_with("quizzes.json", MISPLACED_QUIZZES);

    quizlint()
        .current_dir(dir.path())
        .arg("check")
        .arg("--subjects-dir")
        .arg("subjects")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "cs101/quizzes.json - cs101-quiz-2/q7: \"Both of the above\" at index 1 \
             should be at end (index 3 or 2) of 4 options",
        ));
}

#[test]
fn check_malformed_content_reports_error() {
    let dir = subjects_with("quizzes.json", "[{ broken json");

    quizlint()
        .current_dir(dir.path())
        .arg("check")
        .arg("--subjects-dir")
        .arg("subjects")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("malformed content file"));
}

#[test]
fn check_missing_subjects_dir_passes_empty() {
    let dir = TempDir::new().unwrap();

    quizlint()
        .current_dir(dir.path())
        .arg("check")
        .arg("--subjects-dir")
        .arg("no-such-dir")
        .assert()
        .success()
        .stderr(predicate::str::contains("PASS"));
}

#[test]
fn check_kind_filter_skips_exams() {
    let dir = subjects_with("exams.json", "[{ broken json");

    // Only quizzes are requested, so the broken exams file is never read.
    quizlint()
        .current_dir(dir.path())
        .arg("check")
        .arg("--subjects-dir")
        .arg("subjects")
        .arg("--kind")
        .arg("quizzes")
        .assert()
        .success();
}

#[test]
fn check_unknown_kind_is_rejected() {
    quizlint()
        .arg("check")
        .arg("--kind")
        .arg("projects")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown content kind"));
}

#[test]
fn check_json_format_emits_report() {
    let dir = subjects_with("quizzes.json", CLEAN_QUIZZES);

    quizlint()
        .current_dir(dir.path())
        .arg("check")
        .arg("--subjects-dir")
        .arg("subjects")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"violations\": []"))
        .stdout(predicate::str::contains("\"quiz_stats\""));
}

#[test]
fn check_writes_report_file() {
    let dir = subjects_with("quizzes.json", CLEAN_QUIZZES);

    quizlint()
        .current_dir(dir.path())
        .arg("check")
        .arg("--subjects-dir")
        .arg("subjects")
        .arg("--output")
        .arg("report.json")
        .assert()
        .success();

    assert!(dir.path().join("report.json").exists());
}

#[test]
fn check_fail_on_warnings() {
    let fragile = r#"[
      {
        "id": "cs101-quiz-3",
        "subjectId": "cs101",
        "topicId": "cs101-topic-3",
        "title": "Fragile",
        "questions": [
          {
            "id": "q1",
            "type": "multiple_choice",
            "prompt": "Pick",
            "options": ["fast", "safe", "Both A and C", "cheap"],
            "correctAnswer": 0,
            "explanation": ""
          }
        ]
      }
    ]"#;
    let dir = subjects_with("quizzes.json", fragile);

    quizlint()
        .current_dir(dir.path())
        .arg("check")
        .arg("--subjects-dir")
        .arg("subjects")
        .assert()
        .success();

    quizlint()
        .current_dir(dir.path())
        .arg("check")
        .arg("--subjects-dir")
        .arg("subjects")
        .arg("--fail-on-warnings")
        .assert()
        .failure();
}

#[test]
fn stats_reports_usage() {
    let dir = subjects_with("quizzes.json", CLEAN_QUIZZES);

    quizlint()
        .current_dir(dir.path())
        .arg("stats")
        .arg("--subjects-dir")
        .arg("subjects")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Quiz statistics: 1/1 multiple choice questions use referent options",
        ))
        .stdout(predicate::str::contains(
            "Exam statistics: 0/0 multiple choice questions use referent options",
        ));
}

#[test]
fn init_creates_sample_content() {
    let dir = TempDir::new().unwrap();

    quizlint()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created subjects/demo/quizzes.json"))
        .stdout(predicate::str::contains("Created subjects/demo/exams.json"));

    assert!(dir.path().join("subjects/demo/quizzes.json").exists());
    assert!(dir.path().join("subjects/demo/exams.json").exists());

    // The scaffolded content must itself validate.
    quizlint()
        .current_dir(dir.path())
        .arg("check")
        .arg("--subjects-dir")
        .arg("subjects")
        .assert()
        .success()
        .stderr(predicate::str::contains("PASS"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizlint().current_dir(dir.path()).arg("init").assert().success();

    quizlint()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    quizlint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Educational content integrity checker",
        ));
}

#[test]
fn version_output() {
    quizlint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizlint"));
}
