//! The `quizlint init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("subjects/demo")?;

    let quizzes_path = std::path::Path::new("subjects/demo/quizzes.json");
    if quizzes_path.exists() {
        println!("subjects/demo/quizzes.json already exists, skipping.");
    } else {
        std::fs::write(quizzes_path, SAMPLE_QUIZZES)?;
        println!("Created subjects/demo/quizzes.json");
    }

    let exams_path = std::path::Path::new("subjects/demo/exams.json");
    if exams_path.exists() {
        println!("subjects/demo/exams.json already exists, skipping.");
    } else {
        std::fs::write(exams_path, SAMPLE_EXAMS)?;
        println!("Created subjects/demo/exams.json");
    }

    println!("\nNext steps:");
    println!("  1. Add your subject content under subjects/");
    println!("  2. Run: quizlint check --subjects-dir subjects");
    println!("  3. Run: quizlint stats --subjects-dir subjects");

    Ok(())
}

const SAMPLE_QUIZZES: &str = r#"[
  {
    "id": "demo-quiz-1",
    "subjectId": "demo",
    "topicId": "demo-topic-1",
    "title": "Getting Started",
    "questions": [
      {
        "id": "demo-q1",
        "type": "multiple_choice",
        "prompt": "Which statements about referent options are correct?",
        "options": [
          "They refer to other options",
          "They belong at the end of the list",
          "Both of the above"
        ],
        "correctAnswer": 2,
        "explanation": "A referent option only makes sense after the options it refers to."
      },
      {
        "id": "demo-q2",
        "type": "true_false",
        "prompt": "quizlint validates exams as well as quizzes.",
        "correctAnswer": true,
        "explanation": "Both content kinds are checked by default."
      }
    ]
  }
]
"#;

const SAMPLE_EXAMS: &str = r#"[
  {
    "id": "demo-final",
    "subjectId": "demo",
    "title": "Demo Final Exam",
    "durationMinutes": 60,
    "instructions": ["Answer every question"],
    "questions": [
      {
        "id": "demo-final-q1",
        "type": "multiple_choice",
        "prompt": "Where must 'All of the above' appear?",
        "options": [
          "Anywhere",
          "At the beginning",
          "In one of the last two slots"
        ],
        "correctAnswer": "In one of the last two slots",
        "explanation": "The last slot, or second-to-last when a final catch-all follows."
      }
    ]
  }
]
"#;
