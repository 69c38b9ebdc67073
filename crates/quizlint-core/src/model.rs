//! Core data model types for quizlint.
//!
//! These mirror the content schema of the learning platform: quizzes and
//! exams are ordered collections of questions, and each question's answer
//! shape is determined by its `type` discriminator.

use serde::{Deserialize, Serialize};

/// A single assessable item within a quiz or exam.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the owning collection.
    pub id: String,
    /// Type-discriminated payload (options, answer, snippets).
    #[serde(flatten)]
    pub body: QuestionBody,
    /// The question text shown to the learner.
    pub prompt: String,
    /// Explanation shown after answering.
    #[serde(default)]
    pub explanation: String,
}

/// The type-specific part of a question.
///
/// The `type` field in content JSON selects the variant, and each variant
/// carries the answer shape that type requires. `multiple_choice` is the
/// only variant with an options list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum QuestionBody {
    MultipleChoice {
        #[serde(default)]
        options: Vec<String>,
        correct_answer: McAnswer,
    },
    TrueFalse {
        correct_answer: bool,
    },
    FillBlank {
        correct_answer: String,
    },
    CodeOutput {
        correct_answer: String,
        #[serde(default)]
        code_snippet: Option<String>,
    },
    Coding {
        #[serde(default)]
        correct_answer: Option<String>,
    },
    Written {
        #[serde(default)]
        correct_answer: Option<String>,
    },
}

/// A multiple-choice answer: either an index into the options list or the
/// exact text of the correct option. Content authors use both forms.
///
/// The index is signed so that out-of-range values (including negatives)
/// survive deserialization and can be reported by the integrity checks
/// instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum McAnswer {
    Index(i64),
    Text(String),
}

impl Question {
    /// The options list, if this is a multiple-choice question.
    pub fn options(&self) -> Option<&[String]> {
        match &self.body {
            QuestionBody::MultipleChoice { options, .. } => Some(options),
            _ => None,
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        matches!(self.body, QuestionBody::MultipleChoice { .. })
    }

    /// The wire name of this question's type.
    pub fn type_name(&self) -> &'static str {
        match self.body {
            QuestionBody::MultipleChoice { .. } => "multiple_choice",
            QuestionBody::TrueFalse { .. } => "true_false",
            QuestionBody::FillBlank { .. } => "fill_blank",
            QuestionBody::CodeOutput { .. } => "code_output",
            QuestionBody::Coding { .. } => "coding",
            QuestionBody::Written { .. } => "written",
        }
    }
}

/// A quiz: a topic-scoped collection of questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub subject_id: String,
    pub topic_id: String,
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// An exam: a subject-scoped collection of questions, optionally tied to a
/// single topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: String,
    pub subject_id: String,
    #[serde(default)]
    pub topic_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Uniform access to a named group of questions, so validation logic is
/// written once for quizzes and exams.
pub trait Collection {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn questions(&self) -> &[Question];
}

impl Collection for Quiz {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl Collection for Exam {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn questions(&self) -> &[Question] {
        &self.questions
    }
}
