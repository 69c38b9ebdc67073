//! quizlint-core — content-integrity validation for quiz and exam data.
//!
//! This crate defines the content data model, the referent-option pattern
//! matcher and placement rule, the corpus walker, and the report types that
//! the quizlint CLI builds on.

pub mod corpus;
pub mod engine;
pub mod integrity;
pub mod model;
pub mod patterns;
pub mod placement;
pub mod report;
