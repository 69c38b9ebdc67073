//! Content corpus discovery and loading.
//!
//! Walks a subjects tree for content files of a given kind and parses each
//! one as a JSON array of collections. A file that fails to read or parse
//! is fatal for the whole run; corrupted content must never be skipped.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Exam, Quiz};

/// The two content domains the validator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Quizzes,
    Exams,
}

impl ContentKind {
    /// The exact file name content files of this kind carry.
    pub fn file_name(self) -> &'static str {
        match self {
            ContentKind::Quizzes => "quizzes.json",
            ContentKind::Exams => "exams.json",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Quizzes => write!(f, "quizzes"),
            ContentKind::Exams => write!(f, "exams"),
        }
    }
}

/// Fatal errors while loading content files.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed content file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Recursively find every file named exactly `file_name` under `root`.
///
/// A missing root yields an empty list. Order follows filesystem
/// enumeration and is not guaranteed sorted.
pub fn find_content_files(root: &Path, file_name: &str) -> Vec<PathBuf> {
    let mut found = Vec::new();
    collect(root, file_name, &mut found);
    found
}

fn collect(dir: &Path, file_name: &str, out: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("skipping unreadable directory {}: {e}", dir.display());
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, file_name, out);
        } else if path.file_name().is_some_and(|name| name == file_name) {
            out.push(path);
        }
    }
}

/// Parse a content file as a JSON array of collection records.
pub fn load_collections<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CorpusError> {
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CorpusError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_quizzes(path: &Path) -> Result<Vec<Quiz>, CorpusError> {
    load_collections(path)
}

pub fn load_exams(path: &Path) -> Result<Vec<Exam>, CorpusError> {
    load_collections(path)
}

/// Human-readable location of a content file, relative to the subjects root
/// where possible.
pub fn source_label(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
