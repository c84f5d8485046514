//! Destinations a finished submission can be exported to

use super::record::Submission;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while exporting a submission
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize submission: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Trait for export targets, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// Export the submission, returning where it ended up
    fn export(&self, submission: &Submission) -> Result<PathBuf, ExportError>;
}

/// Writes each submission as pretty JSON into a directory
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, submission: &Submission) -> PathBuf {
        self.dir.join(format!("submission-{}.json", submission.id))
    }
}

impl SubmissionSink for JsonFileSink {
    fn export(&self, submission: &Submission) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir).map_err(|source| ExportError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.file_path(submission);
        let content = serde_json::to_string_pretty(submission)?;
        fs::write(&path, content).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
