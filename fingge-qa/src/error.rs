use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum QaError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate question id: {0}")]
    DuplicateId(i64),
    #[error("Question {0} has no keywords")]
    NoKeywords(i64),
}
