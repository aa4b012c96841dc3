use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod execution;
pub mod qa;
pub mod typescript_gen;

pub use typescript_gen::generate_typescript_definitions;

pub use execution::{ExecuteRequest, ExecutionKind, ExecutionResult};
pub use qa::{MatchRequest, MatchResponse, MatchResult, QaRecord, QuestionsQuery, QuestionsResponse};

// Shared models for fingge-api and its web front end

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// Size of the loaded Q&A collection.
    pub questions: usize,
    /// Interpreter `/api/execute` runs code with.
    pub interpreter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VersionResponse {
    pub version: String,
    pub service: String,
}
