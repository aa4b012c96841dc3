use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExecuteRequest {
    pub code: String,
    /// Wall-clock limit in seconds; the server default applies when absent.
    #[serde(default)]
    #[ts(type = "number | null")]
    pub timeout: Option<u64>,
}

/// How a code execution ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionKind {
    /// The program exited with status 0.
    Completed,
    /// The program ran and exited with a nonzero status.
    Failed,
    /// The program was killed after exceeding its time limit.
    TimedOut,
    /// The program could not be run at all.
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExecutionResult {
    pub success: bool,
    pub output: String,
    pub error: Option<String>,
    pub kind: ExecutionKind,
    pub exit_code: Option<i32>,
    #[ts(type = "number")]
    pub duration_ms: u64,
}

impl ExecutionResult {
    pub fn completed(output: String, duration_ms: u64) -> Self {
        Self {
            success: true,
            output,
            error: None,
            kind: ExecutionKind::Completed,
            exit_code: Some(0),
            duration_ms,
        }
    }

    pub fn failed(output: String, stderr: String, exit_code: Option<i32>, duration_ms: u64) -> Self {
        Self {
            success: false,
            output,
            error: Some(stderr),
            kind: ExecutionKind::Failed,
            exit_code,
            duration_ms,
        }
    }

    pub fn timed_out(timeout_secs: u64, duration_ms: u64) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(format!(
                "Code execution timed out after {} seconds. Possible infinite loop.",
                timeout_secs
            )),
            kind: ExecutionKind::TimedOut,
            exit_code: None,
            duration_ms,
        }
    }

    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(format!("Execution error: {}", message)),
            kind: ExecutionKind::Error,
            exit_code: None,
            duration_ms: 0,
        }
    }
}
