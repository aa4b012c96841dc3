use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How submitted code is run.
///
/// The interpreter is invoked as `<interpreter> <args...> <script>` with the
/// script written to `main.<file_extension>` in a fresh temp directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub interpreter: String,
    pub args: Vec<String>,
    pub file_extension: String,
    pub default_timeout_secs: u64,
    pub max_timeout_secs: u64,
    /// Submitted code larger than this is rejected before it reaches the runner.
    pub max_code_bytes: usize,
    /// Per stream; anything beyond is dropped and a marker appended.
    pub max_output_bytes: usize,
    pub max_concurrent: usize,
    /// Environment variables copied from the server into the child, besides PATH.
    pub pass_env: Vec<String>,
    /// Parent directory for per-run temp directories. System temp dir when unset.
    pub work_dir: Option<PathBuf>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            args: vec!["-I".to_string(), "-u".to_string()],
            file_extension: "py".to_string(),
            default_timeout_secs: 10,
            max_timeout_secs: 30,
            max_code_bytes: 64 * 1024,
            max_output_bytes: 1024 * 1024,
            max_concurrent: 4,
            pass_env: Vec::new(),
            work_dir: None,
        }
    }
}

impl RunnerConfig {
    /// Resolve the timeout for one run: the requested value or the default,
    /// clamped to `1..=max_timeout_secs`.
    pub fn effective_timeout(&self, requested: Option<u64>) -> u64 {
        let max = self.max_timeout_secs.max(1);
        requested
            .unwrap_or(self.default_timeout_secs)
            .clamp(1, max)
    }
}
