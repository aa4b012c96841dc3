/// Infrastructure failures while running code.
///
/// A program that runs and exits nonzero, or that times out, is not an error
/// here; both are reported through `ExecutionResult`.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to create working directory: {0}")]
    WorkDir(#[source] std::io::Error),
    #[error("failed to write source file: {0}")]
    WriteSource(#[source] std::io::Error),
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to collect process output: {0}")]
    Wait(#[source] std::io::Error),
    #[error("output reader task failed: {0}")]
    Reader(#[source] tokio::task::JoinError),
    #[error("runner is shutting down")]
    Closed,
}
