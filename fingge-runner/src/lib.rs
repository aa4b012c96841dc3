pub mod config;
pub mod error;
pub mod runner;

pub use config::RunnerConfig;
pub use error::RunError;
pub use runner::CodeRunner;
