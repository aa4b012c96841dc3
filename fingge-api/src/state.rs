use crate::config::AppConfig;
use crate::error::AppResult;
use fingge_qa::QaStore;
use fingge_runner::CodeRunner;
use std::sync::Arc;
use tracing::info;

/// Shared, read-only request context.
pub struct AppState {
    pub store: Arc<QaStore>,
    pub runner: CodeRunner,
    pub threshold: usize,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(store: QaStore, config: &AppConfig) -> Self {
        Self {
            store: Arc::new(store),
            runner: CodeRunner::new(config.execution.clone()),
            threshold: config.matching.threshold,
            max_body_bytes: config.server.max_body_bytes,
        }
    }

    /// Build the state from configuration, loading the seed file if one is set.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let store = match &config.qa.seed_file {
            Some(path) => QaStore::load_from_file(path)?,
            None => {
                info!("No seed file configured, using built-in questions");
                QaStore::seed()
            }
        };
        Ok(Self::new(store, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::io::Write;

    #[test]
    fn test_builtin_seed_when_no_file() {
        let state = AppState::from_config(&AppConfig::default()).unwrap();
        assert_eq!(state.store.len(), 2);
        assert_eq!(state.threshold, 2);
    }

    #[test]
    fn test_seed_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 10, "question": "How to install Python packages using pip?",
                 "answer": "Run pip install <name>.",
                 "keywords": ["pip", "install", "package", "python", "command"],
                 "date": "2023-09-30"}}]"#
        )
        .unwrap();

        let mut config = AppConfig::default();
        config.qa.seed_file = Some(file.path().to_path_buf());

        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.store.len(), 1);
        assert!(state.store.get(10).is_some());
    }

    #[test]
    fn test_bad_seed_file_fails() {
        let mut config = AppConfig::default();
        config.qa.seed_file = Some("/nonexistent/fingge/questions.json".into());

        let result = AppState::from_config(&config);
        assert!(matches!(result, Err(AppError::Store(_))));
    }
}
