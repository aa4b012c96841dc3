use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use fingge_runner::RunnerConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    /// `"*"` allows any origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MatchingConfig {
    pub threshold: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct QaConfig {
    /// JSON array of questions. The built-in seed is used when unset.
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
    pub matching: MatchingConfig,
    #[serde(default)]
    pub qa: QaConfig,
    #[serde(default)]
    pub execution: RunnerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
                max_body_bytes: 256 * 1024,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            cors: CorsConfig {
                allowed_origins: vec!["*".to_string()],
            },
            matching: MatchingConfig {
                threshold: fingge_qa::DEFAULT_THRESHOLD,
            },
            qa: QaConfig::default(),
            execution: RunnerConfig::default(),
        }
    }
}

/// One file layer of the configuration.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub required: bool,
}

impl ConfigFile {
    pub fn optional(path: PathBuf) -> Self {
        Self {
            path,
            required: false,
        }
    }

    pub fn required(path: PathBuf) -> Self {
        Self {
            path,
            required: true,
        }
    }
}

/// Environment overrides, e.g. `FINGGE__SERVER__PORT=9000`.
pub fn env_layer() -> Environment {
    Environment::with_prefix("FINGGE")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .with_list_parse_key("execution.args")
        .with_list_parse_key("execution.pass_env")
        .try_parsing(true)
}

impl AppConfig {
    /// Layered load: defaults, then `fingge.toml` in the current directory,
    /// then `<config dir>/fingge/api.toml`, then `explicit_path`, then
    /// `FINGGE__SECTION__KEY` environment variables.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_layers(&Self::default_files(explicit_path), Some(env_layer()))
    }

    /// The config files `load` reads, lowest precedence first.
    pub fn default_files(explicit_path: Option<&Path>) -> Vec<ConfigFile> {
        let mut files = Vec::new();

        if let Ok(current_dir) = env::current_dir() {
            files.push(ConfigFile::optional(current_dir.join("fingge.toml")));
        }

        // ~/.config/fingge/api.toml on Linux
        if let Some(config_dir) = dirs::config_dir() {
            files.push(ConfigFile::optional(config_dir.join("fingge/api.toml")));
        }

        if let Some(path) = explicit_path {
            files.push(ConfigFile::required(path.to_path_buf()));
        }

        files
    }

    /// Defaults overlaid with exactly `files` and, if given, `env`.
    pub fn load_layers(
        files: &[ConfigFile],
        env: Option<Environment>,
    ) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        let mut settings = ConfigBuilder::builder()
            // Set defaults
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", defaults.server.port as i64)?
            .set_default("server.max_body_bytes", defaults.server.max_body_bytes as i64)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("cors.allowed_origins", defaults.cors.allowed_origins)?
            .set_default("matching.threshold", defaults.matching.threshold as i64)?;

        for file in files {
            settings = settings.add_source(File::from(file.path.clone()).required(file.required));
        }

        if let Some(env) = env {
            settings = settings.add_source(env);
        }

        let config: AppConfig = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.matching.threshold == 0 {
            return Err(ConfigError::Message(
                "matching.threshold must be at least 1".to_string(),
            ));
        }
        if self.execution.max_concurrent == 0 {
            return Err(ConfigError::Message(
                "execution.max_concurrent must be at least 1".to_string(),
            ));
        }
        if self.execution.interpreter.trim().is_empty() {
            return Err(ConfigError::Message(
                "execution.interpreter must not be empty".to_string(),
            ));
        }
        if self.server.max_body_bytes == 0 {
            return Err(ConfigError::Message(
                "server.max_body_bytes must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
