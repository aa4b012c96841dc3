use actix_web::{test, web, App};
use fingge_api::config::AppConfig;
use fingge_api::state::AppState;
use fingge_qa::QaStore;

pub fn python_available() -> bool {
    std::process::Command::new("python3")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Config that runs submitted code with `sh` so tests don't need Python.
pub fn sh_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.execution.interpreter = "sh".to_string();
    config.execution.args = Vec::new();
    config.execution.file_extension = "sh".to_string();
    config
}

pub async fn setup_test_app(
    config: AppConfig,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let state = web::Data::new(AppState::new(QaStore::seed(), &config));
    test::init_service(
        App::new().configure(|cfg| fingge_api::configure(cfg, state.clone())),
    )
    .await
}
