pub mod api;
pub mod config;
pub mod error;
pub mod state;

use actix_cors::Cors;
use actix_web::error::JsonPayloadError;
use actix_web::{http::header, web};
use error::AppError;
use state::AppState;

/// Register routes, shared state and body limits.
pub fn configure(cfg: &mut web::ServiceConfig, state: web::Data<AppState>) {
    let json_config = web::JsonConfig::default()
        .limit(state.max_body_bytes)
        .error_handler(|err, _req| {
            let app_error = match &err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    AppError::PayloadTooLarge(err.to_string())
                }
                _ => AppError::InvalidRequest(err.to_string()),
            };
            app_error.into()
        });

    cfg.app_data(state).app_data(json_config).service(
        web::scope("/api")
            .route("/health", web::get().to(api::health::health_check))
            .route("/version", web::get().to(api::health::version_info))
            .route("/match", web::post().to(api::questions::match_question))
            .route("/questions", web::get().to(api::questions::list_questions))
            .route("/questions/{id}", web::get().to(api::questions::get_question))
            .route("/execute", web::post().to(api::execute::execute_code)),
    );
}

/// CORS policy for the browser front end. `"*"` in the origin list allows any origin.
pub fn cors(allowed_origins: &[String]) -> Cors {
    if allowed_origins.iter().any(|o| o == "*") {
        return Cors::permissive();
    }

    allowed_origins.iter().fold(
        Cors::default()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600),
        |cors, origin| cors.allowed_origin(origin),
    )
}
