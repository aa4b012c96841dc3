use crate::state::AppState;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use shared_types::{HealthResponse, VersionResponse};

/// Liveness plus a summary of what this instance serves.
pub async fn health_check(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        questions: data.store.len(),
        interpreter: data.runner.config().interpreter.clone(),
    })
}

pub async fn version_info() -> HttpResponse {
    HttpResponse::Ok().json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
    })
}
