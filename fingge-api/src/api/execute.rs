use crate::error::{AppError, AppResult};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use shared_types::ExecuteRequest;

/// Run submitted code. Any valid request gets a 200; whether the program
/// itself worked is reported in the body.
pub async fn execute_code(
    data: web::Data<AppState>,
    request: web::Json<ExecuteRequest>,
) -> AppResult<HttpResponse> {
    let req = request.into_inner();

    if req.code.trim().is_empty() {
        return Err(AppError::InvalidRequest("code must not be empty".to_string()));
    }

    let max_code_bytes = data.runner.config().max_code_bytes;
    if req.code.len() > max_code_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "code is {} bytes, limit is {}",
            req.code.len(),
            max_code_bytes
        )));
    }

    let result = data.runner.run(&req.code, req.timeout).await;
    Ok(HttpResponse::Ok().json(result))
}
