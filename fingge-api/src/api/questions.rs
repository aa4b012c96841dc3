use crate::error::{AppError, AppResult};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use shared_types::{MatchRequest, MatchResponse, QuestionsQuery, QuestionsResponse};
use tracing::info;

pub async fn match_question(
    data: web::Data<AppState>,
    request: web::Json<MatchRequest>,
) -> AppResult<HttpResponse> {
    let req = request.into_inner();

    let question = req.question.trim();
    if question.is_empty() {
        return Err(AppError::InvalidRequest(
            "question must not be empty".to_string(),
        ));
    }

    let threshold = match req.threshold {
        Some(0) => {
            return Err(AppError::InvalidRequest(
                "threshold must be at least 1".to_string(),
            ))
        }
        Some(t) => t,
        None => data.threshold,
    };

    let (keywords, matches) = data.store.match_question(question, threshold);
    info!(
        keywords = ?keywords,
        threshold,
        matches = matches.len(),
        "Matched question"
    );

    Ok(HttpResponse::Ok().json(MatchResponse {
        question: question.to_string(),
        keywords,
        matches,
    }))
}

pub async fn list_questions(
    data: web::Data<AppState>,
    query: web::Query<QuestionsQuery>,
) -> AppResult<HttpResponse> {
    let questions = match query.search.as_deref() {
        Some(term) => data.store.search(term).into_iter().cloned().collect(),
        None => data.store.records().to_vec(),
    };
    Ok(HttpResponse::Ok().json(QuestionsResponse { questions }))
}

pub async fn get_question(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let record = data
        .store
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("question {}", id)))?;
    Ok(HttpResponse::Ok().json(record))
}
