use actix_web::{get, post, put, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{GenerateQuizParams, RecordAnswersRequest},
};

#[post("/api/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    query: web::Query<GenerateQuizParams>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    params.validate()?;

    if body.is_empty() {
        return Err(AppError::BadRequest(
            "request body must contain a PDF document".to_string(),
        ));
    }

    let response = state
        .quiz_service
        .create_quiz(body.to_vec(), params.questions as usize)
        .await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/quizzes/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[put("/api/quizzes/{id}/answers")]
pub async fn record_answers(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<RecordAnswersRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = state.quiz_service.record_answers(&id, request).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/quizzes/{id}/submit")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let score = state.quiz_service.submit(&id).await?;
    Ok(HttpResponse::Ok().json(score))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
