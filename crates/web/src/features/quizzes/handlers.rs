use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::quiz::{QuizRequest, QuizResponse},
};

use crate::error::WebError;
use crate::extractors::ApiJson;

use super::services;

#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "A random unseen question, or null when none remain", body = QuizResponse),
        (status = 400, description = "Malformed request body"),
        (status = 404, description = "Unknown quiz category")
    ),
    tag = "quizzes"
)]
pub async fn play_quiz(
    State(db): State<Database>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<Response, WebError> {
    let (question, total) = services::draw_question(
        db.pool(),
        req.quiz_category.filter(),
        &req.previous_questions,
    )
    .await?;

    let response = QuizResponse {
        success: true,
        question,
        total_questions: total,
    };

    Ok(Json(response).into_response())
}
