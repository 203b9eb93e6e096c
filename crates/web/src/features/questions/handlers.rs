use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::category::category_map,
    dto::common::PageParams,
    dto::question::{
        CreateQuestionRequest, CreateQuestionResponse, DeleteQuestionResponse,
        QuestionListResponse, SearchParams, SearchResponse,
    },
};
use validator::Validate;

use crate::error::WebError;
use crate::extractors::{ApiJson, ApiPath, ApiQuery};

use super::services;

#[utoipa::path(
    get,
    path = "/questions",
    params(PageParams),
    responses(
        (status = 200, description = "One page of questions with the category mapping", body = QuestionListResponse),
        (status = 400, description = "Invalid page parameter")
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(db): State<Database>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let (questions, total) = services::page_of_questions(db.pool(), &params).await?;
    let categories = category_map(services::list_categories(db.pool()).await?);

    let response = QuestionListResponse {
        success: true,
        questions,
        categories,
        next_page: params
            .next_page(total)
            .map(|page| format!("/questions?page={page}")),
        total_questions: total,
    };

    Ok(Json(response).into_response())
}

#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    params(
        ("question_id" = i64, Path, description = "Question id"),
        PageParams
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 404, description = "Question not found")
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(db): State<Database>,
    ApiPath(question_id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let deleted = services::delete_question(db.pool(), question_id).await?;
    let (current_questions, _) = services::page_of_questions(db.pool(), &params).await?;

    let response = DeleteQuestionResponse {
        success: true,
        deleted_question: deleted.question,
        deleted_question_id: deleted.id,
        current_questions,
    };

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponse),
        (status = 400, description = "Malformed request body"),
        (status = 422, description = "Validation or constraint failure")
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(db): State<Database>,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    let new = req
        .into_parts()
        .ok_or_else(|| WebError::BadRequest("incomplete question payload".to_string()))?;

    let created = services::create_question(db.pool(), &new).await?;
    let (questions, total) = services::page_of_questions(db.pool(), &PageParams::default()).await?;

    let response = CreateQuestionResponse {
        success: true,
        new_question: created.question,
        questions,
        total_questions: total,
    };

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/questions/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Questions whose text contains the term", body = SearchResponse),
        (status = 404, description = "Search term missing")
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(db): State<Database>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<Response, WebError> {
    let term = params.search.ok_or(WebError::NotFound)?;

    let questions = services::search_questions(db.pool(), &term).await?;

    let response = SearchResponse {
        success: true,
        total_searched_items: questions.len() as i64,
        questions,
    };

    Ok(Json(response).into_response())
}
