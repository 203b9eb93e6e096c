use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::category::{CategoryListResponse, category_map},
    dto::question::CategoryQuestionsResponse,
};

use crate::error::WebError;
use crate::extractors::ApiPath;

use super::services;

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Mapping of category ids to types", body = CategoryListResponse),
        (status = 404, description = "No categories exist"),
        (status = 405, description = "Categories could not be loaded")
    ),
    tag = "categories"
)]
pub async fn list_categories(State(db): State<Database>) -> Result<Response, WebError> {
    // This endpoint reports storage failures as 405, a quirk clients
    // already depend on. The cause still reaches the logs.
    let categories = services::list_categories(db.pool())
        .await
        .map_err(WebError::MethodNotAllowed)?;

    let categories = category_map(categories);
    if categories.is_empty() {
        return Err(WebError::NotFound);
    }

    let response = CategoryListResponse {
        success: true,
        status_code: 200,
        total_categories: categories.len() as i64,
        categories,
    };

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    params(
        ("category_id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Questions belonging to the category", body = CategoryQuestionsResponse),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn list_category_questions(
    State(db): State<Database>,
    ApiPath(category_id): ApiPath<i64>,
) -> Result<Response, WebError> {
    let questions = services::list_questions_for_category(db.pool(), category_id).await?;

    let response = CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len() as i64,
        questions,
        current_category: category_id,
    };

    Ok(Json(response).into_response())
}
