//! HTTP layer for the trivia service: feature routers, error envelope
//! and the OpenAPI document, assembled into one `axum` application.

pub mod config;
pub mod error;
pub mod extractors;
pub mod features;

use axum::{
    Json, Router,
    http::{Method, header},
    routing::get,
};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use error::WebError;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::categories::handlers::list_categories,
        features::categories::handlers::list_category_questions,
        features::questions::handlers::list_questions,
        features::questions::handlers::delete_question,
        features::questions::handlers::create_question,
        features::questions::handlers::search_questions,
        features::quizzes::handlers::play_quiz,
    ),
    components(
        schemas(
            storage::models::Category,
            storage::models::Question,
            storage::dto::category::CategoryListResponse,
            storage::dto::question::CreateQuestionRequest,
            storage::dto::question::QuestionListResponse,
            storage::dto::question::DeleteQuestionResponse,
            storage::dto::question::CreateQuestionResponse,
            storage::dto::question::SearchResponse,
            storage::dto::question::CategoryQuestionsResponse,
            storage::dto::quiz::QuizRequest,
            storage::dto::quiz::QuizCategory,
            storage::dto::quiz::QuizResponse,
        )
    ),
    tags(
        (name = "categories", description = "Category listing endpoints"),
        (name = "questions", description = "Question management endpoints"),
        (name = "quizzes", description = "Quiz play endpoints"),
    )
)]
struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Envelope for anything the routers do not match.
async fn not_found() -> WebError {
    WebError::NotFound
}

/// Build the application router with all routes
pub fn app(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(features::categories::routes())
        .merge(features::questions::routes())
        .merge(features::quizzes::routes())
        .route("/api-docs/openapi.json", get(openapi))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(db)
}
