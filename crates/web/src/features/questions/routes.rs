use axum::{
    Router,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{create_question, delete_question, list_questions, search_questions};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/questions", get(list_questions))
        .route("/questions", post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/:question_id", delete(delete_question))
}
