use axum::{Router, routing::post};
use storage::Database;

use super::handlers::play_quiz;

pub fn routes() -> Router<Database> {
    Router::new().route("/quizzes", post(play_quiz))
}
