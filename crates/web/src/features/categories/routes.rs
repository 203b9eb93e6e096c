use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{list_categories, list_category_questions};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/categories", get(list_categories))
        .route(
            "/categories/:category_id/questions",
            get(list_category_questions),
        )
}
