use sqlx::SqlitePool;
use storage::{
    error::{Result, StorageError},
    models::{Category, Question},
    repository::category::CategoryRepository,
    repository::question::QuestionRepository,
};

/// List all categories
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<Category>> {
    let repo = CategoryRepository::new(pool);
    repo.list().await
}

/// List the questions of one category, which must exist
pub async fn list_questions_for_category(
    pool: &SqlitePool,
    category_id: i64,
) -> Result<Vec<Question>> {
    let categories = CategoryRepository::new(pool);
    if !categories.exists(category_id).await? {
        return Err(StorageError::NotFound);
    }

    let repo = QuestionRepository::new(pool);
    repo.list_by_category(category_id).await
}
