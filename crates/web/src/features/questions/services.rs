use sqlx::SqlitePool;
use storage::{
    dto::common::PageParams,
    dto::question::NewQuestion,
    error::{Result, StorageError},
    models::{Category, Question},
    repository::category::CategoryRepository,
    repository::question::QuestionRepository,
};

/// One page of the id-ordered listing plus the overall count
pub async fn page_of_questions(
    pool: &SqlitePool,
    params: &PageParams,
) -> Result<(Vec<Question>, i64)> {
    let repo = QuestionRepository::new(pool);
    let questions = repo.list_page(params.limit(), params.offset()).await?;
    let total = repo.count().await?;

    Ok((questions, total))
}

/// List all categories
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<Category>> {
    let repo = CategoryRepository::new(pool);
    repo.list().await
}

/// Delete a question, returning the removed row
pub async fn delete_question(pool: &SqlitePool, id: i64) -> Result<Question> {
    let repo = QuestionRepository::new(pool);
    let question = repo.find_by_id(id).await?;
    repo.delete(id).await?;

    Ok(question)
}

/// Insert a question after checking its category exists. The check gives
/// a clear message; the schema's foreign key backs it up.
pub async fn create_question(pool: &SqlitePool, new: &NewQuestion) -> Result<Question> {
    let categories = CategoryRepository::new(pool);
    if !categories.exists(new.category).await? {
        return Err(StorageError::ConstraintViolation(format!(
            "category {} does not exist",
            new.category
        )));
    }

    let repo = QuestionRepository::new(pool);
    repo.create(new).await
}

/// Case-insensitive substring search over question texts
pub async fn search_questions(pool: &SqlitePool, term: &str) -> Result<Vec<Question>> {
    let repo = QuestionRepository::new(pool);
    repo.search(term).await
}
