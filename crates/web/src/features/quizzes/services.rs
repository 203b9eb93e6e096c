use rand::seq::SliceRandom;
use sqlx::SqlitePool;
use storage::{
    error::{Result, StorageError},
    models::Question,
    repository::category::CategoryRepository,
    repository::question::QuestionRepository,
};

/// Draw one uniformly random unseen question, reporting how many
/// candidates the draw was made from. A named category must exist.
pub async fn draw_question(
    pool: &SqlitePool,
    category: Option<i64>,
    previous: &[i64],
) -> Result<(Option<Question>, i64)> {
    if let Some(id) = category {
        let categories = CategoryRepository::new(pool);
        if !categories.exists(id).await? {
            return Err(StorageError::NotFound);
        }
    }

    let repo = QuestionRepository::new(pool);
    let candidates = repo.list_unseen(category, previous).await?;

    let total = candidates.len() as i64;
    let question = candidates.choose(&mut rand::thread_rng()).cloned();

    Ok((question, total))
}
