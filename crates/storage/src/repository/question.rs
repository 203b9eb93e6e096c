use sqlx::SqlitePool;

use crate::dto::question::NewQuestion;
use crate::error::{Result, StorageError};
use crate::models::Question;

pub struct QuestionRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> QuestionRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all questions ordered by id.
    pub async fn list(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// One id-ordered window of the listing.
    pub async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Find a question by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(question)
    }

    /// Insert a new question. The schema's foreign key rejects a category
    /// that does not exist.
    pub async fn create(&self, new: &NewQuestion) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?, ?, ?, ?)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let wrapped = StorageError::from(e);
            if wrapped.is_foreign_key_violation() {
                StorageError::ConstraintViolation(format!(
                    "category {} does not exist",
                    new.category
                ))
            } else {
                wrapped
            }
        })?;

        Ok(question)
    }

    /// Delete a question by id.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Case-insensitive substring search over question texts, ordered by id.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE LOWER(question) LIKE LOWER(?)
            ORDER BY id
            "#,
        )
        .bind(format!("%{term}%"))
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// All questions belonging to one category, ordered by id.
    pub async fn list_by_category(&self, category_id: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = ?
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    /// Quiz candidates: questions not yet seen, optionally restricted to
    /// one category. The candidate set is materialized in full; datasets
    /// here are small.
    pub async fn list_unseen(
        &self,
        category: Option<i64>,
        previous_ids: &[i64],
    ) -> Result<Vec<Question>> {
        let questions = match category {
            Some(id) => self.list_by_category(id).await?,
            None => self.list().await?,
        };

        Ok(questions
            .into_iter()
            .filter(|q| !previous_ids.contains(&q.id))
            .collect())
    }
}
