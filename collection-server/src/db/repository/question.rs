//! Question Repository

use super::{Collection, RepoError, RepoResult, contains_folded};
use shared::models::{NewQuestion, Question, QuestionFilter};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, question, answer, category, difficulty";

#[derive(Clone)]
pub struct QuestionRepository {
    pool: SqlitePool,
}

impl QuestionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(&format!(
            "SELECT {COLUMNS} FROM question WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(question)
    }

    pub async fn create(&self, data: &NewQuestion) -> RepoResult<Question> {
        let mut tx = self.pool.begin().await?;
        let question = sqlx::query_as::<_, Question>(&format!(
            "INSERT INTO question (question, answer, category, difficulty) VALUES (?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(&data.question)
        .bind(&data.answer)
        .bind(data.category)
        .bind(data.difficulty)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(question)
    }

    pub async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM question WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Question {id} not found")));
        }
        tx.commit().await?;
        Ok(())
    }
}

impl Collection for QuestionRepository {
    type Record = Question;
    type Filter = QuestionFilter;

    const RESOURCE: &'static str = "question";

    async fn find_all(&self) -> RepoResult<Vec<Question>> {
        let questions =
            sqlx::query_as::<_, Question>(&format!("SELECT {COLUMNS} FROM question ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;
        Ok(questions)
    }

    async fn find_by_filter(&self, filter: &QuestionFilter) -> RepoResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {COLUMNS} FROM question WHERE category = ? ORDER BY id"
        ))
        .bind(filter.category)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn find_by_text_match(&self, term: &str) -> RepoResult<Vec<Question>> {
        let needle = term.to_lowercase();
        let questions = self.find_all().await?;
        Ok(questions
            .into_iter()
            .filter(|q| contains_folded(&q.question, &needle))
            .collect())
    }
}
