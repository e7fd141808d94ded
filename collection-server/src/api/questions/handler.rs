//! Question API Handlers

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::models::{NewQuestion, Question, QuestionCreate, QuestionSearch, category_map};
use shared::{ApiResponse, PageRequest};

use crate::core::ServerState;
use crate::db::repository::{CategoryRepository, Collection, QuestionRepository};
use crate::services::{query, write_failed};
use crate::utils::validation::{MAX_NOTE_LEN, require, require_text};
use crate::utils::{ApiJson, ApiPath, ApiQuery, AppError, AppResult, ok};

const RESOURCE: &str = "question";

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    questions: Vec<Question>,
    /// Number of matching questions
    total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct Created {
    created: i64,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    deleted: i64,
}

/// Every field present and non-empty (422 otherwise)
fn validate(payload: QuestionCreate) -> AppResult<NewQuestion> {
    Ok(NewQuestion {
        question: require_text(payload.question, "question", MAX_NOTE_LEN)?,
        answer: require_text(payload.answer, "answer", MAX_NOTE_LEN)?,
        category: require(payload.category, "category")?,
        difficulty: require(payload.difficulty, "difficulty")?,
    })
}

/// GET /questions - one page of questions
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(params): ApiQuery<PageQuery>,
) -> AppResult<Json<ApiResponse<ListResponse>>> {
    let repo = QuestionRepository::new(state.pool.clone());
    let page = query::list(&repo, None, PageRequest::parse(params.page.as_deref())).await?;
    let categories = CategoryRepository::new(state.pool).find_all().await?;

    Ok(ok(ListResponse {
        questions: page.items,
        total_questions: page.total,
        categories: category_map(&categories),
    }))
}

/// POST /questions - add a question
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<QuestionCreate>,
) -> AppResult<Json<ApiResponse<Created>>> {
    let input = validate(payload)?;
    let question = QuestionRepository::new(state.pool)
        .create(&input)
        .await
        .map_err(|e| write_failed(e, RESOURCE, AppError::unprocessable()))?;

    tracing::info!(id = question.id, category = question.category, "Question created");
    Ok(ok(Created {
        created: question.id,
    }))
}

/// POST /questions/search - paginated text search
pub async fn search(
    State(state): State<ServerState>,
    ApiQuery(params): ApiQuery<PageQuery>,
    ApiJson(payload): ApiJson<QuestionSearch>,
) -> AppResult<Json<ApiResponse<SearchResponse>>> {
    let repo = QuestionRepository::new(state.pool);
    let page = query::search_page(
        &repo,
        payload.search_term.as_deref(),
        PageRequest::parse(params.page.as_deref()),
    )
    .await?;

    Ok(ok(SearchResponse {
        questions: page.items,
        total_questions: page.total,
    }))
}

/// DELETE /questions/{id} - delete a question
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<ApiResponse<Deleted>>> {
    QuestionRepository::new(state.pool)
        .delete(id)
        .await
        .map_err(|e| write_failed(e, RESOURCE, AppError::unprocessable()))?;

    tracing::info!(id, "Question deleted");
    Ok(ok(Deleted { deleted: id }))
}
