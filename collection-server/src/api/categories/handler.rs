//! Category API Handlers

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::models::{Question, QuestionFilter, category_map};
use shared::{ApiResponse, PageRequest};

use crate::core::ServerState;
use crate::db::repository::{CategoryRepository, Collection, QuestionRepository};
use crate::services::query;
use crate::utils::{ApiPath, ApiQuery, AppError, AppResult, ok};

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    categories: BTreeMap<i64, String>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponse {
    questions: Vec<Question>,
    /// Questions in this category
    total_questions: usize,
    current_category: i64,
}

/// GET /categories - every category
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<CategoriesResponse>>> {
    let categories = CategoryRepository::new(state.pool).find_all().await?;
    if categories.is_empty() {
        return Err(AppError::not_found());
    }
    Ok(ok(CategoriesResponse {
        categories: category_map(&categories),
    }))
}

/// GET /categories/{id}/questions - questions of one category
pub async fn questions(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<PageQuery>,
) -> AppResult<Json<ApiResponse<CategoryQuestionsResponse>>> {
    let repo = QuestionRepository::new(state.pool);
    let page = query::list(
        &repo,
        Some(&QuestionFilter { category: id }),
        PageRequest::parse(params.page.as_deref()),
    )
    .await?;

    Ok(ok(CategoryQuestionsResponse {
        questions: page.items,
        total_questions: page.total,
        current_category: id,
    }))
}
