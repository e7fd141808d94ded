//! Quiz API Handlers

use axum::{Json, extract::State};
use serde::Serialize;
use shared::ApiResponse;
use shared::models::{Question, QuizRequest};

use crate::core::ServerState;
use crate::db::repository::QuestionRepository;
use crate::services::query;
use crate::utils::{ApiJson, AppError, AppResult, ok};

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    /// `null` once every eligible question has been played
    question: Option<Question>,
}

/// POST /quizzes - next random unseen question
pub async fn next_question(
    State(state): State<ServerState>,
    ApiJson(request): ApiJson<QuizRequest>,
) -> AppResult<Json<ApiResponse<QuizResponse>>> {
    let (Some(previous), Some(category)) = (request.previous_questions, request.quiz_category)
    else {
        return Err(AppError::unprocessable());
    };

    let repo = QuestionRepository::new(state.pool);
    let question = query::random_unseen(&repo, category.filter().as_ref(), &previous).await?;
    if question.is_none() {
        tracing::debug!(category = category.id, played = previous.len(), "Quiz exhausted");
    }
    Ok(ok(QuizResponse { question }))
}
