//! Drink API Handlers

use axum::{
    Json,
    extract::{Extension, State},
};
use serde::Serialize;
use shared::ApiResponse;
use shared::models::{Drink, DrinkCreate, DrinkShort, DrinkUpdate, RecipePart};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{Collection, DrinkRepository};
use crate::services::write_failed;
use crate::utils::validation::{MAX_NAME_LEN, require, require_text, validate_required_text};
use crate::utils::{ApiJson, ApiPath, AppError, AppResult, ok};

const RESOURCE: &str = "drink";

#[derive(Debug, Serialize)]
pub struct DrinksResponse<T> {
    drinks: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    deleted: i64,
}

/// GET /drinks - public menu, recipes without proportions
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<DrinksResponse<DrinkShort>>>> {
    let drinks = DrinkRepository::new(state.pool).find_all().await?;
    Ok(ok(DrinksResponse {
        drinks: drinks.iter().map(Drink::short).collect(),
    }))
}

/// GET /drinks-detail - full recipes
pub async fn detail(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<DrinksResponse<Drink>>>> {
    let drinks = DrinkRepository::new(state.pool).find_all().await?;
    tracing::debug!(user_id = %user.id, count = drinks.len(), "Drink detail");
    Ok(ok(DrinksResponse {
        drinks: drinks.iter().map(Drink::long).collect(),
    }))
}

/// POST /drinks - add a drink; the recipe may be one part or a list
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    ApiJson(payload): ApiJson<DrinkCreate>,
) -> AppResult<Json<ApiResponse<DrinksResponse<Drink>>>> {
    let title = require_text(payload.title, "title", MAX_NAME_LEN)?;
    let recipe = require(payload.recipe, "recipe")?.into_parts();
    if recipe.is_empty() {
        return Err(AppError::validation("recipe must not be empty"));
    }

    let drink = DrinkRepository::new(state.pool)
        .create(&title, &recipe)
        .await
        .map_err(|e| write_failed(e, RESOURCE, AppError::unprocessable()))?;

    tracing::info!(id = drink.id, title = %drink.title, user_id = %user.id, "Drink created");
    Ok(ok(DrinksResponse {
        drinks: vec![drink.long()],
    }))
}

/// PATCH /drinks/{id} - update the provided fields
///
/// Empty titles and empty recipes count as not provided.
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<DrinkUpdate>,
) -> AppResult<Json<ApiResponse<DrinksResponse<Drink>>>> {
    let title = payload.title.filter(|t| !t.trim().is_empty());
    if let Some(title) = &title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }
    let recipe: Option<Vec<RecipePart>> = payload
        .recipe
        .map(|r| r.into_parts())
        .filter(|parts| !parts.is_empty());

    let drink = DrinkRepository::new(state.pool)
        .update(id, title.as_deref(), recipe.as_deref())
        .await
        .map_err(|e| write_failed(e, RESOURCE, AppError::unprocessable()))?;

    tracing::info!(id, user_id = %user.id, "Drink updated");
    Ok(ok(DrinksResponse {
        drinks: vec![drink.long()],
    }))
}

/// DELETE /drinks/{id} - remove a drink
pub async fn delete(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<ApiResponse<Deleted>>> {
    DrinkRepository::new(state.pool)
        .delete(id)
        .await
        .map_err(|e| write_failed(e, RESOURCE, AppError::unprocessable()))?;

    tracing::info!(id, user_id = %user.id, "Drink deleted");
    Ok(ok(Deleted { deleted: id }))
}
