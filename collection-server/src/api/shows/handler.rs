//! Show API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::models::{NewShow, Notice, ShowCreate, ShowView};
use shared::{ApiResponse, PageRequest};

use crate::core::ServerState;
use crate::db::repository::ShowRepository;
use crate::services::{query, write_failed};
use crate::utils::validation::require;
use crate::utils::{ApiJson, ApiQuery, AppError, AppResult, ok};

const RESOURCE: &str = "show";

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    shows: Vec<ShowView>,
    total: usize,
    page: u32,
}

/// All three fields are required
fn validate(payload: ShowCreate) -> AppResult<NewShow> {
    Ok(NewShow {
        artist_id: require(payload.artist_id, "artist_id")?,
        venue_id: require(payload.venue_id, "venue_id")?,
        start_time: require(payload.start_time, "start_time")?.timestamp_millis(),
    })
}

/// GET /shows - one page of shows
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(params): ApiQuery<PageQuery>,
) -> AppResult<Json<ApiResponse<ListResponse>>> {
    let repo = ShowRepository::new(state.pool);
    let page = query::list(&repo, None, PageRequest::parse(params.page.as_deref()))
        .await?
        .map(|s| s.view());

    Ok(ok(ListResponse {
        shows: page.items,
        total: page.total,
        page: page.page,
    }))
}

/// POST /shows - list a new show
///
/// An unknown artist or venue is rejected by the foreign keys and reported
/// with the generic failure notice.
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<ShowCreate>,
) -> AppResult<Json<ApiResponse<Notice>>> {
    let show = validate(payload)?;
    let id = ShowRepository::new(state.pool)
        .create(&show)
        .await
        .map_err(|e| {
            write_failed(
                e,
                RESOURCE,
                AppError::operation_failed("An error occurred. Show could not be listed."),
            )
        })?;

    tracing::info!(id, artist_id = show.artist_id, venue_id = show.venue_id, "Show listed");
    Ok(ok(Notice {
        id,
        notice: "Show was successfully listed!".to_string(),
    }))
}
