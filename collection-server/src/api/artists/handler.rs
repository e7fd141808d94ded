//! Artist API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::models::{ArtistDetail, ArtistForm, ArtistRef, ArtistSummary, Notice};
use shared::util::now_millis;
use shared::{ApiResponse, PageRequest};

use crate::core::ServerState;
use crate::services::listing::ListingService;
use crate::services::{query, write_failed};
use crate::utils::validation::{
    MAX_LOCATION_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN,
    validate_optional_text, validate_required_text,
};
use crate::utils::{ApiJson, ApiPath, ApiQuery, AppError, AppResult, ok};

const RESOURCE: &str = "artist";

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    artists: Vec<ArtistRef>,
    total: usize,
    page: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    search_term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    count: usize,
    data: Vec<ArtistSummary>,
}

#[derive(Debug, Serialize)]
pub struct EditFormResponse {
    id: i64,
    form: ArtistForm,
}

fn validate_form(form: &ArtistForm) -> AppResult<()> {
    validate_required_text(&form.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&form.city, "city", MAX_LOCATION_LEN)?;
    validate_required_text(&form.state, "state", MAX_LOCATION_LEN)?;
    validate_optional_text(&form.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&form.image_link, "image_link", MAX_URL_LEN)?;
    validate_optional_text(&form.facebook_link, "facebook_link", MAX_URL_LEN)?;
    validate_optional_text(&form.website_link, "website_link", MAX_URL_LEN)?;
    validate_optional_text(&form.seeking_description, "seeking_description", MAX_NOTE_LEN)?;
    Ok(())
}

/// GET /artists - one page of artists
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(params): ApiQuery<PageQuery>,
) -> AppResult<Json<ApiResponse<ListResponse>>> {
    let service = ListingService::new(state.pool);
    let page = query::list(
        &service.artists,
        None,
        PageRequest::parse(params.page.as_deref()),
    )
    .await?
    .map(|a| ArtistRef {
        id: a.id,
        name: a.name,
    });

    Ok(ok(ListResponse {
        artists: page.items,
        total: page.total,
        page: page.page,
    }))
}

/// POST /artists/search - case-insensitive name search
pub async fn search(
    State(state): State<ServerState>,
    ApiJson(form): ApiJson<SearchForm>,
) -> AppResult<Json<ApiResponse<SearchResponse>>> {
    let service = ListingService::new(state.pool);
    let artists = query::search_all(&service.artists, form.search_term.as_deref()).await?;
    let data = service.artist_summaries(artists, now_millis()).await?;
    Ok(ok(SearchResponse {
        count: data.len(),
        data,
    }))
}

/// GET /artists/{id} - artist page
pub async fn detail(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<ApiResponse<ArtistDetail>>> {
    let detail = ListingService::new(state.pool)
        .artist_detail(id, now_millis())
        .await?;
    Ok(ok(detail))
}

/// POST /artists - list a new artist
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(form): ApiJson<ArtistForm>,
) -> AppResult<Json<ApiResponse<Notice>>> {
    validate_form(&form)?;
    let service = ListingService::new(state.pool);
    let artist = service.artists.create(&form).await.map_err(|e| {
        write_failed(
            e,
            RESOURCE,
            AppError::operation_failed(format!(
                "An error occurred. Artist {} could not be listed.",
                form.name
            )),
        )
    })?;

    tracing::info!(id = artist.id, name = %artist.name, "Artist listed");
    Ok(ok(Notice {
        id: artist.id,
        notice: format!("Artist {} was successfully listed!", form.name),
    }))
}

/// GET /artists/{id}/edit - current values
pub async fn edit_form(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<ApiResponse<EditFormResponse>>> {
    let artist = ListingService::new(state.pool)
        .artists
        .find_by_id(id)
        .await?
        .ok_or_else(AppError::not_found)?;
    Ok(ok(EditFormResponse {
        id: artist.id,
        form: artist.into(),
    }))
}

/// POST /artists/{id}/edit - replace every field
pub async fn edit(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(form): ApiJson<ArtistForm>,
) -> AppResult<Json<ApiResponse<Notice>>> {
    validate_form(&form)?;
    let service = ListingService::new(state.pool);
    let artist = service.artists.update(id, &form).await.map_err(|e| {
        write_failed(
            e,
            RESOURCE,
            AppError::operation_failed(format!(
                "An error occurred. Artist {} could not be edited.",
                form.name
            )),
        )
    })?;

    tracing::info!(id = artist.id, "Artist edited");
    Ok(ok(Notice {
        id: artist.id,
        notice: format!("Artist {} was successfully edited!", form.name),
    }))
}

/// DELETE /artists/{id} - delete an artist and its shows
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<ApiResponse<Notice>>> {
    let service = ListingService::new(state.pool);
    let artist = service.artists.delete(id).await.map_err(|e| {
        write_failed(
            e,
            RESOURCE,
            AppError::operation_failed(format!(
                "An error occurred. Artist {id} could not be deleted."
            )),
        )
    })?;

    tracing::info!(id, name = %artist.name, "Artist deleted");
    Ok(ok(Notice {
        id,
        notice: format!("Artist: {} was successfully deleted.", artist.name),
    }))
}
