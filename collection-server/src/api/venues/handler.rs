//! Venue API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::models::{Area, Notice, VenueDetail, VenueFilter, VenueForm, VenueSummary};
use shared::util::now_millis;
use shared::{ApiResponse, PageRequest};

use crate::core::ServerState;
use crate::services::listing::ListingService;
use crate::services::{query, write_failed};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_LOCATION_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN,
    MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{ApiJson, ApiPath, ApiQuery, AppError, AppResult, ok};

const RESOURCE: &str = "venue";

#[derive(Debug, Serialize)]
pub struct AreasResponse {
    areas: Vec<Area>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    city: Option<String>,
    state: Option<String>,
    page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    venues: Vec<VenueSummary>,
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
    data: Vec<VenueSummary>,
}

#[derive(Debug, Serialize)]
pub struct EditFormResponse {
    id: i64,
    form: VenueForm,
}

fn validate_form(form: &VenueForm) -> AppResult<()> {
    validate_required_text(&form.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&form.city, "city", MAX_LOCATION_LEN)?;
    validate_required_text(&form.state, "state", MAX_LOCATION_LEN)?;
    validate_required_text(&form.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&form.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&form.image_link, "image_link", MAX_URL_LEN)?;
    validate_optional_text(&form.facebook_link, "facebook_link", MAX_URL_LEN)?;
    validate_optional_text(&form.website_link, "website_link", MAX_URL_LEN)?;
    validate_optional_text(&form.seeking_description, "seeking_description", MAX_NOTE_LEN)?;
    Ok(())
}

/// GET /venues - venues grouped by location
pub async fn areas(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<AreasResponse>>> {
    let areas = ListingService::new(state.pool).areas(now_millis()).await?;
    Ok(ok(AreasResponse { areas }))
}

/// GET /venues/list - one page of venues
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(params): ApiQuery<ListQuery>,
) -> AppResult<Json<ApiResponse<ListResponse>>> {
    let service = ListingService::new(state.pool);
    let filter = (params.city.is_some() || params.state.is_some()).then(|| VenueFilter {
        city: params.city,
        state: params.state,
    });
    let page = query::list(
        &service.venues,
        filter.as_ref(),
        PageRequest::parse(params.page.as_deref()),
    )
    .await?;

    let (total, number) = (page.total, page.page);
    let venues = service.venue_summaries(page.items, now_millis()).await?;
    Ok(ok(ListResponse {
        venues,
        total,
        page: number,
    }))
}

/// POST /venues/search - case-insensitive name search
pub async fn search(
    State(state): State<ServerState>,
    ApiJson(form): ApiJson<SearchForm>,
) -> AppResult<Json<ApiResponse<SearchResponse>>> {
    let service = ListingService::new(state.pool);
    let venues = query::search_all(&service.venues, form.search_term.as_deref()).await?;
    let data = service.venue_summaries(venues, now_millis()).await?;
    Ok(ok(SearchResponse {
        count: data.len(),
        data,
    }))
}

/// GET /venues/{id} - venue page
pub async fn detail(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<ApiResponse<VenueDetail>>> {
    let detail = ListingService::new(state.pool)
        .venue_detail(id, now_millis())
        .await?;
    Ok(ok(detail))
}

/// POST /venues - list a new venue
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(form): ApiJson<VenueForm>,
) -> AppResult<Json<ApiResponse<Notice>>> {
    validate_form(&form)?;
    let service = ListingService::new(state.pool);
    let venue = service.venues.create(&form).await.map_err(|e| {
        write_failed(
            e,
            RESOURCE,
            AppError::operation_failed(format!(
                "An error occurred. Venue {} could not be listed.",
                form.name
            )),
        )
    })?;

    tracing::info!(id = venue.id, name = %venue.name, "Venue listed");
    Ok(ok(Notice {
        id: venue.id,
        notice: format!("Venue {} was successfully listed!", form.name),
    }))
}

/// GET /venues/{id}/edit - current values
pub async fn edit_form(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<ApiResponse<EditFormResponse>>> {
    let venue = ListingService::new(state.pool)
        .venues
        .find_by_id(id)
        .await?
        .ok_or_else(AppError::not_found)?;
    Ok(ok(EditFormResponse {
        id: venue.id,
        form: venue.into(),
    }))
}

/// POST /venues/{id}/edit - replace every field
pub async fn edit(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(form): ApiJson<VenueForm>,
) -> AppResult<Json<ApiResponse<Notice>>> {
    validate_form(&form)?;
    let service = ListingService::new(state.pool);
    let venue = service.venues.update(id, &form).await.map_err(|e| {
        write_failed(
            e,
            RESOURCE,
            AppError::operation_failed(format!(
                "An error occurred. Venue {} could not be edited.",
                form.name
            )),
        )
    })?;

    tracing::info!(id = venue.id, "Venue edited");
    Ok(ok(Notice {
        id: venue.id,
        notice: format!("Venue {} was successfully edited!", form.name),
    }))
}

/// DELETE /venues/{id} - delete a venue and its shows
pub async fn delete(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<ApiResponse<Notice>>> {
    let service = ListingService::new(state.pool);
    let venue = service.venues.delete(id).await.map_err(|e| {
        write_failed(
            e,
            RESOURCE,
            AppError::operation_failed(format!("An error occurred. Venue {id} could not be deleted.")),
        )
    })?;

    tracing::info!(id, name = %venue.name, "Venue deleted");
    Ok(ok(Notice {
        id,
        notice: format!("Venue: {} was successfully deleted.", venue.name),
    }))
}
