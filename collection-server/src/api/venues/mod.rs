//! Venue API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /venues | GET | venues grouped by (city, state) |
//! | /venues | POST | list a new venue |
//! | /venues/list | GET | one page of venues, optionally by city/state |
//! | /venues/search | POST | venues whose name contains `search_term` |
//! | /venues/{id} | GET | venue page with past and upcoming shows |
//! | /venues/{id} | DELETE | delete a venue and its shows |
//! | /venues/{id}/edit | GET | current values for the edit form |
//! | /venues/{id}/edit | POST | replace every field |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/venues", get(handler::areas).post(handler::create))
        .route("/venues/list", get(handler::list))
        .route("/venues/search", post(handler::search))
        .route("/venues/{id}", get(handler::detail).delete(handler::delete))
        .route("/venues/{id}/edit", get(handler::edit_form).post(handler::edit))
}
