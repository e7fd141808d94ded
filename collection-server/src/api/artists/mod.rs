//! Artist API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /artists | GET | one page of `{id, name}` |
//! | /artists | POST | list a new artist |
//! | /artists/search | POST | artists whose name contains `search_term` |
//! | /artists/{id} | GET | artist page with past and upcoming shows |
//! | /artists/{id} | DELETE | delete an artist and its shows |
//! | /artists/{id}/edit | GET | current values for the edit form |
//! | /artists/{id}/edit | POST | replace every field |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/artists", get(handler::list).post(handler::create))
        .route("/artists/search", post(handler::search))
        .route("/artists/{id}", get(handler::detail).delete(handler::delete))
        .route("/artists/{id}/edit", get(handler::edit_form).post(handler::edit))
}
