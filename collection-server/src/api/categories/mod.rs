//! Category API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /categories | GET | `{id: type}` map of every category |
//! | /categories/{id}/questions | GET | one page of the category's questions |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/categories", get(handler::list))
        .route("/categories/{id}/questions", get(handler::questions))
}
