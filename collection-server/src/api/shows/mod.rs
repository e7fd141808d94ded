//! Show API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /shows | GET | one page of shows with venue and artist names |
//! | /shows | POST | list a new show |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/shows", get(handler::list).post(handler::create))
}
