//! Question API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /questions | GET | one page of questions plus the category map |
//! | /questions | POST | add a question |
//! | /questions/search | POST | one page of questions containing `searchTerm` |
//! | /questions/{id} | DELETE | delete a question |

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/questions", get(handler::list).post(handler::create))
        .route("/questions/search", post(handler::search))
        .route("/questions/{id}", delete(handler::delete))
}
