//! Quiz API
//!
//! `POST /quizzes` picks a random question the player has not seen yet.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/quizzes", post(handler::next_question))
}
