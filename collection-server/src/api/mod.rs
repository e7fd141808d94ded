//! API routes
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`venues`], [`artists`], [`shows`] - listing site
//! - [`categories`], [`questions`], [`quizzes`] - trivia
//! - [`drinks`] - coffee shop menu (permission gated)

pub mod health;

// Listings
pub mod artists;
pub mod shows;
pub mod venues;

// Trivia
pub mod categories;
pub mod questions;
pub mod quizzes;

// Coffee shop
pub mod drinks;

use axum::Router;
use http::{Method, header};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Unmatched routes answer with the not-found envelope
async fn fallback() -> AppResult<()> {
    Err(AppError::not_found())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

/// Assemble every route group into one application
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(venues::router())
        .merge(artists::router())
        .merge(shows::router())
        .merge(categories::router())
        .merge(questions::router())
        .merge(quizzes::router())
        .merge(drinks::router(&state))
        .fallback(fallback)
        .with_state(state)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
}
