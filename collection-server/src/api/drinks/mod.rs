//! Drink API
//!
//! | Path | Method | Permission |
//! |------|--------|------------|
//! | /drinks | GET | public |
//! | /drinks-detail | GET | `get:drinks-detail` |
//! | /drinks | POST | `post:drinks` |
//! | /drinks/{id} | PATCH | `patch:drinks` |
//! | /drinks/{id} | DELETE | `delete:drinks` |

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};

use crate::auth::permissions::{DELETE_DRINKS, GET_DRINKS_DETAIL, PATCH_DRINKS, POST_DRINKS};
use crate::auth::{require_auth, require_permission};
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    let public_routes = Router::new().route("/drinks", get(handler::list));

    let detail_routes = Router::new()
        .route("/drinks-detail", get(handler::detail))
        .layer(middleware::from_fn(require_permission(GET_DRINKS_DETAIL)));

    let create_routes = Router::new()
        .route("/drinks", post(handler::create))
        .layer(middleware::from_fn(require_permission(POST_DRINKS)));

    let update_routes = Router::new()
        .route("/drinks/{id}", patch(handler::update))
        .layer(middleware::from_fn(require_permission(PATCH_DRINKS)));

    let delete_routes = Router::new()
        .route("/drinks/{id}", delete(handler::delete))
        .layer(middleware::from_fn(require_permission(DELETE_DRINKS)));

    let protected_routes = detail_routes
        .merge(create_routes)
        .merge(update_routes)
        .merge(delete_routes)
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    public_routes.merge(protected_routes)
}
