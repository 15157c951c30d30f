//! API routes module

pub mod chat;
pub mod contact;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat relay routes
        .nest("/chat", chat::router())
        // Contact form routes
        .nest("/contact", contact::router())
}
