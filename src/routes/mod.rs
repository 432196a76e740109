use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod extract;
pub mod links;
pub mod notes;
pub mod profile;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(auth::router(state.clone()))
        .merge(profile::router(state.clone()))
        .merge(links::router(state.clone()))
        .merge(notes::router(state))
}
