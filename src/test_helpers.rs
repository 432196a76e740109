use std::sync::Arc;

use axum::Router;
use sea_orm::{DatabaseBackend, MockDatabase};

use crate::{routes::router, state::AppState};

/// Router over a mock connection, for tests that must fail before any query
/// reaches the database.
pub fn test_router() -> Router {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let state = AppState::new(db);
    router(Arc::clone(&state))
}
