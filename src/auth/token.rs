use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::CurrentUser;
use crate::{
    db::dao::DaoContext, error::AppError, services::auth_service::AuthService, state::AppState,
};

/// Layer guarding owner-scoped routes: resolves the bearer token to an active
/// user and stores it in request extensions for the `CurrentUser` extractor.
pub async fn token_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Unauthorized("Missing/invalid Authorization header").into_response()
    })?;

    let daos = DaoContext::new(&state.db);
    let service = AuthService::new(daos.user(), daos.auth_token());
    let user = service
        .resolve_token(token)
        .await
        .map_err(IntoResponse::into_response)?;

    req.extensions_mut().insert(CurrentUser::from(user));

    Ok(next.run(req).await)
}
