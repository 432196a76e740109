use std::sync::Arc;

use axum::{Json, Router, extract::State, middleware, routing::get};
use serde::Deserialize;

use super::auth::UserResponse;
use super::extract::JsonBody;
use crate::{
    auth::{CurrentUser, token::token_auth},
    db::dao::DaoContext,
    error::AppError,
    services::account_service::{AccountService, ProfileUpdate},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    password: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    // POST /me falls through to axum's 405 method fallback; account creation
    // only happens via /register.
    Router::new()
        .route("/me", get(me).patch(update_me))
        .route_layer(middleware::from_fn_with_state(state.clone(), token_auth))
        .with_state(state)
}

async fn me(user: CurrentUser) -> Json<UserResponse> {
    Json(UserResponse {
        email: user.email,
        first_name: user.first_name,
        last_name: user.last_name,
    })
}

async fn update_me(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    JsonBody(body): JsonBody<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let service = AccountService::new(DaoContext::new(&state.db).user());
    let updated = service
        .update_user(
            user.id,
            ProfileUpdate {
                email: body.email,
                first_name: body.first_name,
                last_name: body.last_name,
                password: body.password,
            },
        )
        .await?;
    Ok(Json(updated.into()))
}
