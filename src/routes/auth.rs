use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::{Deserialize, Serialize};

use super::extract::JsonBody;
use crate::{
    db::dao::DaoContext,
    db::entities::user,
    error::AppError,
    services::{account_service::AccountService, auth_service::AuthService},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    email: String,
    password: String,
    first_name: String,
    last_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

/// Public view of a user. The password hash has no way into this shape.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    token: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(state)
}

async fn register(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let service = AccountService::new(DaoContext::new(&state.db).user());
    let user = service
        .create_user(&body.email, &body.password, &body.first_name, &body.last_name)
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    if body.email.trim().is_empty() || body.password.is_empty() {
        return Err(AppError::AuthFailed);
    }

    let daos = DaoContext::new(&state.db);
    let service = AuthService::new(daos.user(), daos.auth_token());
    let token = service.login(&body.email, &body.password).await?;
    Ok(Json(TokenResponse { token }))
}
