use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::get,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::extract::JsonBody;
use crate::{
    auth::{CurrentUser, token::token_auth},
    db::dao::{DaoContext, link_dao::LinkChanges},
    db::entities::link,
    error::AppError,
    services::link_service::LinkService,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    url: String,
    description: String,
    order: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLinkRequest {
    url: Option<String>,
    description: Option<String>,
    order: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: Uuid,
    pub url: String,
    pub description: String,
    pub order: i32,
    pub user_id: Uuid,
}

impl From<link::Model> for LinkResponse {
    fn from(link: link::Model) -> Self {
        Self {
            id: link.id,
            url: link.url,
            description: link.description,
            order: link.order,
            user_id: link.user_id,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/links", get(list_links).post(create_link))
        .route(
            "/links/{id}",
            get(get_link).patch(update_link).delete(delete_link),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), token_auth))
        .with_state(state)
}

fn service(state: &AppState) -> LinkService {
    LinkService::new(DaoContext::new(&state.db).link())
}

async fn create_link(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    JsonBody(body): JsonBody<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let link = service(&state)
        .create(user.id, &body.url, &body.description, body.order)
        .await?;
    Ok((StatusCode::CREATED, Json(link.into())))
}

async fn list_links(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = service(&state).list(user.id).await?;
    Ok(Json(links.into_iter().map(Into::into).collect()))
}

async fn get_link(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = service(&state).get(user.id, id).await?;
    Ok(Json(link.into()))
}

async fn update_link(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    JsonBody(body): JsonBody<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    let changes = LinkChanges {
        url: body.url,
        description: body.description,
        order: body.order,
    };
    let link = service(&state).update(user.id, id, changes).await?;
    Ok(Json(link.into()))
}

async fn delete_link(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    service(&state).delete(user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
