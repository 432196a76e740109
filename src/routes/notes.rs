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
    db::dao::{DaoContext, note_dao::NoteChanges},
    db::entities::note,
    error::AppError,
    services::note_service::NoteService,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    title: String,
    content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    title: Option<String>,
    content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_date: chrono::DateTime<chrono::FixedOffset>,
    pub last_updated_date: chrono::DateTime<chrono::FixedOffset>,
    pub has_been_edited: bool,
    pub user_id: Uuid,
}

impl From<note::Model> for NoteResponse {
    fn from(note: note::Model) -> Self {
        let has_been_edited = note.has_been_edited();
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            created_date: note.created_date,
            last_updated_date: note.last_updated_date,
            has_been_edited,
            user_id: note.user_id,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note).patch(update_note).delete(delete_note),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), token_auth))
        .with_state(state)
}

fn service(state: &AppState) -> NoteService {
    NoteService::new(DaoContext::new(&state.db).note())
}

async fn create_note(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    JsonBody(body): JsonBody<CreateNoteRequest>,
) -> Result<(StatusCode, Json<NoteResponse>), AppError> {
    let note = service(&state)
        .create(user.id, &body.title, &body.content)
        .await?;
    Ok((StatusCode::CREATED, Json(note.into())))
}

async fn list_notes(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
) -> Result<Json<Vec<NoteResponse>>, AppError> {
    let notes = service(&state).list(user.id).await?;
    Ok(Json(notes.into_iter().map(Into::into).collect()))
}

async fn get_note(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<NoteResponse>, AppError> {
    let note = service(&state).get(user.id, id).await?;
    Ok(Json(note.into()))
}

async fn update_note(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    JsonBody(body): JsonBody<UpdateNoteRequest>,
) -> Result<Json<NoteResponse>, AppError> {
    let changes = NoteChanges {
        title: body.title,
        content: body.content,
    };
    let note = service(&state).update(user.id, id, changes).await?;
    Ok(Json(note.into()))
}

async fn delete_note(
    State(state): State<Arc<AppState>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    service(&state).delete(user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
