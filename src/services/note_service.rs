use uuid::Uuid;

use crate::{
    db::dao::{NoteDao, note_dao::NoteChanges},
    db::entities::note,
    error::AppError,
};

#[derive(Clone)]
pub struct NoteService {
    notes: NoteDao,
}

impl NoteService {
    pub fn new(notes: NoteDao) -> Self {
        Self { notes }
    }

    pub async fn create(
        &self,
        owner: Uuid,
        title: &str,
        content: &str,
    ) -> Result<note::Model, AppError> {
        Ok(self.notes.create(owner, title, content).await?)
    }

    pub async fn list(&self, owner: Uuid) -> Result<Vec<note::Model>, AppError> {
        Ok(self.notes.list_by_owner(owner).await?)
    }

    pub async fn get(&self, owner: Uuid, id: Uuid) -> Result<note::Model, AppError> {
        self.notes
            .find_for_owner(owner, id)
            .await?
            .ok_or(AppError::NotFound("Note not found"))
    }

    pub async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        changes: NoteChanges,
    ) -> Result<note::Model, AppError> {
        self.notes
            .update_for_owner(owner, id, changes)
            .await?
            .ok_or(AppError::NotFound("Note not found"))
    }

    pub async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self.notes.delete_for_owner(owner, id).await?;
        if !deleted {
            return Err(AppError::NotFound("Note not found"));
        }
        Ok(())
    }
}
