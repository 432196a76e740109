use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::db::entities::{note, prelude::Note};

#[derive(Debug, Default)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Clone)]
pub struct NoteDao {
    db: DatabaseConnection,
}

impl NoteDao {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    /// Stamps `created_date` and `last_updated_date` with the same instant.
    pub async fn create(
        &self,
        owner: Uuid,
        title: &str,
        content: &str,
    ) -> Result<note::Model, sea_orm::DbErr> {
        let now = Utc::now().fixed_offset();
        let model = note::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner),
            title: Set(title.to_string()),
            content: Set(content.to_string()),
            created_date: Set(now),
            last_updated_date: Set(now),
        };
        model.insert(&self.db).await
    }

    pub async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<note::Model>, sea_orm::DbErr> {
        Note::find()
            .filter(note::Column::UserId.eq(owner))
            .order_by_desc(note::Column::LastUpdatedDate)
            .all(&self.db)
            .await
    }

    pub async fn find_for_owner(
        &self,
        owner: Uuid,
        id: Uuid,
    ) -> Result<Option<note::Model>, sea_orm::DbErr> {
        Note::find_by_id(id)
            .filter(note::Column::UserId.eq(owner))
            .one(&self.db)
            .await
    }

    /// Restamps `last_updated_date`; `created_date` is never touched again.
    pub async fn update_for_owner(
        &self,
        owner: Uuid,
        id: Uuid,
        changes: NoteChanges,
    ) -> Result<Option<note::Model>, sea_orm::DbErr> {
        let Some(existing) = self.find_for_owner(owner, id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }
        active.last_updated_date = Set(Utc::now().fixed_offset());
        active.update(&self.db).await.map(Some)
    }

    pub async fn delete_for_owner(&self, owner: Uuid, id: Uuid) -> Result<bool, sea_orm::DbErr> {
        let result = Note::delete_many()
            .filter(note::Column::Id.eq(id))
            .filter(note::Column::UserId.eq(owner))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
