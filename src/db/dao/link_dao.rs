use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::db::entities::{link, prelude::Link};

#[derive(Debug, Default)]
pub struct LinkChanges {
    pub url: Option<String>,
    pub description: Option<String>,
    pub order: Option<i32>,
}

/// Every query here filters on `user_id`; a row belonging to another owner is
/// indistinguishable from a missing one.
#[derive(Clone)]
pub struct LinkDao {
    db: DatabaseConnection,
}

impl LinkDao {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn create(
        &self,
        owner: Uuid,
        url: &str,
        description: &str,
        order: i32,
    ) -> Result<link::Model, sea_orm::DbErr> {
        let model = link::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner),
            url: Set(url.to_string()),
            description: Set(description.to_string()),
            order: Set(order),
        };
        model.insert(&self.db).await
    }

    pub async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<link::Model>, sea_orm::DbErr> {
        Link::find()
            .filter(link::Column::UserId.eq(owner))
            .order_by_asc(link::Column::Order)
            .all(&self.db)
            .await
    }

    pub async fn find_for_owner(
        &self,
        owner: Uuid,
        id: Uuid,
    ) -> Result<Option<link::Model>, sea_orm::DbErr> {
        Link::find_by_id(id)
            .filter(link::Column::UserId.eq(owner))
            .one(&self.db)
            .await
    }

    pub async fn update_for_owner(
        &self,
        owner: Uuid,
        id: Uuid,
        changes: LinkChanges,
    ) -> Result<Option<link::Model>, sea_orm::DbErr> {
        let Some(existing) = self.find_for_owner(owner, id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(url) = changes.url {
            active.url = Set(url);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(order) = changes.order {
            active.order = Set(order);
        }
        active.update(&self.db).await.map(Some)
    }

    pub async fn delete_for_owner(&self, owner: Uuid, id: Uuid) -> Result<bool, sea_orm::DbErr> {
        let result = Link::delete_many()
            .filter(link::Column::Id.eq(id))
            .filter(link::Column::UserId.eq(owner))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
