use uuid::Uuid;

use crate::{
    db::dao::{LinkDao, link_dao::LinkChanges},
    db::entities::link,
    error::AppError,
};

#[derive(Clone)]
pub struct LinkService {
    links: LinkDao,
}

impl LinkService {
    pub fn new(links: LinkDao) -> Self {
        Self { links }
    }

    pub async fn create(
        &self,
        owner: Uuid,
        url: &str,
        description: &str,
        order: i32,
    ) -> Result<link::Model, AppError> {
        Ok(self.links.create(owner, url, description, order).await?)
    }

    pub async fn list(&self, owner: Uuid) -> Result<Vec<link::Model>, AppError> {
        Ok(self.links.list_by_owner(owner).await?)
    }

    pub async fn get(&self, owner: Uuid, id: Uuid) -> Result<link::Model, AppError> {
        self.links
            .find_for_owner(owner, id)
            .await?
            .ok_or(AppError::NotFound("Link not found"))
    }

    pub async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        changes: LinkChanges,
    ) -> Result<link::Model, AppError> {
        self.links
            .update_for_owner(owner, id, changes)
            .await?
            .ok_or(AppError::NotFound("Link not found"))
    }

    pub async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self.links.delete_for_owner(owner, id).await?;
        if !deleted {
            return Err(AppError::NotFound("Link not found"));
        }
        Ok(())
    }
}
