use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::db::entities::{auth_token, prelude::AuthToken};

#[derive(Clone)]
pub struct TokenDao {
    db: DatabaseConnection,
}

impl TokenDao {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    /// Replaces the user's active token: prior tokens are dropped, then a
    /// fresh random value is persisted.
    pub async fn issue_for_user(&self, user_id: Uuid) -> Result<auth_token::Model, sea_orm::DbErr> {
        AuthToken::delete_many()
            .filter(auth_token::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;

        let model = auth_token::ActiveModel {
            id: Set(Uuid::new_v4()),
            token: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id),
            ..Default::default()
        };
        model.insert(&self.db).await
    }

    pub async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<auth_token::Model>, sea_orm::DbErr> {
        AuthToken::find()
            .filter(auth_token::Column::Token.eq(token))
            .one(&self.db)
            .await
    }
}
