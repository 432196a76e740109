use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::db::entities::{prelude::User, user};

/// Fields applied by a profile update; `None` leaves the column untouched.
/// `email` must already be normalized and `password_hash` already hashed.
#[derive(Debug, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: Option<String>,
}

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl UserDao {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, sea_orm::DbErr> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<user::Model>, sea_orm::DbErr> {
        User::find_by_id(id).one(&self.db).await
    }

    pub async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<user::Model, sea_orm::DbErr> {
        let model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            is_active: Set(true),
            ..Default::default()
        };
        model.insert(&self.db).await
    }

    pub async fn update_user(
        &self,
        id: Uuid,
        changes: UserChanges,
    ) -> Result<user::Model, sea_orm::DbErr> {
        let mut active = user::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(first_name) = changes.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(password_hash) = changes.password_hash {
            active.password_hash = Set(password_hash);
        }
        active.update(&self.db).await
    }
}
