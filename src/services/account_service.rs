use sea_orm::SqlErr;
use uuid::Uuid;

use crate::{
    auth::password::{hash_password, verify_password},
    db::dao::{UserDao, user_dao::UserChanges},
    db::entities::user,
    error::AppError,
    validate::{is_email_valid, normalize_email},
};

/// Fields a caller may change on their own profile. A present `password` is
/// hashed before it reaches the store; an absent one keeps the current hash.
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
}

/// Owns user records: creation, profile updates and password checks. Users
/// are never constructed outside this service.
#[derive(Clone)]
pub struct AccountService {
    users: UserDao,
}

impl AccountService {
    pub fn new(users: UserDao) -> Self {
        Self { users }
    }

    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<user::Model, AppError> {
        let email = email.trim();
        if !is_email_valid(email) {
            return Err(AppError::Validation("Invalid email address"));
        }
        let email = normalize_email(email);
        let password_hash = hash_password(password)?;

        // Uniqueness rides on the `users.email` unique constraint so two
        // concurrent registrations cannot both succeed.
        self.users
            .create_user(&email, &password_hash, first_name, last_name)
            .await
            .map_err(Self::map_unique_violation)
    }

    pub async fn update_user(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> Result<user::Model, AppError> {
        let email = match update.email {
            Some(raw) => {
                let raw = raw.trim().to_string();
                if !is_email_valid(&raw) {
                    return Err(AppError::Validation("Invalid email address"));
                }
                Some(normalize_email(&raw))
            }
            None => None,
        };
        let password_hash = match update.password {
            Some(password) => Some(hash_password(&password)?),
            None => None,
        };

        let changes = UserChanges {
            email,
            first_name: update.first_name,
            last_name: update.last_name,
            password_hash,
        };
        // An empty patch has nothing to write; hand back the current record.
        if changes.email.is_none()
            && changes.first_name.is_none()
            && changes.last_name.is_none()
            && changes.password_hash.is_none()
        {
            return self
                .users
                .find_by_id(user_id)
                .await?
                .ok_or(AppError::NotFound("User not found"));
        }
        self.users
            .update_user(user_id, changes)
            .await
            .map_err(Self::map_unique_violation)
    }

    pub fn verify_password(&self, user: &user::Model, candidate: &str) -> Result<bool, AppError> {
        verify_password(candidate, &user.password_hash)
    }

    fn map_unique_violation(err: sea_orm::DbErr) -> AppError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict("Email already registered")
            }
            _ => AppError::from(err),
        }
    }
}
