use crate::{
    auth::password::verify_password,
    db::dao::{TokenDao, UserDao},
    db::entities::user,
    error::AppError,
    validate::normalize_email,
};

/// Verifies credentials against the account store and manages the opaque
/// tokens that gate every owner-scoped route.
#[derive(Clone)]
pub struct AuthService {
    users: UserDao,
    tokens: TokenDao,
}

impl AuthService {
    pub fn new(users: UserDao, tokens: TokenDao) -> Self {
        Self { users, tokens }
    }

    /// Unknown email, inactive account and wrong password all collapse into
    /// the same `AuthFailed`.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<user::Model, AppError> {
        let email = normalize_email(email.trim());
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AppError::AuthFailed)?;

        if !user.is_active {
            return Err(AppError::AuthFailed);
        }
        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::AuthFailed);
        }
        Ok(user)
    }

    /// Authenticates and hands back a fresh token, replacing any prior one
    /// for the same user.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self.authenticate(email, password).await?;
        let issued = self.tokens.issue_for_user(user.id).await?;
        Ok(issued.token)
    }

    /// Pure read: maps a presented token to its active owner.
    pub async fn resolve_token(&self, token: &str) -> Result<user::Model, AppError> {
        let row = self
            .tokens
            .find_by_token(token)
            .await?
            .ok_or(AppError::Unauthorized("Invalid or expired token"))?;

        let user = self
            .users
            .find_by_id(row.user_id)
            .await?
            .ok_or(AppError::Unauthorized("Invalid or expired token"))?;

        if !user.is_active {
            return Err(AppError::Unauthorized("Invalid or expired token"));
        }
        Ok(user)
    }
}
