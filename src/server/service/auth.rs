use sea_orm::DatabaseConnection;

use crate::{
    model::user::LoginDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::db::UserModel,
        util::password::verify_password,
    },
};

/// Service for password authentication.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies an email and password pair.
    ///
    /// Unknown emails and wrong passwords produce the same error so a failed login does not
    /// reveal whether an account exists.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - Credentials verified
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, payload: LoginDto) -> Result<UserModel, Error> {
        let user = UserRepository::new(self.db)
            .get_by_email(payload.email.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&payload.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
