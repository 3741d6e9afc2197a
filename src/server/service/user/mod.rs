//! User service layer.
//!
//! This module contains business logic for crew accounts: registration, profile changes,
//! the crew directory and commander administration of accounts.

#[cfg(test)]
mod tests;

use entity::station_user::Role;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::{
        CreateUserDto, RegisterDto, SetPasswordDto, UpdateProfileDto, UpdateUserDto, UserDto,
    },
    server::{
        config::CommanderSeed,
        data::{
            mission::MissionRepository,
            user::{NewUser, UserRepository, UserUpdate},
            user_mission::UserMissionRepository,
        },
        error::{user::UserError, Error},
        model::db::UserModel,
        util::{
            input::required_field,
            password::{hash_password, validate_password, verify_password},
        },
    },
};

/// Service for managing crew accounts.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a crew member's public profile.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Retrieves every crew member ordered by XP, highest first.
    pub async fn get_crew(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all_by_xp().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Registers a new regular crew member.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created account
    /// - `Err(Error::Validation)` - A field is empty or the password is too short
    /// - `Err(UserError::EmailTaken)` - The email is already registered
    pub async fn register(&self, payload: RegisterDto) -> Result<UserModel, Error> {
        self.create_account(payload.name, payload.email, payload.password, Role::Regular)
            .await
    }

    /// Creates a crew member with any role on behalf of a commander.
    pub async fn create_user(&self, payload: CreateUserDto) -> Result<UserDto, Error> {
        let role = payload.role.map(Role::from).unwrap_or(Role::Regular);
        let user = self
            .create_account(payload.name, payload.email, payload.password, role)
            .await?;

        Ok(user.into())
    }

    /// Updates another crew member's account on behalf of a commander.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The updated account
    /// - `Err(UserError::NotFound)` - No user with this ID
    /// - `Err(UserError::EmailTaken)` - The new email belongs to another account
    /// - `Err(Error::Validation)` - A provided field is empty or the password is too short
    pub async fn update_user(&self, user_id: i32, payload: UpdateUserDto) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let email = payload
            .email
            .map(|email| required_field("Email", email))
            .transpose()?;
        if let Some(email) = &email {
            if user_repo.email_in_use_by_other(email, user_id).await? {
                return Err(UserError::EmailTaken.into());
            }
        }

        let password_hash = match payload.password {
            Some(password) => {
                validate_password(&password)?;
                Some(hash_password(&password)?)
            }
            None => None,
        };

        let update = UserUpdate {
            email,
            name: payload
                .name
                .map(|name| required_field("Name", name))
                .transpose()?,
            password_hash,
            role: payload.role.map(Role::from),
        };

        let user = user_repo
            .update(user_id, update)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        Ok(user.into())
    }

    /// Applies a crew member's changes to their own profile.
    ///
    /// Changing the password requires the current password to verify first.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The updated profile
    /// - `Err(UserError::CurrentPasswordRequired)` - New password given without the current one
    /// - `Err(UserError::IncorrectPassword)` - Current password did not verify
    /// - `Err(Error::Validation)` - Empty name or new password too short
    pub async fn update_profile(
        &self,
        user_id: i32,
        payload: UpdateProfileDto,
    ) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .get_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        let password_hash = match payload.new_password {
            Some(new_password) => {
                let current_password = payload
                    .current_password
                    .ok_or(UserError::CurrentPasswordRequired)?;
                if !verify_password(&current_password, &user.password_hash)? {
                    return Err(UserError::IncorrectPassword.into());
                }

                validate_password(&new_password)?;
                Some(hash_password(&new_password)?)
            }
            None => None,
        };

        let update = UserUpdate {
            name: payload
                .name
                .map(|name| required_field("Name", name))
                .transpose()?,
            password_hash,
            ..Default::default()
        };

        let user = user_repo
            .update(user.id, update)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        Ok(user.into())
    }

    /// Sets a crew member's password on behalf of a commander, no current password required.
    pub async fn set_password(&self, user_id: i32, payload: SetPasswordDto) -> Result<(), Error> {
        validate_password(&payload.new_password)?;

        let update = UserUpdate {
            password_hash: Some(hash_password(&payload.new_password)?),
            ..Default::default()
        };

        UserRepository::new(self.db)
            .update(user_id, update)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        tracing::info!(user_id = %user_id, "Password reset by commander");

        Ok(())
    }

    /// Deletes a crew member along with their mission progress in one transaction.
    ///
    /// Missions the user completed stay locked but no longer reference them.
    ///
    /// # Arguments
    /// - `actor_id` - ID of the commander performing the deletion
    /// - `user_id` - ID of the account to delete
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(UserError::SelfDeletion)` - The commander tried to delete their own account
    /// - `Err(UserError::NotFound)` - No user with this ID
    pub async fn delete_user(&self, actor_id: i32, user_id: i32) -> Result<(), Error> {
        if actor_id == user_id {
            return Err(UserError::SelfDeletion(user_id).into());
        }

        let txn = self.db.begin().await?;

        UserMissionRepository::new(&txn)
            .delete_by_user(user_id)
            .await?;
        MissionRepository::new(&txn)
            .clear_completed_by(user_id)
            .await?;
        let result = UserRepository::new(&txn).delete(user_id).await?;

        if result.rows_affected == 0 {
            return Err(UserError::NotFound(user_id).into());
        }

        txn.commit().await?;

        tracing::info!(user_id = %user_id, deleted_by = %actor_id, "Crew member deleted");

        Ok(())
    }

    /// Creates the configured commander account unless its email is already registered.
    ///
    /// # Returns
    /// - `Ok(true)` - The commander account was created
    /// - `Ok(false)` - An account with the email already exists
    pub async fn seed_commander(&self, seed: &CommanderSeed) -> Result<bool, Error> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_email(&seed.email).await?.is_some() {
            return Ok(false);
        }

        let user = self
            .create_account(
                seed.name.clone(),
                seed.email.clone(),
                seed.password.clone(),
                Role::Commander,
            )
            .await?;

        tracing::info!(user_id = %user.id, "Seeded commander account");

        Ok(true)
    }

    async fn create_account(
        &self,
        name: String,
        email: String,
        password: String,
        role: Role,
    ) -> Result<UserModel, Error> {
        let name = required_field("Name", name)?;
        let email = required_field("Email", email)?;
        validate_password(&password)?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.get_by_email(&email).await?.is_some() {
            return Err(UserError::EmailTaken.into());
        }

        let user = user_repo
            .create(NewUser {
                email,
                name,
                password_hash: hash_password(&password)?,
                role,
            })
            .await?;

        Ok(user)
    }
}
