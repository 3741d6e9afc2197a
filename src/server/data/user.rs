use chrono::Utc;
use entity::station_user::Role;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::util::level::{level_for_xp, XP_PER_LEVEL};

/// Fields accepted when creating a crew member.
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: Role,
}

/// Partial update of a crew member, `None` leaves the column untouched.
#[derive(Default)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user starting with 0 XP at level 1
    pub async fn create(&self, user: NewUser) -> Result<entity::station_user::Model, DbErr> {
        let user = entity::station_user::ActiveModel {
            email: ActiveValue::Set(user.email),
            name: ActiveValue::Set(user.name),
            password_hash: ActiveValue::Set(user.password_hash),
            role: ActiveValue::Set(user.role),
            xp: ActiveValue::Set(0),
            level: ActiveValue::Set(level_for_xp(0)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::station_user::Model>, DbErr> {
        entity::prelude::StationUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::station_user::Model>, DbErr> {
        entity::prelude::StationUser::find()
            .filter(entity::station_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Returns true if a user other than `user_id` already uses `email`
    pub async fn email_in_use_by_other(&self, email: &str, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::StationUser::find()
            .filter(entity::station_user::Column::Email.eq(email))
            .filter(entity::station_user::Column::Id.ne(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all users ordered by XP descending, ties broken by ID
    pub async fn get_all_by_xp(&self) -> Result<Vec<entity::station_user::Model>, DbErr> {
        entity::prelude::StationUser::find()
            .order_by_desc(entity::station_user::Column::Xp)
            .order_by_asc(entity::station_user::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::StationUser::find().count(self.db).await
    }

    pub async fn update(
        &self,
        user_id: i32,
        update: UserUpdate,
    ) -> Result<Option<entity::station_user::Model>, DbErr> {
        let user = match entity::prelude::StationUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        if let Some(email) = update.email {
            user_am.email = ActiveValue::Set(email);
        }
        if let Some(name) = update.name {
            user_am.name = ActiveValue::Set(name);
        }
        if let Some(password_hash) = update.password_hash {
            user_am.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(role) = update.role {
            user_am.role = ActiveValue::Set(role);
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::StationUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }

    /// Adds `amount` XP to every user with a single in-place increment
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users credited
    pub async fn credit_xp_to_all(&self, amount: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::StationUser::update_many()
            .col_expr(
                entity::station_user::Column::Xp,
                Expr::col(entity::station_user::Column::Xp).add(amount),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Recomputes every user's level from their current XP with a single statement
    pub async fn recompute_levels(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::StationUser::update_many()
            .col_expr(
                entity::station_user::Column::Level,
                Expr::col(entity::station_user::Column::Xp)
                    .div(XP_PER_LEVEL)
                    .add(1),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Resets every user to 0 XP at level 1
    pub async fn reset_all_progress(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::StationUser::update_many()
            .col_expr(entity::station_user::Column::Xp, Expr::value(0i64))
            .col_expr(
                entity::station_user::Column::Level,
                Expr::value(level_for_xp(0)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
