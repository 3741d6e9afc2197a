use chrono::Utc;
use entity::station_user::Role;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_HASH_COST, TEST_PASSWORD},
    error::TestError,
    model::UserModel,
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a crew member with a generated unique email and the fixture password.
    ///
    /// The level is derived from `xp` at 500 XP per level.
    pub async fn insert_user(&mut self, role: Role, xp: i64) -> Result<UserModel, TestError> {
        self.setup.next_user += 1;
        let n = self.setup.next_user;

        self.insert_named_user(
            &format!("Crew Member {}", n),
            &format!("crew{}@station.test", n),
            role,
            xp,
        )
        .await
    }

    /// Insert a crew member with an explicit name and email.
    pub async fn insert_named_user(
        &self,
        name: &str,
        email: &str,
        role: Role,
        xp: i64,
    ) -> Result<UserModel, TestError> {
        let password_hash = bcrypt::hash(TEST_PASSWORD, TEST_HASH_COST)?;

        Ok(
            entity::prelude::StationUser::insert(entity::station_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                name: ActiveValue::Set(name.to_string()),
                password_hash: ActiveValue::Set(password_hash),
                role: ActiveValue::Set(role),
                xp: ActiveValue::Set(xp),
                level: ActiveValue::Set((xp / 500 + 1) as i32),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Fetch a crew member's current record, used to assert on XP and level changes.
    pub async fn reload(&self, user_id: i32) -> Result<Option<UserModel>, TestError> {
        Ok(entity::prelude::StationUser::find_by_id(user_id)
            .one(&self.setup.db)
            .await?)
    }

    /// Fetch every crew member ordered by ID.
    pub async fn all(&self) -> Result<Vec<UserModel>, TestError> {
        use sea_orm::QueryOrder;

        Ok(entity::prelude::StationUser::find()
            .order_by_asc(entity::station_user::Column::Id)
            .all(&self.setup.db)
            .await?)
    }
}
