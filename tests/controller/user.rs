use starbase::{
    model::user::{CreateUserDto, RoleDto, SetPasswordDto, UpdateProfileDto, UpdateUserDto},
    server::controller::user::{
        create_crew_member, delete_crew_member, get_crew, get_crew_member, get_profile,
        set_crew_password, update_crew_member, update_profile,
    },
};
use starbase_test_utils::constant::TEST_PASSWORD;

use super::*;

mod get_profile {
    use super::*;

    /// Expect 200 success with the signed-in crew member's profile
    #[tokio::test]
    async fn returns_own_profile() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Pilot, 700)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = get_profile(State(test.app_state()), test.session.clone()).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        Ok(())
    }

    /// Expect 401 unauthorized without a user in session
    #[tokio::test]
    async fn returns_unauthorized_without_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_station_tables().build().await?;

        let result = get_profile(State(test.app_state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod update_profile {
    use super::*;

    /// Expect 200 success when changing the password with the correct current password
    #[tokio::test]
    async fn changes_password_with_current_password() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Regular, 0)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = update_profile(
            State(test.app_state()),
            test.session.clone(),
            Json(UpdateProfileDto {
                current_password: Some(TEST_PASSWORD.to_string()),
                new_password: Some("new-orbit-password".to_string()),
                ..Default::default()
            }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        Ok(())
    }

    /// Expect 400 bad request when the current password is wrong
    #[tokio::test]
    async fn returns_bad_request_for_incorrect_password() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Regular, 0)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = update_profile(
            State(test.app_state()),
            test.session.clone(),
            Json(UpdateProfileDto {
                current_password: Some("wrong-password".to_string()),
                new_password: Some("new-orbit-password".to_string()),
                ..Default::default()
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod get_crew {
    use super::*;

    /// Expect 200 success listing the crew for any signed-in role
    #[tokio::test]
    async fn returns_crew_for_regular_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Regular, 0)
            .with_user(Role::Commander, 1200)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = get_crew(State(test.app_state()), test.session.clone()).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        Ok(())
    }
}

mod get_crew_member {
    use super::*;

    /// Expect 404 not found for a crew member that does not exist
    #[tokio::test]
    async fn returns_not_found_for_unknown_id() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Regular, 0)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = get_crew_member(State(test.app_state()), test.session.clone(), Path(999)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod create_crew_member {
    use super::*;

    fn payload() -> CreateUserDto {
        CreateUserDto {
            name: "Flight Officer Reyes".to_string(),
            email: "reyes@station.test".to_string(),
            password: "launchpad".to_string(),
            role: Some(RoleDto::Pilot),
        }
    }

    /// Expect 201 created when a commander creates a crew member
    #[tokio::test]
    async fn returns_created_for_commander() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Commander, 0)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result =
            create_crew_member(State(test.app_state()), test.session.clone(), Json(payload()))
                .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        Ok(())
    }

    /// Expect 403 forbidden when a pilot attempts to create a crew member
    #[tokio::test]
    async fn returns_forbidden_for_pilot() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Pilot, 0)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result =
            create_crew_member(State(test.app_state()), test.session.clone(), Json(payload()))
                .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }
}

mod update_crew_member {
    use super::*;

    /// Expect 400 bad request when moving a crew member onto another member's email
    #[tokio::test]
    async fn returns_bad_request_for_taken_email() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Commander, 0)
            .with_user(Role::Regular, 0)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = update_crew_member(
            State(test.app_state()),
            test.session.clone(),
            Path(test.users[1].id),
            Json(UpdateUserDto {
                email: Some(test.users[0].email.clone()),
                ..Default::default()
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod delete_crew_member {
    use super::*;

    /// Expect 200 success when a commander deletes another crew member
    #[tokio::test]
    async fn returns_success_for_other_user() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Commander, 0)
            .with_user(Role::Regular, 0)
            .build()
            .await?;
        let target_id = test.users[1].id;
        test.sign_in(test.users[0].id).await;

        let result = delete_crew_member(
            State(test.app_state()),
            test.session.clone(),
            Path(target_id),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(test.user().reload(target_id).await?.is_none());

        Ok(())
    }

    /// Expect 400 bad request when a commander attempts to delete themselves
    #[tokio::test]
    async fn returns_bad_request_for_self_deletion() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Commander, 0)
            .build()
            .await?;
        let commander_id = test.users[0].id;
        test.sign_in(commander_id).await;

        let result = delete_crew_member(
            State(test.app_state()),
            test.session.clone(),
            Path(commander_id),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(test.user().reload(commander_id).await?.is_some());

        Ok(())
    }

    /// Expect 404 not found when the crew member does not exist
    #[tokio::test]
    async fn returns_not_found_for_unknown_id() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Commander, 0)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result =
            delete_crew_member(State(test.app_state()), test.session.clone(), Path(999)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod set_crew_password {
    use super::*;

    /// Expect 200 success when a commander sets another member's password
    #[tokio::test]
    async fn returns_success_for_commander() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Commander, 0)
            .with_user(Role::Regular, 0)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = set_crew_password(
            State(test.app_state()),
            test.session.clone(),
            Path(test.users[1].id),
            Json(SetPasswordDto {
                new_password: "fresh-password".to_string(),
            }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        Ok(())
    }

    /// Expect 400 bad request for a password shorter than six characters
    #[tokio::test]
    async fn returns_bad_request_for_short_password() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Commander, 0)
            .with_user(Role::Regular, 0)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = set_crew_password(
            State(test.app_state()),
            test.session.clone(),
            Path(test.users[1].id),
            Json(SetPasswordDto {
                new_password: "abc".to_string(),
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}
