use entity::station_user_mission::MissionStatus;
use starbase::{
    model::mission::{CreateMissionDto, UpdateMissionDto},
    server::controller::mission::{
        complete_mission, create_mission, delete_mission, get_mission, list_missions,
        reset_missions, retry_mission, start_mission, update_mission,
    },
};

use super::*;

fn new_mission(title: &str) -> CreateMissionDto {
    CreateMissionDto {
        title: title.to_string(),
        description: "Chart the debris field".to_string(),
        location: "Lagrange Point 2".to_string(),
        duration: "3 hours".to_string(),
        difficulty: None,
        xp_reward: Some(150),
        min_level: None,
    }
}

mod list_missions {
    use super::*;

    /// Expect 200 success for a signed-in crew member
    #[tokio::test]
    async fn returns_missions_for_signed_in_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Regular, 0)
            .with_mission(100)
            .with_mission(200)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = list_missions(State(test.app_state()), test.session.clone()).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        Ok(())
    }

    /// Expect 401 unauthorized without a user in session
    #[tokio::test]
    async fn returns_unauthorized_without_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_station_tables().build().await?;

        let result = list_missions(State(test.app_state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod get_mission {
    use super::*;

    /// Expect 404 not found for a mission that does not exist
    #[tokio::test]
    async fn returns_not_found_for_unknown_id() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Regular, 0)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = get_mission(State(test.app_state()), test.session.clone(), Path(999)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod create_mission {
    use super::*;

    /// Expect 201 created when a commander creates a mission
    #[tokio::test]
    async fn returns_created_for_commander() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Commander, 0)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = create_mission(
            State(test.app_state()),
            test.session.clone(),
            Json(new_mission("Debris Survey")),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        Ok(())
    }

    /// Expect 403 forbidden when a regular crew member attempts to create a mission
    #[tokio::test]
    async fn returns_forbidden_for_regular_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Regular, 0)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = create_mission(
            State(test.app_state()),
            test.session.clone(),
            Json(new_mission("Debris Survey")),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect 400 bad request for a blank title
    #[tokio::test]
    async fn returns_bad_request_for_blank_title() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Commander, 0)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = create_mission(
            State(test.app_state()),
            test.session.clone(),
            Json(new_mission("   ")),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod update_mission {
    use super::*;

    /// Expect 400 bad request for a non-positive reward
    #[tokio::test]
    async fn returns_bad_request_for_zero_reward() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Commander, 0)
            .with_mission(100)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = update_mission(
            State(test.app_state()),
            test.session.clone(),
            Path(test.missions[0].id),
            Json(UpdateMissionDto {
                xp_reward: Some(0),
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

mod delete_mission {
    use super::*;

    /// Expect 200 success and the mission's progress records removed
    #[tokio::test]
    async fn deletes_mission_and_progress() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Commander, 0)
            .with_user(Role::Regular, 0)
            .with_mission(100)
            .build()
            .await?;
        let mission_id = test.missions[0].id;
        let regular_id = test.users[1].id;
        test.mission()
            .insert_progress(regular_id, mission_id, MissionStatus::InProgress, 0)
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = delete_mission(
            State(test.app_state()),
            test.session.clone(),
            Path(mission_id),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(test.mission().reload(mission_id).await?.is_none());
        assert_eq!(test.mission().count_progress(mission_id).await?, 0);

        Ok(())
    }
}

mod start_mission {
    use super::*;

    /// Expect 200 success when starting an available mission
    #[tokio::test]
    async fn returns_success_for_available_mission() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Regular, 0)
            .with_mission(100)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = start_mission(
            State(test.app_state()),
            test.session.clone(),
            Path(test.missions[0].id),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        Ok(())
    }

    /// Expect 400 bad request when the mission was already completed by someone
    #[tokio::test]
    async fn returns_bad_request_for_completed_mission() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Regular, 0)
            .with_user(Role::Pilot, 0)
            .build()
            .await?;
        let pilot_id = test.users[1].id;
        let mission = test
            .mission()
            .insert_completed_mission(100, pilot_id)
            .await?;
        test.sign_in(test.users[0].id).await;

        let result =
            start_mission(State(test.app_state()), test.session.clone(), Path(mission.id)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod complete_mission {
    use super::*;

    /// Expect 200 success on the first completion and 400 bad request on the second
    #[tokio::test]
    async fn second_completion_is_rejected() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Regular, 0)
            .with_user(Role::Pilot, 400)
            .with_mission(200)
            .build()
            .await?;
        let mission_id = test.missions[0].id;
        let pilot_id = test.users[1].id;
        test.sign_in(test.users[0].id).await;

        let first = complete_mission(
            State(test.app_state()),
            test.session.clone(),
            Path(mission_id),
        )
        .await;

        assert!(first.is_ok());
        let resp = first.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let second = complete_mission(
            State(test.app_state()),
            test.session.clone(),
            Path(mission_id),
        )
        .await;

        assert!(second.is_err());
        let resp = second.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        // Only the first completion credited the crew
        let pilot = test.user().reload(pilot_id).await?.unwrap();
        assert_eq!(pilot.xp, 600);
        assert_eq!(pilot.level, 2);

        Ok(())
    }

    /// Expect 404 not found for a mission that does not exist
    #[tokio::test]
    async fn returns_not_found_for_unknown_id() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Regular, 0)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result =
            complete_mission(State(test.app_state()), test.session.clone(), Path(999)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod retry_mission {
    use super::*;

    /// Expect 404 not found when the mission was never started
    #[tokio::test]
    async fn returns_not_found_without_progress() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Regular, 0)
            .with_mission(100)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = retry_mission(
            State(test.app_state()),
            test.session.clone(),
            Path(test.missions[0].id),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 200 success when resetting a failed attempt
    #[tokio::test]
    async fn returns_success_for_failed_progress() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Regular, 0)
            .with_mission(100)
            .build()
            .await?;
        let user_id = test.users[0].id;
        let mission_id = test.missions[0].id;
        test.mission()
            .insert_progress(user_id, mission_id, MissionStatus::Failed, 0)
            .await?;
        test.sign_in(user_id).await;

        let result = retry_mission(
            State(test.app_state()),
            test.session.clone(),
            Path(mission_id),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let progress = test.mission().progress(user_id, mission_id).await?.unwrap();
        assert_eq!(progress.status, MissionStatus::InProgress);

        Ok(())
    }
}

mod reset_missions {
    use super::*;

    /// Expect 403 forbidden when a pilot attempts a reset
    #[tokio::test]
    async fn returns_forbidden_for_pilot() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Pilot, 600)
            .build()
            .await?;
        test.sign_in(test.users[0].id).await;

        let result = reset_missions(State(test.app_state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect 200 success and every crew member back at 0 XP and level 1
    #[tokio::test]
    async fn resets_crew_for_commander() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_station_tables()
            .with_user(Role::Commander, 1500)
            .with_user(Role::Regular, 700)
            .build()
            .await?;
        let commander_id = test.users[0].id;
        let mission = test
            .mission()
            .insert_completed_mission(200, commander_id)
            .await?;
        test.sign_in(commander_id).await;

        let result = reset_missions(State(test.app_state()), test.session.clone()).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let state: Vec<(i64, i32)> = test
            .user()
            .all()
            .await?
            .iter()
            .map(|u| (u.xp, u.level))
            .collect();
        assert_eq!(state, vec![(0, 1), (0, 1)]);

        let mission = test.mission().reload(mission.id).await?.unwrap();
        assert!(!mission.is_completed);
        assert!(mission.completed_by.is_none());

        Ok(())
    }
}
