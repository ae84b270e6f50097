use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use petlodge::server::{controller::user::delete_profile, model::session::user::SessionUserId};
use petlodge_test_utils::prelude::*;
use sea_orm::EntityTrait;

#[tokio::test]
/// Expect 204 no content and the account's data to be gone
async fn deletes_account_with_pets_and_reservations() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user(TEST_EMAIL).await?;
    let pet_model = test.pet().insert_pet(user_model.id, "Rocky").await?;
    test.reservation()
        .insert_reservation(
            pet_model.id,
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 5).unwrap(),
        )
        .await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = delete_profile(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // The account and its data are gone, and the session is cleared
    let remaining_users = entity::prelude::PetlodgeUser::find()
        .all(&test.state.db)
        .await?;
    assert!(remaining_users.is_empty());
    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 404 not found without a user in session
async fn returns_not_found_for_anonymous_session() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = delete_profile(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
