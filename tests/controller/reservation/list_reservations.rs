use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use petlodge::server::{
    controller::reservation::list_reservations, model::session::user::SessionUserId,
};
use petlodge_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 success with the user's reservations
async fn returns_reservations_for_logged_in_user() -> Result<(), TestError> {
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

    let result = list_reservations(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found without a user in session
async fn returns_not_found_for_anonymous_session() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = list_reservations(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
