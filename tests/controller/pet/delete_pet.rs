use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use petlodge::server::{controller::pet::delete_pet, model::session::user::SessionUserId};
use petlodge_test_utils::prelude::*;

#[tokio::test]
/// Expect 204 no content when deleting a pet without pending reservations
async fn deletes_owned_pet() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user(TEST_EMAIL).await?;
    let pet_model = test.pet().insert_pet(user_model.id, "Rocky").await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = delete_pet(
        State(test.app_state()),
        test.session.clone(),
        Path(pet_model.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when the pet still has a pending reservation
async fn returns_conflict_for_pending_reservation() -> Result<(), TestError> {
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

    let result = delete_pet(
        State(test.app_state()),
        test.session.clone(),
        Path(pet_model.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when deleting another user's pet
async fn returns_not_found_for_other_users_pet() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user(TEST_EMAIL).await?;
    let other_user = test.user().insert_user("other@example.com").await?;
    let pet_model = test.pet().insert_pet(other_user.id, "Bandit").await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = delete_pet(
        State(test.app_state()),
        test.session.clone(),
        Path(pet_model.id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
