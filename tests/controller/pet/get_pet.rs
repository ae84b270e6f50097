use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use petlodge::server::{controller::pet::get_pet, model::session::user::SessionUserId};
use petlodge_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 success for one of the user's own pets
async fn returns_owned_pet() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user(TEST_EMAIL).await?;
    let pet_model = test.pet().insert_pet(user_model.id, "Rocky").await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = get_pet(
        State(test.app_state()),
        test.session.clone(),
        Path(pet_model.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for another user's pet
async fn returns_not_found_for_other_users_pet() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user(TEST_EMAIL).await?;
    let other_user = test.user().insert_user("other@example.com").await?;
    let pet_model = test.pet().insert_pet(other_user.id, "Bandit").await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = get_pet(
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

#[tokio::test]
/// Expect 404 not found for a pet ID that does not exist
async fn returns_not_found_for_nonexistent_pet() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user(TEST_EMAIL).await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let nonexistent_pet_id = 42;
    let result = get_pet(
        State(test.app_state()),
        test.session.clone(),
        Path(nonexistent_pet_id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
