use axum::{extract::State, http::StatusCode, response::IntoResponse};
use petlodge::server::{controller::pet::list_pets, model::session::user::SessionUserId};
use petlodge_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 success with the user's pets
async fn returns_pets_for_logged_in_user() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user(TEST_EMAIL).await?;
    test.pet().insert_pet(user_model.id, "Rocky").await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = list_pets(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found without a user in session
async fn returns_not_found_for_anonymous_session() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = list_pets(State(test.app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
