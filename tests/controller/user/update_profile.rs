use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use petlodge::{
    model::user::UpdateProfileDto,
    server::{controller::user::update_profile, model::session::user::SessionUserId},
};
use petlodge_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 success with the updated display name
async fn updates_display_name() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user(TEST_EMAIL).await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = update_profile(
        State(test.app_state()),
        test.session.clone(),
        Json(UpdateProfileDto {
            name: "Renamed User".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a blank display name
async fn returns_bad_request_for_blank_name() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user(TEST_EMAIL).await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = update_profile(
        State(test.app_state()),
        test.session.clone(),
        Json(UpdateProfileDto {
            name: "   ".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found without a user in session
async fn returns_not_found_for_anonymous_session() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = update_profile(
        State(test.app_state()),
        test.session.clone(),
        Json(UpdateProfileDto {
            name: "Renamed User".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
