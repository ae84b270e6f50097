use axum::{extract::State, response::IntoResponse, Json};
use axum::http::StatusCode;
use petlodge::{
    model::user::RegisterUserDto,
    server::{controller::auth::register, model::session::user::SessionUserId},
};
use petlodge_test_utils::prelude::*;

fn register_dto(email: &str, password: &str) -> RegisterUserDto {
    RegisterUserDto {
        email: email.to_string(),
        name: "Test User".to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
/// Expect 201 created and a logged-in session for a new account
async fn returns_created_for_new_account() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = register(
        State(test.app_state()),
        test.session.clone(),
        Json(register_dto(TEST_EMAIL, TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    // The new account is logged in
    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when the email is already registered
async fn returns_conflict_for_taken_email() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    test.user().insert_user(TEST_EMAIL).await?;

    let result = register(
        State(test.app_state()),
        test.session.clone(),
        Json(register_dto(TEST_EMAIL, TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request for a password under 8 characters
async fn returns_bad_request_for_short_password() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = register(
        State(test.app_state()),
        test.session.clone(),
        Json(register_dto(TEST_EMAIL, "short12")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required database tables dont exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = register(
        State(test.app_state()),
        test.session.clone(),
        Json(register_dto(TEST_EMAIL, TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
