use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use petlodge::{
    model::pet::UpdatePetDto,
    server::{controller::pet::update_pet, model::session::user::SessionUserId},
};
use petlodge_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 success when renaming one of the user's pets
async fn renames_owned_pet() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user(TEST_EMAIL).await?;
    let pet_model = test.pet().insert_pet(user_model.id, "Rocky").await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = update_pet(
        State(test.app_state()),
        test.session.clone(),
        Path(pet_model.id),
        Json(UpdatePetDto {
            name: Some("Rex".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when updating another user's pet
async fn returns_not_found_for_other_users_pet() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user(TEST_EMAIL).await?;
    let other_user = test.user().insert_user("other@example.com").await?;
    let pet_model = test.pet().insert_pet(other_user.id, "Bandit").await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = update_pet(
        State(test.app_state()),
        test.session.clone(),
        Path(pet_model.id),
        Json(UpdatePetDto {
            name: Some("Rex".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
