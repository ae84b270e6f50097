use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{Days, NaiveDate, Utc};
use petlodge::{
    model::reservation::CreateReservationDto,
    server::{controller::reservation::create_reservation, model::session::user::SessionUserId},
};
use petlodge_test_utils::prelude::*;

fn upcoming_range(start_in_days: u64, nights: u64) -> (NaiveDate, NaiveDate) {
    let check_in = Utc::now()
        .date_naive()
        .checked_add_days(Days::new(start_in_days))
        .unwrap();
    let check_out = check_in.checked_add_days(Days::new(nights)).unwrap();

    (check_in, check_out)
}

#[tokio::test]
/// Expect 201 created for a valid booking
async fn returns_created_for_valid_booking() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user(TEST_EMAIL).await?;
    let pet_model = test.pet().insert_pet(user_model.id, "Rocky").await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let (check_in, check_out) = upcoming_range(7, 3);
    let result = create_reservation(
        State(test.app_state()),
        test.session.clone(),
        Json(CreateReservationDto {
            pet_id: pet_model.id,
            check_in,
            check_out,
            notes: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when the stay overlaps an existing booking
async fn returns_conflict_for_overlapping_stay() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user(TEST_EMAIL).await?;
    let pet_model = test.pet().insert_pet(user_model.id, "Rocky").await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let (check_in, check_out) = upcoming_range(7, 5);
    test.reservation()
        .insert_reservation(pet_model.id, check_in, check_out)
        .await?;

    let (overlap_in, overlap_out) = upcoming_range(9, 5);
    let result = create_reservation(
        State(test.app_state()),
        test.session.clone(),
        Json(CreateReservationDto {
            pet_id: pet_model.id,
            check_in: overlap_in,
            check_out: overlap_out,
            notes: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 bad request when check-out is not after check-in
async fn returns_bad_request_for_zero_night_stay() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user(TEST_EMAIL).await?;
    let pet_model = test.pet().insert_pet(user_model.id, "Rocky").await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let (check_in, _) = upcoming_range(7, 3);
    let result = create_reservation(
        State(test.app_state()),
        test.session.clone(),
        Json(CreateReservationDto {
            pet_id: pet_model.id,
            check_in,
            check_out: check_in,
            notes: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when booking for another user's pet
async fn returns_not_found_for_other_users_pet() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;
    let user_model = test.user().insert_user(TEST_EMAIL).await?;
    let other_user = test.user().insert_user("other@example.com").await?;
    let pet_model = test.pet().insert_pet(other_user.id, "Bandit").await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let (check_in, check_out) = upcoming_range(7, 3);
    let result = create_reservation(
        State(test.app_state()),
        test.session.clone(),
        Json(CreateReservationDto {
            pet_id: pet_model.id,
            check_in,
            check_out,
            notes: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
