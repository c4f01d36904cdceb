//! End-to-end walk through the three wizard steps over HTTP.

use axum::http::StatusCode;
use booking_wizard::routes::routes;
use serde_json::json;

use fixtures::*;

#[tokio::test]
async fn test_complete_booking_flow() {
    let app = routes(create_strict_config());
    let id = start_session(&app).await;

    // Step 1: user details
    let (status, body) = send(
        &app,
        post_json(&format!("/booking/sessions/{id}/user-info"), &valid_user_info()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "paymentinfo");
    assert_eq!(body["state"]["userInfo"], valid_user_info());
    assert!(body["state"]["paymentInfo"].is_null());

    // Step 2: payment details
    let (status, body) = send(
        &app,
        post_json(
            &format!("/booking/sessions/{id}/payment-info"),
            &valid_payment_info(),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "success");
    assert_eq!(body["state"]["userInfo"]["fullName"], "John Doe");
    assert_eq!(
        body["state"]["paymentInfo"],
        json!({
            "cardNumber": "**** 1111",
            "expiryDate": "12/25",
            "billingZip": "12345",
            "acceptedPolicy": true
        })
    );

    // Step 3: success is terminal
    let (status, _) = send(
        &app,
        post_json(&format!("/booking/sessions/{id}/user-info"), &valid_user_info()),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(&app, get(&format!("/booking/sessions/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "success");
}

#[tokio::test]
async fn test_correcting_invalid_input_then_advancing() {
    let app = routes(create_strict_config());
    let id = start_session(&app).await;

    let mut user = valid_user_info();
    user["email"] = json!("not-an-email");
    user["phone"] = json!("123-456-7890");
    let (status, body) = send(
        &app,
        post_json(&format!("/booking/sessions/{id}/user-info"), &user),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["errors"],
        json!({
            "email": { "message": "Please enter a valid email address" },
            "phone": { "message": "Phone number must be 10 digits" }
        })
    );

    let (status, body) = send(
        &app,
        post_json(&format!("/booking/sessions/{id}/user-info"), &valid_user_info()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "paymentinfo");
}

#[tokio::test]
async fn test_card_checksum_enforced_by_default() {
    let app = routes(create_strict_config());
    let id = start_session(&app).await;
    send(
        &app,
        post_json(&format!("/booking/sessions/{id}/user-info"), &valid_user_info()),
    )
    .await;

    let (status, body) = send(
        &app,
        post_json(
            &format!("/booking/sessions/{id}/payment-info"),
            &bad_checksum_payment_info(),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({ "errors": { "cardNumber": { "message": "Invalid card number" } } })
    );
}

#[tokio::test]
async fn test_card_checksum_skipped_when_disabled() {
    let app = routes(create_relaxed_config());
    let id = start_session(&app).await;
    send(
        &app,
        post_json(&format!("/booking/sessions/{id}/user-info"), &valid_user_info()),
    )
    .await;

    let (status, body) = send(
        &app,
        post_json(
            &format!("/booking/sessions/{id}/payment-info"),
            &bad_checksum_payment_info(),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "success");
    assert_eq!(body["state"]["paymentInfo"]["cardNumber"], "**** 1112");
}
