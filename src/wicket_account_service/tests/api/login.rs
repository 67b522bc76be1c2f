use crate::helpers::{TEST_PASSWORD, TEST_USERNAME, TestApp};
use wicket_adapters::{auth::validate_session_token, http::routes::LoginResponse};

#[tokio::test]
async fn login_with_configured_credentials_returns_a_valid_token() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&serde_json::json!({
            "username": TEST_USERNAME,
            "password": TEST_PASSWORD,
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: LoginResponse = response.json().await.unwrap();

    let claims = validate_session_token(&body.token, &app.token_config).unwrap();
    assert_eq!(claims.sub, TEST_USERNAME);
}

#[tokio::test]
async fn login_rejects_a_wrong_password() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&serde_json::json!({
            "username": TEST_USERNAME,
            "password": "a guess",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn login_rejects_an_unknown_username() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&serde_json::json!({
            "username": "root",
            "password": TEST_PASSWORD,
        }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn login_rejects_empty_credentials_with_401_not_400() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&serde_json::json!({
            "username": "",
            "password": "",
        }))
        .await;

    // no pre-validation on this surface; empty inputs fail the comparison
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn login_with_missing_fields_is_unprocessable() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&serde_json::json!({ "username": TEST_USERNAME }))
        .await;

    assert_eq!(response.status().as_u16(), 422);
}
