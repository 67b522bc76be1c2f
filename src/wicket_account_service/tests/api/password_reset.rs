use crate::helpers::TestApp;
use secrecy::Secret;
use wicket_adapters::http::routes::PasswordResetResponse;
use wicket_core::Password;

#[tokio::test]
async fn reset_rejects_malformed_emails() {
    let app = TestApp::new().await;

    for email in ["", "not-an-email", "a@b", "two words@example.com"] {
        let response = app
            .post_password_reset(&serde_json::json!({ "email": email }))
            .await;

        assert_eq!(response.status().as_u16(), 400, "email case: {email:?}");
    }
}

#[tokio::test]
async fn reset_for_unknown_email_returns_404() {
    let app = TestApp::new().await;
    app.seed_account("data", "known@example.com").await;

    let response = app
        .post_password_reset(&serde_json::json!({ "email": "unknown@example.com" }))
        .await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn reset_returns_a_fresh_policy_conforming_password() {
    let app = TestApp::new().await;
    app.seed_account("data", "holder@example.com").await;

    let response = app
        .post_password_reset(&serde_json::json!({ "email": "holder@example.com" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: PasswordResetResponse = response.json().await.unwrap();
    assert_eq!(body.password.len(), 16);
    assert!(body.password.chars().all(|c| c.is_ascii_alphanumeric()));
    assert!(Password::parse(Secret::from(body.password)).is_ok());
}

#[tokio::test]
async fn consecutive_resets_hand_out_different_passwords() {
    let app = TestApp::new().await;
    app.seed_account("data", "repeat@example.com").await;
    let request = serde_json::json!({ "email": "repeat@example.com" });

    let first: PasswordResetResponse = app
        .post_password_reset(&request)
        .await
        .json()
        .await
        .unwrap();
    let second: PasswordResetResponse = app
        .post_password_reset(&request)
        .await
        .json()
        .await
        .unwrap();

    assert_ne!(first.password, second.password);
}
