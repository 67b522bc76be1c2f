use crate::helpers::TestApp;
use wicket_adapters::http::routes::{AccountResponse, ErrorResponse, UpdateAccountResponse};

#[tokio::test]
async fn get_returns_404_for_unknown_account() {
    let app = TestApp::new().await;

    let response = app.get_account("missing-id").await;

    assert_eq!(response.status().as_u16(), 404);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error, "Account not found");
}

#[tokio::test]
async fn get_returns_the_stored_account() {
    let app = TestApp::new().await;
    let id = app.seed_account("field notes", "jane@example.com").await;

    let response = app.get_account(id.as_str()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: AccountResponse = response.json().await.unwrap();
    assert_eq!(body.id, id.as_str());
    assert_eq!(body.data, "field notes");
    assert_eq!(body.email, "jane@example.com");
}

#[tokio::test]
async fn update_returns_400_when_no_account_matches() {
    let app = TestApp::new().await;

    let response = app
        .put_account("missing-id", &serde_json::json!({ "data": "replacement" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn update_rewrites_data_and_confirms_with_the_new_value() {
    let app = TestApp::new().await;
    let id = app.seed_account("before", "holder@example.com").await;

    let response = app
        .put_account(id.as_str(), &serde_json::json!({ "data": "after" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: UpdateAccountResponse = response.json().await.unwrap();
    assert_eq!(body.id, id.as_str());
    assert_eq!(body.data, "after");

    let fetched: AccountResponse = app.get_account(id.as_str()).await.json().await.unwrap();
    assert_eq!(fetched.data, "after");
}

#[tokio::test]
async fn update_with_missing_data_field_is_unprocessable() {
    let app = TestApp::new().await;
    let id = app.seed_account("before", "holder@example.com").await;

    let response = app.put_account(id.as_str(), &serde_json::json!({})).await;

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn account_lifecycle_end_to_end() {
    let app = TestApp::new().await;

    // empty store: lookups miss and updates are refused
    assert_eq!(app.get_account("42").await.status().as_u16(), 404);
    let refused = app
        .put_account("42", &serde_json::json!({ "data": "value" }))
        .await;
    assert_eq!(refused.status().as_u16(), 400);

    // after the row exists the same update goes through and is readable
    let id = app.seed_account("initial", "cycle@example.com").await;
    let updated = app
        .put_account(id.as_str(), &serde_json::json!({ "data": "value" }))
        .await;
    assert_eq!(updated.status().as_u16(), 200);

    let body: AccountResponse = app.get_account(id.as_str()).await.json().await.unwrap();
    assert_eq!(body.data, "value");
}
