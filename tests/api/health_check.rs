use crate::helpers;

#[tokio::test]
async fn health_check_works() {
    let app = helpers::spawn_app().await;
    // Now the server is running and we can proceed with our test logic

    // With reqwest, we approach it as a user would, performing requests
    // from outside.
    let response = app.get("/health").await;

    assert!(response.status().is_success());
    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse response body.");
    assert_eq!(body, serde_json::json!({"status": "healthy"}));
}
