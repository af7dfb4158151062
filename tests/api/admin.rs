use crate::helpers;

#[tokio::test]
async fn contacts_are_listed_newest_first() {
    let app = helpers::spawn_app_with_database().await;

    app.post_contact(&serde_json::json!({
        "name": "First Submitter",
        "email": "first@gmail.com",
        "message": "Hello"
    }))
    .await;
    app.post_contact(&serde_json::json!({
        "name": "Second Submitter",
        "email": "second@gmail.com",
        "message": "Hello again"
    }))
    .await;

    let response = app.get("/admin/contacts").await;
    assert_eq!(response.status().as_u16(), 200);

    let contacts = response.json::<serde_json::Value>().await.unwrap();
    let contacts = contacts.as_array().expect("Expected a JSON array.");
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0]["name"], "Second Submitter");
    assert_eq!(contacts[1]["name"], "First Submitter");
    assert_eq!(contacts[0]["is_read"], false);
}

#[tokio::test]
async fn subscriptions_are_listed_as_json() {
    let app = helpers::spawn_app_with_database().await;

    app.post_newsletter(&serde_json::json!({"email": "ursula_le_guin@gmail.com"}))
        .await;

    let response = app.get("/admin/newsletters").await;
    assert_eq!(response.status().as_u16(), 200);

    let subscriptions = response.json::<serde_json::Value>().await.unwrap();
    let subscriptions = subscriptions.as_array().expect("Expected a JSON array.");
    assert_eq!(subscriptions.len(), 1);
    assert_eq!(subscriptions[0]["email"], "ursula_le_guin@gmail.com");
    assert_eq!(subscriptions[0]["is_active"], true);
}

#[tokio::test]
async fn marking_a_contact_as_read_flips_the_flag() {
    let app = helpers::spawn_app_with_database().await;

    app.post_contact(&serde_json::json!({
        "name": "Ursula Le Guin",
        "email": "ursula_le_guin@gmail.com",
        "message": "Hello"
    }))
    .await;

    let contacts = app
        .get("/admin/contacts")
        .await
        .json::<serde_json::Value>()
        .await
        .unwrap();
    let contact_id = contacts[0]["id"].as_str().expect("Missing contact id.");

    let response = app
        .post(&format!("/admin/contacts/{}/read", contact_id))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["message"], "Contact marked as read");

    let contacts = app
        .get("/admin/contacts")
        .await
        .json::<serde_json::Value>()
        .await
        .unwrap();
    assert_eq!(contacts[0]["is_read"], true);
}

#[tokio::test]
async fn marking_an_unknown_contact_as_read_returns_404() {
    let app = helpers::spawn_app_with_database().await;

    let response = app
        .post(&format!("/admin/contacts/{}/read", uuid::Uuid::new_v4()))
        .await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn empty_listings_are_empty_arrays() {
    let app = helpers::spawn_app_with_database().await;

    let contacts = app
        .get("/admin/contacts")
        .await
        .json::<serde_json::Value>()
        .await
        .unwrap();
    assert_eq!(contacts, serde_json::json!([]));

    let subscriptions = app
        .get("/admin/newsletters")
        .await
        .json::<serde_json::Value>()
        .await
        .unwrap();
    assert_eq!(subscriptions, serde_json::json!([]));
}
