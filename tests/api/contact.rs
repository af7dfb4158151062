use sqlx::Row;

use crate::helpers;

#[tokio::test]
async fn contact_returns_400_with_a_field_error_when_name_is_missing() {
    let app = helpers::spawn_app().await;

    let body = serde_json::json!({
        "email": "ursula_le_guin@gmail.com",
        "message": "I would like to discuss a project."
    });
    let response = app.post_contact(&body).await;

    assert_eq!(response.status().as_u16(), 400);
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["status"], "error");
    assert_eq!(body["errors"]["name"][0], "This field is required.");
}

#[tokio::test]
async fn contact_returns_400_for_invalid_data() {
    let app = helpers::spawn_app().await;
    let test_cases = vec![
        (
            serde_json::json!({
                "name": "Ursula",
                "email": "not-an-email",
                "message": "Hello"
            }),
            "email",
            "malformed email",
        ),
        (
            serde_json::json!({
                "name": "Ursula",
                "email": "ursula_le_guin@gmail.com",
                "message": "   "
            }),
            "message",
            "blank message",
        ),
        (
            serde_json::json!({
                "name": "   ",
                "email": "ursula_le_guin@gmail.com",
                "message": "Hello"
            }),
            "name",
            "blank name",
        ),
    ];

    for (invalid_body, field, description) in test_cases {
        let response = app.post_contact(&invalid_body).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "The API did not fail with 400 Bad Request when the payload had a {}.",
            description
        );
        let body = response.json::<serde_json::Value>().await.unwrap();
        assert!(
            body["errors"][field].is_array(),
            "No field error for `{}` when the payload had a {}.",
            field,
            description
        );
    }
}

#[tokio::test]
async fn names_with_punctuation_are_accepted() {
    let app = helpers::spawn_app().await;

    let body = serde_json::json!({
        "name": "Alice (Sales)",
        "email": "alice@gmail.com",
        "message": "I would like to discuss a project."
    });
    let response = app.post_contact(&body).await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn the_validation_summary_lists_fields_in_form_order() {
    let app = helpers::spawn_app().await;

    let body = serde_json::json!({
        "name": "",
        "email": "not-an-email",
        "message": "Hello"
    });
    let response = app.post_contact(&body).await;

    assert_eq!(response.status().as_u16(), 400);
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(
        body["message"],
        "Please correct the following errors: \
         Name: This field is required.; Email: Invalid email address."
    );
}

#[tokio::test]
async fn a_valid_submission_returns_200_even_when_the_store_is_unavailable() {
    // spawn_app points the application at a database that does not exist:
    // persistence and notification both fail, the caller still gets a 200.
    let app = helpers::spawn_app().await;

    let body = serde_json::json!({
        "name": "Ursula Le Guin",
        "email": "ursula_le_guin@gmail.com",
        "message": "I would like to discuss a project."
    });
    let response = app.post_contact(&body).await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(
        body["message"],
        "Thank you for your message! We will get back to you soon."
    );
}

#[tokio::test]
async fn contact_accepts_form_encoded_submissions() {
    let app = helpers::spawn_app().await;

    let response = app
        .post_contact_form(&[
            ("name", "Ursula Le Guin"),
            ("email", "ursula_le_guin@gmail.com"),
            ("message", "I would like to discuss a project."),
        ])
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["status"], "success");
}

#[tokio::test]
async fn a_valid_submission_is_persisted() {
    let app = helpers::spawn_app_with_database().await;

    let body = serde_json::json!({
        "name": "Ursula Le Guin",
        "email": " Ursula_Le_Guin@Gmail.com ",
        "message": "I would like to discuss a project.",
        "subject": "Project inquiry"
    });
    let response = app.post_contact(&body).await;
    assert_eq!(response.status().as_u16(), 200);

    let saved = sqlx::query("SELECT name, email, subject, is_read FROM contacts")
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to fetch saved contact.");

    assert_eq!(saved.get::<String, _>("name"), "Ursula Le Guin");
    // Normalized before storage.
    assert_eq!(saved.get::<String, _>("email"), "ursula_le_guin@gmail.com");
    assert_eq!(
        saved.get::<Option<String>, _>("subject").as_deref(),
        Some("Project inquiry")
    );
    assert!(!saved.get::<bool, _>("is_read"));
}

#[tokio::test]
async fn blank_optional_fields_are_stored_as_null() {
    let app = helpers::spawn_app_with_database().await;

    let body = serde_json::json!({
        "name": "Ursula Le Guin",
        "email": "ursula_le_guin@gmail.com",
        "message": "Hello",
        "subject": "   ",
        "phone": ""
    });
    app.post_contact(&body).await;

    let saved = sqlx::query("SELECT subject, phone FROM contacts")
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to fetch saved contact.");

    assert_eq!(saved.get::<Option<String>, _>("subject"), None);
    assert_eq!(saved.get::<Option<String>, _>("phone"), None);
}

#[tokio::test]
async fn an_invalid_submission_is_not_persisted() {
    let app = helpers::spawn_app_with_database().await;

    let body = serde_json::json!({
        "name": "",
        "email": "ursula_le_guin@gmail.com",
        "message": "Hello"
    });
    let response = app.post_contact(&body).await;
    assert_eq!(response.status().as_u16(), 400);

    let count = sqlx::query("SELECT COUNT(*) AS count FROM contacts")
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to count contacts.");
    assert_eq!(count.get::<i64, _>("count"), 0);
}
