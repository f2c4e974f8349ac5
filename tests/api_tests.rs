// tests/api_tests.rs

use tpa_backend::{EngineSettings, config::Config, routes, state::AppState};

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app() -> String {
    // 1. Create test configuration and state
    let config = Config {
        rust_log: "error".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        engine: EngineSettings::default(),
    };

    let state = AppState::new(config);

    // 2. Create the router with the app state
    let app = routes::create_router(state);

    // 3. Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // 4. Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

fn session_payload(status: &str) -> serde_json::Value {
    serde_json::json!({
        "session": {
            "id": 501,
            "testId": 3,
            "userId": 77,
            "status": status,
            "score": 80,
            "maxScore": 100,
            "startTime": "2024-05-01T08:00:00Z",
            "endTime": "2024-05-01T09:30:00Z",
            "minimum_score": 60,
            "categoryBreakdown": {
                "TES_VERBAL": {"score": 40, "maxScore": 50, "percentage": 80},
                "TES_GAMBAR": {"score": 0, "maxScore": 0, "percentage": 0}
            },
            "riasec": {
                "realistic": {"score": 30, "maxScore": 40},
                "investigative": {"score": 25, "maxScore": 40},
                "artistic": {"score": 10, "maxScore": 40},
                "social": {"score": 5, "maxScore": 40},
                "enterprising": {"score": 15, "maxScore": 40},
                "conventional": {"score": 20, "maxScore": 40}
            },
            "aptitude_score_total": 0,
            "aptitude_max_score_total": 0
        },
        "answers": [
            {
                "questionId": 1,
                "selectedAnswer": "A",
                "isCorrect": true,
                "pointsEarned": 5,
                "question": {"category": "TES_VERBAL", "difficulty": "EASY", "options": ["A", "B"]}
            }
        ]
    })
}

#[tokio::test]
async fn health_check_404() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn interpret_session_works() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .post(&format!("{}/api/interpretations", address))
        .json(&session_payload("COMPLETED"))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();

    assert_eq!(body["overall_percentage"], 80);
    assert_eq!(body["verdict"], "LULUS");
    assert_eq!(body["overall_band"], "GOOD");
    assert_eq!(body["z_score"]["value"], 1.0);
    assert_eq!(body["thresholds"]["good"], 80);
    assert_eq!(body["duration_seconds"], 5400);

    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0]["code"], "TES_VERBAL");
    assert_eq!(categories[0]["percentage"], 80);

    assert_eq!(body["riasec"]["holland_code"], "RIC");
    assert_eq!(body["aptitude"]["percentage"], 0);
    assert_eq!(body["answer_statistics"]["answered"], 1);
}

#[tokio::test]
async fn interpret_session_rejects_ongoing() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/interpretations", address))
        .json(&session_payload("ONGOING"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 409);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("in progress"));
}

#[tokio::test]
async fn interpret_session_fails_validation() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act: minimum_score above 100
    let mut payload = session_payload("COMPLETED");
    payload["session"]["minimum_score"] = serde_json::json!(120);

    let response = client
        .post(&format!("{}/api/interpretations", address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);

    // Act: category score above its maximum
    let mut payload = session_payload("COMPLETED");
    payload["session"]["categoryBreakdown"]["TES_VERBAL"]["score"] = serde_json::json!(60);

    let response = client
        .post(&format!("{}/api/interpretations", address))
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn interpret_batch_preserves_order() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let mut second = session_payload("ABANDONED");
    second["session"]["id"] = serde_json::json!(502);
    second["session"]["score"] = serde_json::json!(30);

    let response = client
        .post(&format!("{}/api/interpretations/batch", address))
        .json(&serde_json::json!({"items": [session_payload("COMPLETED"), second]}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let reports = body.as_array().unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["session_id"], 501);
    assert_eq!(reports[1]["session_id"], 502);
    assert_eq!(reports[1]["verdict"], "TIDAK_LULUS");
}

#[tokio::test]
async fn interpret_batch_rejects_empty_and_reports_index() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/interpretations/batch", address))
        .json(&serde_json::json!({"items": []}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 400);

    let response = client
        .post(&format!("{}/api/interpretations/batch", address))
        .json(&serde_json::json!({"items": [session_payload("COMPLETED"), session_payload("ONGOING")]}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 409);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("items[1]"));
}

#[tokio::test]
async fn preview_thresholds_works() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/api/interpretations/thresholds", address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["minimum_score"], 60);
    assert_eq!(body["thresholds"]["excellent"], 90);
    assert_eq!(body["thresholds"]["poor"], 40);

    let response = client
        .get(&format!("{}/api/interpretations/thresholds?minimum_score=95", address))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["thresholds"]["average"], 70);
    assert_eq!(body["thresholds"]["poor"], 70);
}
