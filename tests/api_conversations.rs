mod common;

use chrono::{DateTime, Utc};
use common::spawn_app;
use serde_json::Value;

fn turn(role: &str, text: &str) -> Value {
    serde_json::json!({ "role": role, "text": text, "timestamp": "2025-02-10T10:00:00Z" })
}

#[tokio::test]
async fn conversation_upsert_then_update_accumulates_turns() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/conversations", &app.address))
        .json(&serde_json::json!({
            "sessionId": "s1",
            "conversationData": [turn("user", "أبحث عن شقة")]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(201, response.status().as_u16());
    let created: Value = response.json().await.unwrap();
    assert_eq!("active", created["status"]);

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let response = client
        .put(&format!("{}/conversations/s1", &app.address))
        .json(&serde_json::json!({
            "conversationData": [turn("user", "أبحث عن شقة"), turn("assistant", "كم غرفة؟")]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());

    let fetched: Value = client
        .get(&format!("{}/conversations/s1", &app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(2, fetched["conversationData"].as_array().unwrap().len());

    let created_at: DateTime<Utc> = fetched["createdAt"].as_str().unwrap().parse().unwrap();
    let updated_at: DateTime<Utc> = fetched["updatedAt"].as_str().unwrap().parse().unwrap();
    assert!(updated_at > created_at);
}

#[tokio::test]
async fn reposting_a_session_replaces_but_keeps_identity() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let first: Value = client
        .post(&format!("{}/conversations", &app.address))
        .json(&serde_json::json!({
            "sessionId": "s2",
            "userName": "ليلى",
            "conversationData": [turn("user", "مرحبا")]
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let second: Value = client
        .post(&format!("{}/conversations", &app.address))
        .json(&serde_json::json!({
            "sessionId": "s2",
            "conversationData": [turn("user", "من جديد")]
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first["id"], second["id"]);
    assert_eq!(first["createdAt"], second["createdAt"]);
    assert_eq!(
        "من جديد",
        second["conversationData"][0]["text"].as_str().unwrap()
    );

    let listed: Vec<Value> = client
        .get(&format!("{}/conversations", &app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(1, listed.len());
}

#[tokio::test]
async fn unknown_session_returns_404() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/conversations/missing", &app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(404, response.status().as_u16());

    let response = client
        .put(&format!("{}/conversations/missing", &app.address))
        .json(&serde_json::json!({ "status": "closed" }))
        .send()
        .await
        .unwrap();
    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn conversation_without_session_id_is_rejected() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/conversations", &app.address))
        .json(&serde_json::json!({ "conversationData": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(400, response.status().as_u16());
    let body = response.text().await.unwrap();
    assert!(body.contains("sessionId"), "body was: {}", body);
}
