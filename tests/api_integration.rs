//! Integration tests for the HTTP API
//!
//! Each test gets its own history file under the temp dir so the stateful
//! lotto routes never interfere with one another.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::path::PathBuf;
use tower::ServiceExt;

use fortuna::core::create_router;

fn temp_history(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("fortuna_api_{}_{:x}.json", tag, nanos))
}

fn test_router(tag: &str) -> (axum::Router, PathBuf) {
    let path = temp_history(tag);
    (create_router(&path).unwrap(), path)
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, path) = test_router("health");

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["saved_sets"], 0);

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_daily_fortune_is_stable_for_the_day() {
    let (app, path) = test_router("daily");
    let uri = "/fortune/daily?mbti=INTJ&element=wood&date=2025-03-10";

    let a = body_json(app.clone().oneshot(get(uri)).await.unwrap()).await;
    let b = body_json(app.oneshot(get(uri)).await.unwrap()).await;

    assert_eq!(a, b);
    assert_eq!(a["mbti"], "INTJ");
    assert_eq!(a["element"], "wood");
    assert!(a["lucky_number"].as_u64().unwrap() >= 1);
    assert!(a["best_match"].is_object());

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_daily_fortune_rejects_bad_identity() {
    let (app, path) = test_router("badid");

    let response = app
        .oneshot(get("/fortune/daily?mbti=ABCD&element=wood"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].is_string());

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_day_luck_endpoint() {
    let (app, path) = test_router("luck");

    let response = app.oneshot(get("/fortune/luck?date=2025-03-10")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let score = json["score"].as_u64().unwrap();
    assert!((1..=100).contains(&score));
    assert!(json["grade"].is_string());

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_compat_endpoint() {
    let (app, path) = test_router("compat");

    let response = app
        .oneshot(post_json(
            "/compat",
            json!({
                "my_mbti": "INTJ",
                "my_element": "wood",
                "partner_mbti": "ENTP",
                "partner_element": "fire"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["mbti_score"], 100);
    assert_eq!(json["element_score"], 90);
    assert_eq!(json["total_score"], 95);
    assert_eq!(json["tier"], "heaven_sent");

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_mbti_match_endpoint() {
    let (app, path) = test_router("match");

    let response = app
        .oneshot(post_json("/compat/mbti", json!({"mine": "INTJ", "partner": "ESFP"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["score"], 40);
    assert_eq!(json["grade"], "average");

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_generate_honors_constraints() {
    let (app, path) = test_router("generate");

    let response = app
        .oneshot(post_json(
            "/lotto/generate",
            json!({"count": 3, "include": [7], "exclude": [13]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let sets = json["sets"].as_array().unwrap();
    assert_eq!(sets.len(), 3);
    for set in sets {
        let numbers: Vec<u64> =
            set.as_array().unwrap().iter().map(|n| n.as_u64().unwrap()).collect();
        assert!(numbers.contains(&7));
        assert!(!numbers.contains(&13));
    }
    assert!(json.get("saved_ids").is_none());

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_generate_with_impossible_pool_is_400() {
    let (app, path) = test_router("impossible");
    let exclude: Vec<u8> = (1..=40).collect();

    let response = app
        .oneshot(post_json("/lotto/generate", json!({"count": 1, "exclude": exclude})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_history_save_list_update_delete_flow() {
    let (app, path) = test_router("flow");

    // save one set
    let response = app
        .clone()
        .oneshot(post_json(
            "/lotto/history",
            json!({"numbers": [3, 9, 17, 25, 33, 41], "memo": "first"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    // list it back
    let json = body_json(app.clone().oneshot(get("/lotto/history")).await.unwrap()).await;
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["memo"], "first");

    // toggle favorite
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/lotto/history/{}", id))
                .header("content-type", "application/json")
                .body(Body::from(json!({"toggle_favorite": true}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["favorite"], true);

    // delete it
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/lotto/history/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // deleting again is a 404
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/lotto/history/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_update_can_clear_memo() {
    let (app, path) = test_router("clearmemo");

    let response = app
        .clone()
        .oneshot(post_json(
            "/lotto/history",
            json!({"numbers": [2, 8, 14, 20, 26, 32], "memo": "keeper"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/lotto/history/{}", id))
                .header("content-type", "application/json")
                .body(Body::from(json!({"clear_memo": true}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(app.oneshot(get("/lotto/history")).await.unwrap()).await;
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].get("memo").is_none());

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_save_rejects_bad_sets() {
    let (app, path) = test_router("badset");

    let cases = [
        json!({"numbers": [1, 2, 3, 4, 5]}),
        json!({"numbers": [1, 2, 3, 4, 5, 5]}),
        json!({"numbers": [1, 2, 3, 4, 5, 46]}),
    ];
    for payload in cases {
        let response =
            app.clone().oneshot(post_json("/lotto/history", payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_stats_and_recommend_over_saved_history() {
    let (app, path) = test_router("stats");

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(post_json("/lotto/history", json!({"numbers": [1, 2, 3, 4, 5, 6]})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let stats = body_json(app.clone().oneshot(get("/lotto/stats")).await.unwrap()).await;
    assert_eq!(stats["sets_counted"], 3);
    assert_eq!(stats["frequency"][0], 3);
    assert_eq!(stats["odd"], 9);

    let rec = body_json(app.oneshot(get("/lotto/recommend")).await.unwrap()).await;
    assert_eq!(rec["sets_counted"], 3);
    let numbers = rec["numbers"].as_array().unwrap();
    assert_eq!(numbers.len(), 6);

    let _ = std::fs::remove_file(path);
}
