use std::time::Duration;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use chrono::DateTime;
use sea_orm::{ConnectOptions, Database};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use linknote_server::{config::AppConfig, routes::router, state::AppState};

async fn app_state() -> std::sync::Arc<AppState> {
    let cfg = AppConfig::from_env().expect("load app config");
    let mut opt = ConnectOptions::new(cfg.database_url.clone());
    opt.max_connections(cfg.db_max_connections)
        .min_connections(cfg.db_min_idle)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let db = Database::connect(opt).await.expect("connect to database");
    db.get_schema_registry("linknote_server::db::entities::*")
        .sync(&db)
        .await
        .expect("sync schema");

    AppState::new(db)
}

async fn send(
    state: &std::sync::Arc<AppState>,
    request: Request<Body>,
) -> axum::response::Response {
    router(state.clone()).oneshot(request).await.unwrap()
}

async fn json_response(
    state: &std::sync::Arc<AppState>,
    request: Request<Body>,
) -> (StatusCode, serde_json::Value) {
    let response = send(state, request).await;
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

fn authed_json(
    method: &str,
    uri: &str,
    token: &str,
    payload: Option<serde_json::Value>,
) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token));
    match payload {
        Some(payload) => builder
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Registers a fresh user and returns a login token for them.
async fn new_user_token(state: &std::sync::Arc<AppState>) -> String {
    let email = format!("user-{}@example.com", Uuid::new_v4());
    let (status, _) = json_response(
        state,
        Request::builder()
            .method("POST")
            .uri("/register")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "email": email,
                    "password": "testpass",
                    "first_name": "Michael",
                    "last_name": "Scott"
                })
                .to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = json_response(
        state,
        Request::builder()
            .method("POST")
            .uri("/login")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "email": email, "password": "testpass" }).to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn link_round_trips_all_fields() {
    let state = app_state().await;
    let token = new_user_token(&state).await;

    let (status, link) = json_response(
        &state,
        authed_json(
            "POST",
            "/links",
            &token,
            Some(json!({
                "url": "https://example.com",
                "description": "Example",
                "order": 0
            })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(link["url"].as_str(), Some("https://example.com"));
    assert_eq!(link["description"].as_str(), Some("Example"));
    assert_eq!(link["order"].as_i64(), Some(0));
    assert!(link["user_id"].as_str().is_some());

    let id = link["id"].as_str().unwrap();
    let (status, fetched) = json_response(
        &state,
        authed_json("GET", &format!("/links/{}", id), &token, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, link);
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn link_crud_flow() {
    let state = app_state().await;
    let token = new_user_token(&state).await;

    let (_, link) = json_response(
        &state,
        authed_json(
            "POST",
            "/links",
            &token,
            Some(json!({ "url": "https://a.example", "description": "a", "order": 2 })),
        ),
    )
    .await;
    let id = link["id"].as_str().unwrap().to_string();

    let (status, links) = json_response(&state, authed_json("GET", "/links", &token, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(links
        .as_array()
        .unwrap()
        .iter()
        .any(|entry| entry["id"].as_str() == Some(id.as_str())));

    let (status, updated) = json_response(
        &state,
        authed_json(
            "PATCH",
            &format!("/links/{}", id),
            &token,
            Some(json!({ "description": "updated", "order": 7 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["description"].as_str(), Some("updated"));
    assert_eq!(updated["order"].as_i64(), Some(7));
    assert_eq!(updated["url"].as_str(), Some("https://a.example"));

    let response = send(
        &state,
        authed_json("DELETE", &format!("/links/{}", id), &token, None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(
        &state,
        authed_json("GET", &format!("/links/{}", id), &token, None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn note_timestamps_and_edit_flag() {
    let state = app_state().await;
    let token = new_user_token(&state).await;

    let (status, note) = json_response(
        &state,
        authed_json(
            "POST",
            "/notes",
            &token,
            Some(json!({ "title": "groceries", "content": "beets" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(note["created_date"], note["last_updated_date"]);
    assert_eq!(note["has_been_edited"].as_bool(), Some(false));

    let id = note["id"].as_str().unwrap();
    let created = note["created_date"].as_str().unwrap().to_string();

    let (status, updated) = json_response(
        &state,
        authed_json(
            "PATCH",
            &format!("/notes/{}", id),
            &token,
            Some(json!({ "content": "beets and bears" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["created_date"].as_str(), Some(created.as_str()));
    assert_eq!(updated["title"].as_str(), Some("groceries"));
    assert_eq!(updated["has_been_edited"].as_bool(), Some(true));

    let created_ts = DateTime::parse_from_rfc3339(created.as_str()).unwrap();
    let updated_ts =
        DateTime::parse_from_rfc3339(updated["last_updated_date"].as_str().unwrap()).unwrap();
    assert!(updated_ts > created_ts);
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn foreign_records_look_absent() {
    let state = app_state().await;
    let owner = new_user_token(&state).await;
    let intruder = new_user_token(&state).await;

    let (_, link) = json_response(
        &state,
        authed_json(
            "POST",
            "/links",
            &owner,
            Some(json!({ "url": "https://example.com", "description": "mine", "order": 1 })),
        ),
    )
    .await;
    let link_id = link["id"].as_str().unwrap().to_string();

    let (_, note) = json_response(
        &state,
        authed_json(
            "POST",
            "/notes",
            &owner,
            Some(json!({ "title": "secret", "content": "mine" })),
        ),
    )
    .await;
    let note_id = note["id"].as_str().unwrap().to_string();

    // Read, mutate and delete attempts by another user all report NotFound.
    for request in [
        authed_json("GET", &format!("/links/{}", link_id), &intruder, None),
        authed_json(
            "PATCH",
            &format!("/links/{}", link_id),
            &intruder,
            Some(json!({ "description": "stolen" })),
        ),
        authed_json("DELETE", &format!("/links/{}", link_id), &intruder, None),
        authed_json("GET", &format!("/notes/{}", note_id), &intruder, None),
        authed_json(
            "PATCH",
            &format!("/notes/{}", note_id),
            &intruder,
            Some(json!({ "content": "stolen" })),
        ),
        authed_json("DELETE", &format!("/notes/{}", note_id), &intruder, None),
    ] {
        let response = send(&state, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    let (_, links) = json_response(&state, authed_json("GET", "/links", &intruder, None)).await;
    assert!(links.as_array().unwrap().is_empty());

    // Still intact for the owner.
    let response = send(
        &state,
        authed_json("GET", &format!("/links/{}", link_id), &owner, None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn resource_routes_require_token() {
    let state = app_state().await;

    for uri in ["/links", "/notes"] {
        let response = send(
            &state,
            Request::builder().uri(uri).body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
