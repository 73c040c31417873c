use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Request, StatusCode},
    Router,
};
use dhyan_backend::{build_router, db, utils::seed, AppState};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

fn static_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dhyan-static-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html><body>dhyan</body></html>").unwrap();
    dir
}

fn app(name: &str) -> (Router, Arc<AppState>) {
    let pool = db::memory_pool().unwrap();
    let state = Arc::new(AppState::new(pool));
    let seed_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("seed/content.json");
    seed::import(seed::load(&seed_path).unwrap(), &state.documents, &state.articles).unwrap();
    let router = build_router(state.clone(), &static_dir(name), "http://localhost:8080");
    (router, state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// A contact POST as it arrives from `ip` through `into_make_service_with_connect_info`.
fn contact(ip: &str, body: Value) -> Request<Body> {
    let peer: SocketAddr = format!("{}:40000", ip).parse().unwrap();
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .extension(ConnectInfo(peer))
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn contact_forwarded(peer_ip: &str, forwarded_for: &str, body: Value) -> Request<Body> {
    let mut request = contact(peer_ip, body);
    request
        .headers_mut()
        .insert("x-forwarded-for", forwarded_for.parse().unwrap());
    request
}

#[tokio::test]
async fn health_check_answers_ok() {
    let (app, _) = app("health");
    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn collection_documents_keep_seed_order() {
    let (app, _) = app("features");
    let (status, body) = send(&app, get("/api/collections/features/documents")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|doc| doc["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["yoga", "meditation", "mantra", "pranayama", "knowledge"]);
}

#[tokio::test]
async fn unknown_collection_is_empty() {
    let (app, _) = app("unknown");
    let (status, body) = send(&app, get("/api/collections/nothing/documents")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn single_document_or_404() {
    let (app, _) = app("single");
    let (status, body) = send(&app, get("/api/collections/hero/documents/mainPageContent")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Your daily space for stillness");

    let (status, body) = send(&app, get("/api/collections/hero/documents/missing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("missing"));
}

#[tokio::test]
async fn articles_are_newest_first_and_filterable() {
    let (app, _) = app("articles");
    let (_, body) = send(&app, get("/api/articles")).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec!["breath-before-sleep", "om-explained", "gayatri-mantra", "five-minute-sit"]
    );

    let (_, body) = send(&app, get("/api/articles?category=Mantra&limit=1")).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "om-explained");
    assert_eq!(body[0]["teaserImageURL"], "/assets/blog/om.jpg");
}

#[tokio::test]
async fn full_article_uses_store_field_names() {
    let (app, _) = app("article");
    let (status, body) = send(&app, get("/api/articles/om-explained")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["audioURL"], "/assets/audio/om.mp3");
    assert_eq!(body["multiMediaType"], "spinnedAudio");

    let (status, _) = send(&app, get("/api/articles/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn contact_rejects_invalid_email_and_stores_valid_messages() {
    let (app, state) = app("contact");
    let (status, body) = send(
        &app,
        contact(
            "10.1.1.1",
            json!({"name": "Asha", "email": "nope", "message": "Hello from the test suite"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Invalid email format");

    let (status, _) = send(
        &app,
        contact(
            "10.1.1.1",
            json!({"name": "Asha", "email": "asha@example.org", "message": "Hello from the test suite"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let stored = state.contacts.recent(10).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].email, "asha@example.org");
    assert_eq!(stored[0].client_ip.as_deref(), Some("10.1.1.1"));
}

#[tokio::test]
async fn contact_is_rate_limited_per_ip() {
    let (app, _) = app("limit");
    let message = json!({"name": "Ravi", "email": "ravi@example.org", "message": "Namaste, a question"});
    for _ in 0..5 {
        let (status, _) = send(&app, contact("10.2.2.2", message.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (status, _) = send(&app, contact("10.2.2.2", message.clone())).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    let (status, _) = send(&app, contact("10.3.3.3", message)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn rotating_forwarded_for_does_not_escape_the_limit() {
    let (app, state) = app("spoofed");
    let message = json!({"name": "Mira", "email": "mira@example.org", "message": "Many hellos from one host"});
    let mut created = 0;
    for i in 0..20 {
        let forwarded = format!("1.1.1.{}", i);
        let (status, _) = send(&app, contact_forwarded("203.0.113.9", &forwarded, message.clone())).await;
        if status == StatusCode::CREATED {
            created += 1;
        } else {
            assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        }
    }
    assert_eq!(created, 5);

    let stored = state.contacts.recent(50).unwrap();
    assert_eq!(stored.len(), 5);
    assert!(stored
        .iter()
        .all(|m| m.client_ip.as_deref() == Some("203.0.113.9")));
}

#[tokio::test]
async fn trusted_proxy_keys_on_forwarded_client() {
    let pool = db::memory_pool().unwrap();
    let state = Arc::new(AppState::new(pool).with_trusted_proxy(true));
    let app = build_router(state.clone(), &static_dir("proxy"), "http://localhost:8080");
    let message = json!({"name": "Dev", "email": "dev@example.org", "message": "Routed through the proxy"});

    for _ in 0..5 {
        let (status, _) = send(&app, contact_forwarded("10.0.0.1", "198.51.100.1", message.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (status, _) = send(&app, contact_forwarded("10.0.0.1", "198.51.100.1", message.clone())).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    let (status, _) = send(&app, contact_forwarded("10.0.0.1", "198.51.100.2", message)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        state.contacts.recent(1).unwrap()[0].client_ip.as_deref(),
        Some("198.51.100.2")
    );
}

#[tokio::test]
async fn client_routes_fall_back_to_index_html() {
    let (app, _) = app("spa");
    let response = app.clone().oneshot(get("/blog/om-explained?type=Mantra")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("dhyan"));

    let (status, _) = send(&app, get("/api/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seeding_twice_keeps_one_copy() {
    let (app, state) = app("reseed");
    let seed_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("seed/content.json");
    seed::import(seed::load(&seed_path).unwrap(), &state.documents, &state.articles).unwrap();
    let (_, body) = send(&app, get("/api/collections/features/documents")).await;
    assert_eq!(body.as_array().unwrap().len(), 5);
}
