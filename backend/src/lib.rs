use std::path::Path;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod db;
pub mod error;
pub mod schema;
pub mod models {
    pub mod content_models;
}
pub mod repositories {
    pub mod article_repository;
    pub mod contact_repository;
    pub mod document_repository;
}
pub mod handlers {
    pub mod article_handlers;
    pub mod contact_handlers;
    pub mod content_handlers;
}
pub mod utils {
    pub mod rate_limit;
    pub mod seed;
}

pub use db::DbPool;

use handlers::{article_handlers, contact_handlers, content_handlers};
use repositories::{
    article_repository::ArticleRepository, contact_repository::ContactRepository,
    document_repository::DocumentRepository,
};
use utils::rate_limit::RateLimits;

pub struct AppState {
    pub documents: DocumentRepository,
    pub articles: ArticleRepository,
    pub contacts: ContactRepository,
    pub limits: RateLimits,
    pub trust_proxy: bool,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            documents: DocumentRepository::new(pool.clone()),
            articles: ArticleRepository::new(pool.clone()),
            contacts: ContactRepository::new(pool),
            limits: RateLimits::new(),
            trust_proxy: false,
        }
    }

    /// Key clients by forwarded headers instead of the socket peer.
    pub fn with_trusted_proxy(mut self, trust_proxy: bool) -> Self {
        self.trust_proxy = trust_proxy;
        self
    }
}

async fn health_check() -> &'static str {
    "OK"
}

async fn api_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "No such endpoint"})),
    )
}

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/collections/{collection}/documents",
            get(content_handlers::list_documents),
        )
        .route(
            "/collections/{collection}/documents/{id}",
            get(content_handlers::get_document),
        )
        .route("/articles", get(article_handlers::list_articles))
        .route("/articles/{id}", get(article_handlers::get_article))
        .route("/contact", post(contact_handlers::submit_contact))
        .fallback(api_not_found)
}

/// The full application: JSON API under `/api`, the built frontend from
/// `static_dir` for everything else (unknown paths get `index.html` so
/// client-side routes survive a reload).
pub fn build_router(state: Arc<AppState>, static_dir: &Path, frontend_url: &str) -> Router {
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH]);
    let cors = match frontend_url.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(AllowOrigin::exact(origin)),
        Err(_) => {
            tracing::warn!("FRONTEND_URL {} is not a valid origin, CORS stays closed", frontend_url);
            cors
        }
    };

    Router::new()
        .nest("/api", api_routes())
        .fallback_service(spa)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
