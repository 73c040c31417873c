use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;

use dhyan_backend::{build_router, config::Config, db, utils::seed, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                environment: Some(config.environment.clone().into()),
                ..Default::default()
            },
        ))
    });

    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dhyan_backend=debug,dhyan_common=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let pool = db::create_pool(&config.database_url, 8)?;
    db::run_migrations(&pool)?;
    if config.trust_proxy {
        tracing::info!("Trusting forwarded client addresses");
    }
    let state = Arc::new(AppState::new(pool).with_trusted_proxy(config.trust_proxy));

    if let Some(path) = &config.seed_path {
        let report = seed::import(seed::load(path)?, &state.documents, &state.articles)?;
        tracing::info!(
            "Seeded {} documents and {} articles from {}",
            report.documents,
            report.articles,
            path.display()
        );
    }

    let app = build_router(state, &config.static_dir, &config.frontend_url);

    tracing::info!(
        "Starting server on port {} ({}, production: {})",
        config.port,
        config.environment,
        config.is_production()
    );
    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .with_context(|| format!("binding port {}", config.port))?;
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .context("server error")?;
    Ok(())
}
