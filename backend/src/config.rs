use std::path::PathBuf;

use anyhow::Context;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub frontend_url: String,
    pub static_dir: PathBuf,
    pub seed_path: Option<PathBuf>,
    pub sentry_dsn: Option<String>,
    pub environment: String,
    /// Honour X-Forwarded-For / X-Real-IP; only behind a proxy that sets them.
    pub trust_proxy: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let var = |name: &str| std::env::var(name).ok().filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a number, got {}", port))?,
            None => 3000,
        };

        Ok(Self {
            database_url: var("DATABASE_URL").unwrap_or_else(|| "dhyan.sqlite".to_string()),
            port,
            frontend_url: var("FRONTEND_URL").unwrap_or_else(|| "http://localhost:8080".to_string()),
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("../frontend/dist")),
            seed_path: var("SEED_PATH").map(PathBuf::from),
            sentry_dsn: var("SENTRY_DSN"),
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            trust_proxy: var("TRUST_PROXY")
                .map(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment != "development"
    }
}
