use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use dhyan_common::{Article, ArticleSummary};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::AppState;

pub const DEFAULT_LIMIT: i64 = 12;
pub const MAX_LIMIT: i64 = 50;

#[derive(Debug, Default, Deserialize)]
pub struct ArticleQuery {
    pub category: Option<String>,
    pub limit: Option<i64>,
}

impl ArticleQuery {
    fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|category| !category.is_empty())
    }
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ArticleQuery>,
) -> AppResult<Json<Vec<ArticleSummary>>> {
    let articles = state.articles.list(query.category(), query.limit())?;
    Ok(Json(articles.iter().map(ArticleSummary::from).collect()))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Article>> {
    state
        .articles
        .find(&id)?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Article {}", id)))
}
