use diesel::prelude::*;
use dhyan_common::Article;

use crate::{
    error::AppResult,
    models::content_models::ArticleRow,
    schema::articles,
    DbPool,
};

pub struct ArticleRepository {
    pool: DbPool,
}

impl ArticleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Newest first, optionally restricted to one category.
    pub fn list(&self, category: Option<&str>, limit: i64) -> AppResult<Vec<Article>> {
        let mut conn = self.pool.get()?;
        let mut query = articles::table
            .select(ArticleRow::as_select())
            .order((articles::date.desc(), articles::id.asc()))
            .limit(limit)
            .into_boxed();
        if let Some(category) = category {
            query = query.filter(articles::category.eq(category.to_string()));
        }
        let rows = query.load(&mut conn)?;
        Ok(rows.into_iter().map(Article::from).collect())
    }

    pub fn find(&self, id: &str) -> AppResult<Option<Article>> {
        let mut conn = self.pool.get()?;
        let row = articles::table
            .find(id)
            .select(ArticleRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(Article::from))
    }

    pub fn upsert_all(&self, items: Vec<Article>) -> AppResult<usize> {
        let mut conn = self.pool.get()?;
        let written = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let mut written = 0;
            for row in items.into_iter().map(ArticleRow::from) {
                written += diesel::replace_into(articles::table)
                    .values(&row)
                    .execute(conn)?;
            }
            Ok(written)
        })?;
        Ok(written)
    }
}
