use chrono::Utc;
use diesel::prelude::*;
use dhyan_common::Document;

use crate::{
    error::AppResult,
    models::content_models::DocumentRow,
    schema::documents,
    DbPool,
};

pub struct DocumentRepository {
    pool: DbPool,
}

impl DocumentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Every document of `collection`, by position then id. Unknown
    /// collections are simply empty.
    pub fn list(&self, collection: &str) -> AppResult<Vec<Document>> {
        let mut conn = self.pool.get()?;
        let rows = documents::table
            .filter(documents::collection.eq(collection))
            .order((documents::position.asc(), documents::id.asc()))
            .select(DocumentRow::as_select())
            .load(&mut conn)?;
        rows.into_iter()
            .map(|row| row.into_document().map_err(Into::into))
            .collect()
    }

    pub fn find(&self, collection: &str, id: &str) -> AppResult<Option<Document>> {
        let mut conn = self.pool.get()?;
        let row = documents::table
            .filter(documents::collection.eq(collection))
            .filter(documents::id.eq(id))
            .select(DocumentRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(DocumentRow::into_document).transpose()?)
    }

    /// Inserts or replaces the given documents, keeping their order as the
    /// display position. Returns how many rows were written.
    pub fn upsert_all(&self, collection: &str, docs: &[Document]) -> AppResult<usize> {
        let now = Utc::now().timestamp() as i32;
        let rows = docs
            .iter()
            .enumerate()
            .map(|(position, doc)| DocumentRow::new(collection, position as i32, doc, now))
            .collect::<Result<Vec<_>, _>>()?;

        let mut conn = self.pool.get()?;
        let written = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let mut written = 0;
            for row in &rows {
                written += diesel::replace_into(documents::table)
                    .values(row)
                    .execute(conn)?;
            }
            Ok(written)
        })?;
        Ok(written)
    }
}
