use chrono::Utc;
use diesel::prelude::*;
use dhyan_common::ContactRequest;

use crate::{
    error::AppResult,
    models::content_models::{ContactMessage, NewContactMessage},
    schema::contact_messages,
    DbPool,
};

pub struct ContactRepository {
    pool: DbPool,
}

impl ContactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(&self, request: ContactRequest, client_ip: Option<String>) -> AppResult<()> {
        let mut conn = self.pool.get()?;
        let new_message = NewContactMessage {
            name: request.name,
            email: request.email,
            message: request.message,
            client_ip,
            created_at: Utc::now().timestamp() as i32,
        };
        diesel::insert_into(contact_messages::table)
            .values(&new_message)
            .execute(&mut conn)?;
        Ok(())
    }

    pub fn recent(&self, limit: i64) -> AppResult<Vec<ContactMessage>> {
        let mut conn = self.pool.get()?;
        let messages = contact_messages::table
            .order(contact_messages::id.desc())
            .limit(limit)
            .select(ContactMessage::as_select())
            .load(&mut conn)?;
        Ok(messages)
    }
}
