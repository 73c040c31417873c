use diesel::prelude::*;
use dhyan_common::{Article, Document};

use crate::schema::articles;
use crate::schema::contact_messages;
use crate::schema::documents;

#[derive(Queryable, Selectable, Insertable, Clone, Debug)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DocumentRow {
    pub collection: String,
    pub id: String,
    pub position: i32, // display order inside the collection
    pub data: String,  // raw JSON body
    pub updated_at: i32,
}

impl DocumentRow {
    pub fn new(collection: &str, position: i32, document: &Document, now: i32) -> Result<Self, serde_json::Error> {
        Ok(Self {
            collection: collection.to_string(),
            id: document.id.clone(),
            position,
            data: serde_json::to_string(&document.data)?,
            updated_at: now,
        })
    }

    pub fn into_document(self) -> Result<Document, serde_json::Error> {
        Ok(Document {
            id: self.id,
            data: serde_json::from_str(&self.data)?,
        })
    }
}

#[derive(Queryable, Selectable, Insertable, Clone, Debug)]
#[diesel(table_name = articles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ArticleRow {
    pub id: String,
    pub primary_title: String,
    pub sub_title: String,
    pub original_author_name: String,
    pub multi_media_type: String,
    pub category: String,
    pub date: String, // ISO-8601, sorts lexicographically
    pub audio_url: String,
    pub full_text: String,
    pub background_image_url: String,
    pub teaser_image_url: String,
}

impl From<Article> for ArticleRow {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            primary_title: article.primary_title,
            sub_title: article.sub_title,
            original_author_name: article.original_author_name,
            multi_media_type: article.multi_media_type,
            category: article.category,
            date: article.date,
            audio_url: article.audio_url,
            full_text: article.full_text,
            background_image_url: article.background_image_url,
            teaser_image_url: article.teaser_image_url,
        }
    }
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: row.id,
            primary_title: row.primary_title,
            sub_title: row.sub_title,
            original_author_name: row.original_author_name,
            multi_media_type: row.multi_media_type,
            category: row.category,
            date: row.date,
            audio_url: row.audio_url,
            full_text: row.full_text,
            background_image_url: row.background_image_url,
            teaser_image_url: row.teaser_image_url,
        }
    }
}

#[derive(Queryable, Selectable, Clone, Debug)]
#[diesel(table_name = contact_messages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub client_ip: Option<String>,
    pub created_at: i32,
}

#[derive(Insertable)]
#[diesel(table_name = contact_messages)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub client_ip: Option<String>,
    pub created_at: i32,
}
