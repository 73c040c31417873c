//! Section loaders. A failed or unusable fetch logs the reason and hands back
//! the built-in placeholder instead, so sections always have something to
//! show.

use dhyan_common::content::{
    self, fallback, FeatureCategory, HeroContent, SocialItem, TestimonialContent,
};
use dhyan_common::{Article, ArticleSummary, ContentError, Document, Section};

use crate::utils::api::Api;

async fn fetch_documents(section: Section) -> Option<Vec<Document>> {
    let path = format!("/api/collections/{}/documents", section.collection());
    match Api::get(&path).fetch::<Vec<Document>>().await {
        Ok(documents) => Some(documents),
        Err(e) => {
            log::error!("Failed to fetch {}: {}", section.collection(), e);
            None
        }
    }
}

fn or_fallback<T>(
    section: Section,
    documents: Option<Vec<Document>>,
    normalize: impl FnOnce(&[Document]) -> Result<T, ContentError>,
    fallback: impl FnOnce() -> T,
) -> T {
    match documents.as_deref().map(normalize) {
        Some(Ok(content)) => content,
        Some(Err(e)) => {
            log::warn!("Using placeholder {} content: {}", section.collection(), e);
            fallback()
        }
        None => fallback(),
    }
}

pub async fn load_hero() -> HeroContent {
    let documents = fetch_documents(Section::Hero).await;
    or_fallback(Section::Hero, documents, HeroContent::from_documents, fallback::hero)
}

pub async fn load_features() -> Vec<FeatureCategory> {
    let documents = fetch_documents(Section::Features).await;
    or_fallback(
        Section::Features,
        documents,
        content::feature_categories,
        fallback::features,
    )
}

pub async fn load_social() -> Vec<SocialItem> {
    let documents = fetch_documents(Section::Social).await;
    or_fallback(Section::Social, documents, content::social_items, fallback::social)
}

pub async fn load_testimonials() -> TestimonialContent {
    let documents = fetch_documents(Section::Testimonials).await;
    or_fallback(
        Section::Testimonials,
        documents,
        TestimonialContent::from_documents,
        fallback::testimonials,
    )
}

pub async fn load_articles(category: Option<&str>, limit: usize) -> Vec<ArticleSummary> {
    let mut path = format!("/api/articles?limit={}", limit);
    if let Some(category) = category.filter(|c| !c.is_empty()) {
        path.push_str("&category=");
        path.push_str(&String::from(js_sys::encode_uri_component(category)));
    }
    Api::get(&path)
        .fetch::<Vec<ArticleSummary>>()
        .await
        .unwrap_or_else(|e| {
            log::error!("Failed to fetch articles: {}", e);
            Vec::new()
        })
}

pub async fn load_article(id: &str) -> Option<Article> {
    let path = format!(
        "/api/articles/{}",
        String::from(js_sys::encode_uri_component(id))
    );
    match Api::get(&path).fetch::<Article>().await {
        Ok(article) => Some(article),
        Err(e) => {
            log::error!("Failed to fetch article {}: {}", id, e);
            None
        }
    }
}
