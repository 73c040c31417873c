use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use dhyan_common::{Article, Document, Section};
use serde::Deserialize;

use crate::repositories::{article_repository::ArticleRepository, document_repository::DocumentRepository};

/// Shape of the JSON file pointed to by `SEED_PATH`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedFile {
    pub collections: BTreeMap<String, Vec<Document>>,
    pub articles: Vec<Article>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub documents: usize,
    pub articles: usize,
}

pub fn load(path: &Path) -> anyhow::Result<SeedFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing seed file {}", path.display()))
}

/// Upserts everything in `seed`. Running it twice leaves the same rows.
pub fn import(
    seed: SeedFile,
    documents: &DocumentRepository,
    articles: &ArticleRepository,
) -> anyhow::Result<SeedReport> {
    let mut report = SeedReport::default();
    for (collection, docs) in &seed.collections {
        if Section::from_collection(collection).is_none() {
            tracing::warn!("Seeding collection {} which no page section reads", collection);
        }
        report.documents += documents
            .upsert_all(collection, docs)
            .with_context(|| format!("seeding collection {}", collection))?;
    }
    report.articles = articles
        .upsert_all(seed.articles)
        .context("seeding articles")?;
    Ok(report)
}
