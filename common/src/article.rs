//! Article records and the display rules the blog pages share.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DATE_FALLBACK: &str = "Recently Updated";
pub const APP_AUTHOR: &str = "Dhyan App";
pub const DEFAULT_ARTICLE_IMAGE: &str = "/assets/blog/default.jpg";
pub const SPINNED_AUDIO: &str = "spinnedAudio";
pub const RELATED_SHOWN: usize = 3;
pub const TITLE_PREVIEW_CHARS: usize = 60;

static BR_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Full article as served by `/api/articles/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    pub id: String,
    pub primary_title: String,
    pub sub_title: String,
    pub original_author_name: String,
    pub multi_media_type: String,
    pub category: String,
    pub date: String,
    #[serde(rename = "audioURL")]
    pub audio_url: String,
    pub full_text: String,
    #[serde(rename = "backgroundImageURL")]
    pub background_image_url: String,
    #[serde(rename = "teaserImageURL")]
    pub teaser_image_url: String,
}

/// List entry as served by `/api/articles`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleSummary {
    pub id: String,
    pub primary_title: String,
    pub original_author_name: String,
    pub multi_media_type: String,
    pub category: String,
    pub date: String,
    #[serde(rename = "teaserImageURL")]
    pub teaser_image_url: String,
}

impl Article {
    pub fn author(&self) -> &str {
        display_author(&self.multi_media_type, &self.original_author_name)
    }

    /// Hero image sources in the order they should be tried.
    pub fn hero_image_candidates(&self) -> Vec<&str> {
        [
            self.background_image_url.as_str(),
            self.teaser_image_url.as_str(),
        ]
        .into_iter()
        .filter(|url| !url.trim().is_empty())
        .chain(std::iter::once(DEFAULT_ARTICLE_IMAGE))
        .collect()
    }

    pub fn body(&self) -> String {
        normalize_line_breaks(&self.full_text)
    }

    pub fn has_audio(&self) -> bool {
        !self.audio_url.trim().is_empty()
    }
}

impl ArticleSummary {
    pub fn author(&self) -> &str {
        display_author(&self.multi_media_type, &self.original_author_name)
    }

    pub fn image(&self) -> &str {
        if self.teaser_image_url.trim().is_empty() {
            DEFAULT_ARTICLE_IMAGE
        } else {
            &self.teaser_image_url
        }
    }

    pub fn title_preview(&self) -> String {
        truncate_chars(&self.primary_title, TITLE_PREVIEW_CHARS)
    }
}

impl From<&Article> for ArticleSummary {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            primary_title: article.primary_title.clone(),
            original_author_name: article.original_author_name.clone(),
            multi_media_type: article.multi_media_type.clone(),
            category: article.category.clone(),
            date: article.date.clone(),
            teaser_image_url: article.teaser_image_url.clone(),
        }
    }
}

pub fn display_author<'a>(multi_media_type: &str, original_author: &'a str) -> &'a str {
    if multi_media_type == SPINNED_AUDIO {
        APP_AUTHOR
    } else {
        original_author
    }
}

/// `<br>` tags become newlines and runs of blank lines collapse to one
/// paragraph break. Text without tags is returned as-is.
pub fn normalize_line_breaks(text: &str) -> String {
    if !BR_TAG.is_match(text) {
        return text.to_string();
    }
    let replaced = BR_TAG.replace_all(text, "\n");
    BLANK_RUN.replace_all(&replaced, "\n\n").into_owned()
}

/// "March 5, 2024" for anything that parses as a date, otherwise
/// [`DATE_FALLBACK`].
pub fn format_article_date(raw: &str) -> String {
    let raw = raw.trim();
    parse_date(raw)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| DATE_FALLBACK.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| DateTime::parse_from_rfc2822(raw).map(|dt| dt.date_naive()).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|dt| dt.date())
                .ok()
        })
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// Related articles for the reader: drop the one being read, keep the first
/// [`RELATED_SHOWN`].
pub fn related_articles(candidates: Vec<ArticleSummary>, current_id: &str) -> Vec<ArticleSummary> {
    candidates
        .into_iter()
        .filter(|article| article.id != current_id)
        .take(RELATED_SHOWN)
        .collect()
}

/// First `max` characters followed by `...` when the text is longer.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn summary(id: &str) -> ArticleSummary {
        ArticleSummary {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn br_tags_become_paragraph_breaks() {
        assert_eq!(
            normalize_line_breaks("One<br>Two<BR/><br />Three"),
            "One\nTwo\n\nThree"
        );
        assert_eq!(normalize_line_breaks("a\n\n\n\nb"), "a\n\n\n\nb");
    }

    #[test]
    fn dates_fall_back_when_unparseable() {
        assert_eq!(format_article_date("2024-03-05"), "March 5, 2024");
        assert_eq!(
            format_article_date("2023-11-20T08:15:00Z"),
            "November 20, 2023"
        );
        assert_eq!(format_article_date(""), DATE_FALLBACK);
        assert_eq!(format_article_date("someday"), DATE_FALLBACK);
    }

    #[test]
    fn spinned_audio_is_credited_to_the_app() {
        assert_eq!(display_author(SPINNED_AUDIO, "Guest"), APP_AUTHOR);
        assert_eq!(display_author("text", "Guest"), "Guest");
    }

    #[test]
    fn hero_image_falls_back_through_teaser_to_default() {
        let mut article = Article {
            teaser_image_url: "/teaser.jpg".to_string(),
            ..Default::default()
        };
        assert_eq!(
            article.hero_image_candidates(),
            vec!["/teaser.jpg", DEFAULT_ARTICLE_IMAGE]
        );
        article.background_image_url = "/bg.jpg".to_string();
        assert_eq!(article.hero_image_candidates()[0], "/bg.jpg");
    }

    #[test]
    fn related_excludes_the_current_article() {
        let related = related_articles(
            vec![summary("a"), summary("b"), summary("c"), summary("d")],
            "b",
        );
        let ids: Vec<&str> = related.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "d"]);
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_chars("ध्यान योग", 3), "ध्य...");
        assert_eq!(truncate_chars("short", 60), "short");
    }

    #[test]
    fn article_json_uses_store_field_names() {
        let article: Article = serde_json::from_str(
            r#"{"id":"x","primaryTitle":"Breath","audioURL":"/a.mp3","teaserImageURL":"/t.jpg"}"#,
        )
        .unwrap();
        assert_eq!(article.primary_title, "Breath");
        assert!(article.has_audio());
        assert_eq!(ArticleSummary::from(&article).image(), "/t.jpg");
    }
}
