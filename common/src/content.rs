//! Section content as stored in the document collections, plus the built-in
//! placeholders shown when a collection can't be loaded.
//!
//! Store documents are loosely shaped (fields go missing, some keys carry a
//! trailing space, star counts appear as `star` or `stars`), so the
//! normalizers below read `serde_json::Value`s defensively instead of relying
//! on a strict derive.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::article::truncate_chars;

/// Display order for feature categories; unknown names sort last, in the
/// order the store returned them.
pub const FEATURE_ORDER: [&str; 5] = ["Meditation", "Mantra", "Pranayama", "Knowledge", "Yoga"];

/// Longer feature descriptions are cut here behind a "Read more" toggle.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 80;

const DEFAULT_STARS: u8 = 5;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("collection `{0}` has no usable documents")]
    Empty(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    Features,
    Social,
    Testimonials,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Features,
        Section::Social,
        Section::Testimonials,
    ];

    pub fn collection(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Features => "features",
            Section::Social => "social",
            Section::Testimonials => "testimonials",
        }
    }

    pub fn from_collection(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.collection() == name)
    }
}

/// A stored document as served by `/api/collections/{collection}/documents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

fn text(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocialItem {
    pub heading: String,
    pub image: String,
    pub paragraph: String,
}

impl SocialItem {
    fn from_value(value: &Value) -> Self {
        Self {
            heading: text(value, "heading"),
            image: text(value, "image"),
            paragraph: text(value, "paragraph"),
        }
    }
}

/// Social mockups. A document may hold a single item or an array of them.
pub fn social_items(documents: &[Document]) -> Result<Vec<SocialItem>, ContentError> {
    let items: Vec<SocialItem> = documents
        .iter()
        .flat_map(|document| match &document.data {
            Value::Array(entries) => entries.iter().map(SocialItem::from_value).collect(),
            other => vec![SocialItem::from_value(other)],
        })
        .collect();

    if items
        .iter()
        .any(|item| !item.heading.is_empty() && !item.image.is_empty())
    {
        Ok(items)
    } else {
        Err(ContentError::Empty(Section::Social.collection()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub text: String,
    pub name: String,
    pub image: String,
    pub stars: u8,
}

impl Review {
    fn from_value(value: &Value) -> Self {
        let stars = ["stars", "star"]
            .iter()
            .filter_map(|key| value.get(*key).and_then(Value::as_f64))
            .map(|stars| stars.round().clamp(0.0, 5.0) as u8)
            .find(|stars| *stars > 0)
            .unwrap_or(DEFAULT_STARS);
        Self {
            text: text(value, "text"),
            name: text(value, "name"),
            image: text(value, "image"),
            stars,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStyles {
    pub active: String,
    pub inactive: String,
    pub star_icon: String,
}

impl Default for CardStyles {
    fn default() -> Self {
        Self {
            active: "/assets/testimonials/card-active.svg".to_string(),
            inactive: "/assets/testimonials/card-inactive.svg".to_string(),
            star_icon: "/assets/testimonials/star.svg".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialContent {
    pub card_styles: CardStyles,
    pub reviews: Vec<Review>,
}

impl TestimonialContent {
    /// Reads the first document of the collection.
    pub fn from_documents(documents: &[Document]) -> Result<Self, ContentError> {
        let empty = ContentError::Empty(Section::Testimonials.collection());
        let data = &documents.first().ok_or(empty.clone())?.data;

        let card_styles = data
            .get("cardStyles")
            .and_then(|styles| serde_json::from_value(styles.clone()).ok())
            .unwrap_or_default();
        let reviews: Vec<Review> = ["reviews", "reviews "]
            .iter()
            .find_map(|key| data.get(*key).and_then(Value::as_array))
            .map(|entries| entries.iter().map(Review::from_value).collect())
            .unwrap_or_default();

        if reviews.is_empty() {
            return Err(empty);
        }
        Ok(Self {
            card_styles,
            reviews,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCategory {
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
}

impl FeatureCategory {
    fn from_document(document: &Document) -> Self {
        let title = text(&document.data, "title");
        Self {
            name: if title.is_empty() {
                document.id.clone()
            } else {
                title
            },
            description: text(&document.data, "content"),
            images: ["image1", "image2", "image3"]
                .iter()
                .map(|key| text(&document.data, key))
                .filter(|image| !image.is_empty())
                .collect(),
        }
    }

    pub fn is_long(&self) -> bool {
        self.description.chars().count() > DESCRIPTION_PREVIEW_CHARS
    }

    pub fn preview(&self) -> String {
        truncate_chars(&self.description, DESCRIPTION_PREVIEW_CHARS)
    }

    fn order_rank(&self) -> usize {
        FEATURE_ORDER
            .iter()
            .position(|name| *name == self.name)
            .unwrap_or(FEATURE_ORDER.len())
    }
}

/// One category per document, in [`FEATURE_ORDER`].
pub fn feature_categories(documents: &[Document]) -> Result<Vec<FeatureCategory>, ContentError> {
    let mut categories: Vec<FeatureCategory> =
        documents.iter().map(FeatureCategory::from_document).collect();
    if categories.is_empty() {
        return Err(ContentError::Empty(Section::Features.collection()));
    }
    // Stable, so unknown names keep their store order.
    categories.sort_by_key(FeatureCategory::order_rank);
    Ok(categories)
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreBadge {
    pub image_url: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub download_text: String,
    pub app_store: StoreBadge,
    pub google_play: StoreBadge,
    pub phone_frame: String,
    pub screens: Vec<String>,
}

impl HeroContent {
    pub fn from_documents(documents: &[Document]) -> Result<Self, ContentError> {
        let data = documents
            .iter()
            .find(|document| document.id == "mainPageContent")
            .or_else(|| documents.first())
            .map(|document| &document.data)
            .ok_or(ContentError::Empty(Section::Hero.collection()))?;

        let badge = |keys: &[&str]| -> StoreBadge {
            keys.iter()
                .find_map(|key| data.get("stores").and_then(|stores| stores.get(*key)))
                .map(|store| StoreBadge {
                    image_url: text(store, "imageUrl"),
                    link: text(store, "link"),
                })
                .unwrap_or_default()
        };
        let mockup = data.get("phoneMockup");
        let hero = Self {
            title: text(data, "title"),
            subtitle: text(data, "subtitle"),
            download_text: text(data, "downloadText"),
            app_store: badge(&["appleAppStore"]),
            google_play: badge(&["googlePlay", "googlePlay "]),
            phone_frame: mockup.map(|m| text(m, "frameUrl")).unwrap_or_default(),
            screens: mockup
                .and_then(|m| m.get("screens"))
                .and_then(Value::as_array)
                .map(|screens| {
                    screens
                        .iter()
                        .filter_map(Value::as_str)
                        .filter(|screen| !screen.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        };

        if hero.title.is_empty() {
            return Err(ContentError::Empty(Section::Hero.collection()));
        }
        Ok(hero)
    }
}

/// Placeholder content shown while a collection is unavailable.
pub mod fallback {
    use super::*;

    const LOREM: &str = "Short guided sessions, daily reminders and a calm space to return to. \
        Everything you need to build a practice that lasts.";

    pub fn hero() -> HeroContent {
        HeroContent {
            title: "Find your calm with Dhyan".to_string(),
            subtitle: "Meditation, mantra and breathwork in one gentle daily practice.".to_string(),
            download_text: "Download the app".to_string(),
            app_store: StoreBadge {
                image_url: "/assets/stores/app-store.svg".to_string(),
                link: String::new(),
            },
            google_play: StoreBadge {
                image_url: "/assets/stores/google-play.svg".to_string(),
                link: String::new(),
            },
            phone_frame: "/assets/phone/frame.png".to_string(),
            screens: (1..=3)
                .map(|n| format!("/assets/phone/screen-{n}.png"))
                .collect(),
        }
    }

    pub fn features() -> Vec<FeatureCategory> {
        FEATURE_ORDER
            .iter()
            .map(|name| FeatureCategory {
                name: name.to_string(),
                description: format!("{name} practices guided step by step, at your own pace."),
                images: (1..=3)
                    .map(|n| format!("/assets/features/{}-{n}.png", name.to_lowercase()))
                    .collect(),
            })
            .collect()
    }

    pub fn social() -> Vec<SocialItem> {
        vec![
            SocialItem {
                heading: "Spiritual Community".to_string(),
                image: "/assets/social/community.png".to_string(),
                paragraph: LOREM.to_string(),
            },
            SocialItem {
                heading: "Track your Progress".to_string(),
                image: "/assets/social/progress.png".to_string(),
                paragraph: LOREM.to_string(),
            },
        ]
    }

    pub fn testimonials() -> TestimonialContent {
        let reviews = [
            ("Sarah C.", "The guided sessions are calming and the streaks keep me coming back every morning."),
            ("Michael R.", "Breathing exercises that actually fit into a busy day. My evenings are quieter now."),
            ("Priya P.", "I found a community that shares my practice. It has become part of my routine."),
            ("David T.", "A thoughtful app with real depth. The variety of practices keeps it fresh."),
            ("Emma W.", "Gentle reminders and good content helped me finally meditate consistently."),
        ];
        TestimonialContent {
            card_styles: CardStyles::default(),
            reviews: reviews
                .iter()
                .map(|(name, text)| Review {
                    text: text.to_string(),
                    name: name.to_string(),
                    image: "/assets/profile.png".to_string(),
                    stars: DEFAULT_STARS,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn doc(id: &str, data: Value) -> Document {
        Document {
            id: id.to_string(),
            data,
        }
    }

    #[test]
    fn reviews_accept_both_key_spellings() {
        let documents = vec![doc(
            "main",
            json!({
                "reviews ": [
                    { "text": "Lovely", "name": "Ana", "star": 4 },
                    { "text": "Calm", "name": "Ben", "stars": 0 },
                    { "text": "Peace", "name": "Cy" }
                ]
            }),
        )];
        let content = TestimonialContent::from_documents(&documents).unwrap();
        let stars: Vec<u8> = content.reviews.iter().map(|r| r.stars).collect();
        assert_eq!(stars, vec![4, 5, 5]);
        assert_eq!(content.card_styles, CardStyles::default());
    }

    #[test]
    fn testimonials_without_reviews_are_unusable() {
        let documents = vec![doc("main", json!({ "cardStyles": {} }))];
        assert_eq!(
            TestimonialContent::from_documents(&documents),
            Err(ContentError::Empty("testimonials"))
        );
        assert!(TestimonialContent::from_documents(&[]).is_err());
    }

    #[test]
    fn social_items_flatten_array_documents() {
        let documents = vec![doc(
            "list",
            json!([
                { "heading": "One", "image": "/a.png", "paragraph": "p" },
                { "heading": "Two", "image": "/b.png" }
            ]),
        )];
        let items = social_items(&documents).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].paragraph, "");
    }

    #[test]
    fn social_items_need_one_complete_entry() {
        let documents = vec![doc("a", json!({ "heading": "No image" }))];
        assert!(social_items(&documents).is_err());
    }

    #[test]
    fn features_follow_display_order() {
        let documents = vec![
            doc("yoga", json!({ "title": "Yoga", "image1": "/y.png" })),
            doc("extra", json!({ "content": "?" })),
            doc("med", json!({ "title": "Meditation", "image1": "/m1", "image2": "", "image3": "/m3" })),
            doc("mantra", json!({ "title": "Mantra" })),
        ];
        let categories = feature_categories(&documents).unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Meditation", "Mantra", "Yoga", "extra"]);
        assert_eq!(categories[0].images, vec!["/m1", "/m3"]);
    }

    #[test]
    fn unknown_categories_keep_store_order() {
        let documents = vec![
            doc("z", json!({ "title": "Zazen" })),
            doc("yoga", json!({ "title": "Yoga" })),
            doc("b", json!({ "title": "Bhakti" })),
            doc("meditation", json!({ "title": "Meditation" })),
        ];
        let categories = feature_categories(&documents).unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Meditation", "Yoga", "Zazen", "Bhakti"]);
    }

    #[test]
    fn long_descriptions_get_a_preview() {
        let mut category = FeatureCategory {
            name: "Yoga".to_string(),
            description: "a".repeat(DESCRIPTION_PREVIEW_CHARS),
            images: vec![],
        };
        assert!(!category.is_long());
        category.description.push('b');
        assert!(category.is_long());
        assert_eq!(category.preview().len(), DESCRIPTION_PREVIEW_CHARS + 3);
    }

    #[test]
    fn hero_reads_store_key_with_trailing_space() {
        let documents = vec![doc(
            "mainPageContent",
            json!({
                "title": "Breathe",
                "stores": {
                    "appleAppStore": { "imageUrl": "/apple.svg", "link": "https://apple" },
                    "googlePlay ": { "imageUrl": "/play.svg", "link": "https://play" }
                },
                "phoneMockup": { "frameUrl": "/frame.png", "screens": ["/1.png", ""] }
            }),
        )];
        let hero = HeroContent::from_documents(&documents).unwrap();
        assert_eq!(hero.google_play.link, "https://play");
        assert_eq!(hero.app_store.image_url, "/apple.svg");
        assert_eq!(hero.screens, vec!["/1.png"]);
    }

    #[test]
    fn fallbacks_are_never_empty() {
        assert!(!fallback::social().is_empty());
        assert!(!fallback::testimonials().reviews.is_empty());
        assert_eq!(fallback::features().len(), FEATURE_ORDER.len());
        assert!(!fallback::hero().screens.is_empty());
    }

    #[test]
    fn section_names_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_collection(section.collection()), Some(section));
        }
        assert_eq!(Section::from_collection("blog"), None);
    }
}
