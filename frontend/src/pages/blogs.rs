use dhyan_common::ArticleSummary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::blog_teaser::{ArticleCard, ARTICLE_CARD_CSS};
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::utils::content::load_articles;
use crate::utils::dom::scroll_to_top;
use crate::{CategoryQuery, Route};

const LIST_LIMIT: usize = 50;

/// Distinct categories in first-seen order.
fn categories(articles: &[ArticleSummary]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for article in articles {
        if !article.category.is_empty() && !seen.contains(&article.category) {
            seen.push(article.category.clone());
        }
    }
    seen
}

#[function_component(Blogs)]
pub fn blogs() -> Html {
    let articles = use_state(|| None::<Vec<ArticleSummary>>);
    let selected = use_location()
        .and_then(|location| location.query::<CategoryQuery>().ok())
        .and_then(|query| query.category)
        .filter(|category| !category.is_empty());

    {
        let articles = articles.clone();
        use_effect_with_deps(
            move |_| {
                scroll_to_top();
                spawn_local(async move {
                    articles.set(Some(load_articles(None, LIST_LIMIT).await));
                });
                || ()
            },
            (),
        );
    }

    let chip = |label: &str, category: Option<String>| {
        let active = category == selected;
        html! {
            <Link<Route, CategoryQuery>
                to={Route::Blogs}
                query={Some(CategoryQuery { category })}
                classes={classes!("category-chip", active.then_some("active"))}
            >
                {label.to_string()}
            </Link<Route, CategoryQuery>>
        }
    };

    let grid = match &*articles {
        None => html! { <p class="blogs-status">{"Loading articles..."}</p> },
        Some(list) => {
            let visible: Vec<&ArticleSummary> = list
                .iter()
                .filter(|article| selected.as_ref().map_or(true, |c| &article.category == c))
                .collect();
            if visible.is_empty() {
                html! { <p class="blogs-status">{"No articles here yet."}</p> }
            } else {
                html! {
                    <div class="article-grid">
                        { for visible.into_iter().map(|article| html! {
                            <ArticleCard key={article.id.clone()} article={article.clone()} />
                        }) }
                    </div>
                }
            }
        }
    };

    let chips = articles
        .as_ref()
        .map(|list| categories(list))
        .unwrap_or_default();

    html! {
        <>
            <style>{ARTICLE_CARD_CSS}</style>
            <style>{BLOGS_CSS}</style>
            <Navbar />
            <main class="blogs-page">
                <h1>{"Articles"}</h1>
                <nav class="category-chips">
                    { chip("All", None) }
                    { for chips.into_iter().map(|category| {
                        let label = category.clone();
                        chip(&label, Some(category))
                    }) }
                </nav>
                {grid}
            </main>
            <Footer />
        </>
    }
}

const BLOGS_CSS: &str = r#"
.blogs-page {
    width: 90%;
    max-width: 72rem;
    margin: 0 auto;
    padding: 8rem 0 4rem;
}
.blogs-page h1 {
    font-size: clamp(2.25rem, 4vw, 3.5rem);
    font-weight: 400;
}
.category-chips {
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
    margin-bottom: 2.5rem;
}
.category-chip {
    padding: 0.5rem 1.25rem;
    border-radius: 999px;
    border: 1px solid #d8c9ba;
    color: inherit;
    text-decoration: none;
}
.category-chip.active {
    background: #1f1a17;
    border-color: #1f1a17;
    color: white;
}
.article-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 1.75rem;
}
.blogs-status {
    opacity: 0.7;
}
"#;

