use dhyan_common::article::{format_article_date, related_articles};
use dhyan_common::{Article, ArticleSummary};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::audio_player::AudioPlayer;
use crate::components::back_to_top::BackToTop;
use crate::components::blog_teaser::{ArticleCard, ARTICLE_CARD_CSS};
use crate::components::footer::Footer;
use crate::components::markdown::Markdown;
use crate::components::navbar::Navbar;
use crate::hooks::use_window_scroll;
use crate::utils::content::{load_article, load_articles};
use crate::utils::dom::scroll_to_top;
use crate::{ArticleQuery, Route};

const BACK_TO_TOP_AFTER_PX: f64 = 300.0;
/// One extra so the current article can be dropped.
const RELATED_FETCH: usize = 4;

#[derive(Clone, PartialEq)]
enum ArticleState {
    Loading,
    Missing,
    Ready(Article),
}

#[derive(Properties, PartialEq)]
pub struct BlogPageProps {
    pub id: String,
}

#[function_component(BlogPage)]
pub fn blog_page(props: &BlogPageProps) -> Html {
    let article = use_state(|| ArticleState::Loading);
    let related = use_state(Vec::<ArticleSummary>::new);
    let image_attempt = use_state(|| 0usize);
    let show_top = use_state(|| false);
    let related_kind = use_location()
        .and_then(|location| location.query::<ArticleQuery>().ok())
        .and_then(|query| query.kind)
        .filter(|kind| !kind.is_empty());

    {
        let article = article.clone();
        let related = related.clone();
        let image_attempt = image_attempt.clone();
        use_effect_with_deps(
            move |id: &String| {
                scroll_to_top();
                article.set(ArticleState::Loading);
                related.set(Vec::new());
                image_attempt.set(0);
                let id = id.clone();
                spawn_local(async move {
                    let Some(loaded) = load_article(&id).await else {
                        article.set(ArticleState::Missing);
                        return;
                    };
                    let category = related_kind.unwrap_or_else(|| loaded.category.clone());
                    article.set(ArticleState::Ready(loaded));
                    let candidates = load_articles(Some(&category), RELATED_FETCH).await;
                    related.set(related_articles(candidates, &id));
                });
                || ()
            },
            props.id.clone(),
        );
    }

    {
        let show_top = show_top.clone();
        use_window_scroll(Callback::from(move |y: f64| {
            let visible = y > BACK_TO_TOP_AFTER_PX;
            if *show_top != visible {
                show_top.set(visible);
            }
        }));
    }

    let body = match &*article {
        ArticleState::Loading => html! { <p class="article-status">{"Loading..."}</p> },
        ArticleState::Missing => html! {
            <div class="article-status">
                <h1>{"Article not found"}</h1>
                <Link<Route> to={Route::Blogs}>{"Browse all articles"}</Link<Route>>
            </div>
        },
        ArticleState::Ready(article) => {
            let candidates = article.hero_image_candidates();
            let src = candidates
                .get(*image_attempt)
                .or(candidates.last())
                .map(|url| url.to_string())
                .unwrap_or_default();
            let onerror = {
                let image_attempt = image_attempt.clone();
                let last = candidates.len().saturating_sub(1);
                Callback::from(move |_: Event| {
                    if *image_attempt < last {
                        image_attempt.set(*image_attempt + 1);
                    }
                })
            };
            html! {
                <article class="article">
                    <img class="article-hero" {src} alt="" {onerror} />
                    <h1>{article.primary_title.clone()}</h1>
                    if !article.sub_title.is_empty() {
                        <p class="article-subtitle">{article.sub_title.clone()}</p>
                    }
                    <div class="article-meta">
                        <span>{article.author().to_string()}</span>
                        <span>{format_article_date(&article.date)}</span>
                    </div>
                    if article.has_audio() {
                        <AudioPlayer src={article.audio_url.clone()} />
                    }
                    <Markdown source={AttrValue::from(article.body())} />
                </article>
            }
        }
    };

    html! {
        <>
            <style>{ARTICLE_CARD_CSS}</style>
            <style>{ARTICLE_CSS}</style>
            <Navbar />
            <main class="article-page">
                {body}
                if !related.is_empty() {
                    <section class="related">
                        <h2>{"Related articles"}</h2>
                        <div class="article-row">
                            { for related.iter().map(|summary| html! {
                                <ArticleCard key={summary.id.clone()} article={summary.clone()} />
                            }) }
                        </div>
                    </section>
                }
            </main>
            <BackToTop visible={*show_top} />
            <Footer />
        </>
    }
}

const ARTICLE_CSS: &str = r#"
.article-page {
    width: 90%;
    max-width: 48rem;
    margin: 0 auto;
    padding: 7rem 0 4rem;
}
.article-hero {
    width: 100%;
    max-height: 420px;
    object-fit: cover;
    border-radius: 24px;
}
.article h1 {
    font-size: clamp(2rem, 4vw, 3rem);
    font-weight: 400;
    margin: 2rem 0 0.5rem;
}
.article-subtitle {
    font-size: 1.2rem;
    opacity: 0.8;
}
.article-meta {
    display: flex;
    gap: 1.5rem;
    font-size: 0.9rem;
    opacity: 0.7;
}
.markdown {
    line-height: 1.75;
    font-size: 1.1rem;
}
.related {
    margin-top: 5rem;
}
.related h2 {
    font-weight: 400;
}
.article-status {
    min-height: 50vh;
    text-align: center;
    padding-top: 4rem;
}
"#;
