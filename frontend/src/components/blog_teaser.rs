use dhyan_common::ArticleSummary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::utils::content::load_articles;
use crate::{ArticleQuery, Route};

pub const TEASER_COUNT: usize = 3;

#[derive(Properties, PartialEq)]
pub struct ArticleCardProps {
    pub article: ArticleSummary,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let query = ArticleQuery {
        kind: Some(article.category.clone()).filter(|c| !c.is_empty()),
    };
    html! {
        <Link<Route, ArticleQuery>
            to={Route::BlogPage { id: article.id.clone() }}
            query={Some(query)}
            classes="article-card"
        >
            <img class="article-card-image" src={article.image().to_string()} alt="" />
            <div class="article-card-body">
                <div class="article-card-title">{article.title_preview()}</div>
                <div class="article-card-author">{article.author().to_string()}</div>
            </div>
        </Link<Route, ArticleQuery>>
    }
}

/// Latest articles on the landing page.
#[function_component(BlogTeaser)]
pub fn blog_teaser() -> Html {
    let articles = use_state(Vec::<ArticleSummary>::new);

    {
        let articles = articles.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    articles.set(load_articles(None, TEASER_COUNT).await);
                });
                || ()
            },
            (),
        );
    }

    html! {
        <section id="blog" class="blog-teaser">
            <style>{ARTICLE_CARD_CSS}</style>
            <h2>{"From the blog"}</h2>
            <div class="article-row">
                { for articles.iter().map(|article| html! {
                    <ArticleCard key={article.id.clone()} article={article.clone()} />
                }) }
            </div>
            <Link<Route> to={Route::Blogs} classes="see-all">{"See all articles"}</Link<Route>>
        </section>
    }
}

pub const ARTICLE_CARD_CSS: &str = r#"
.blog-teaser {
    padding: 6rem 5%;
    text-align: center;
}
.blog-teaser h2 {
    font-size: clamp(2rem, 4vw, 3.5rem);
    font-weight: 400;
}
.article-row {
    display: flex;
    gap: 1.75rem;
    justify-content: center;
    overflow-x: auto;
    padding: 1rem 0 2rem;
}
.article-card {
    display: block;
    flex-shrink: 0;
    width: 360px;
    background: white;
    border-radius: 24px;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
    text-decoration: none;
    color: inherit;
    overflow: hidden;
    transition: transform 0.3s ease;
    text-align: left;
}
.article-card:hover {
    transform: scale(1.03);
}
.article-card-image {
    width: 100%;
    height: 240px;
    object-fit: cover;
}
.article-card-body {
    padding: 1.25rem;
}
.article-card-title {
    font-weight: 600;
    margin-bottom: 0.5rem;
}
.article-card-author {
    font-size: 0.8rem;
    color: #6b6259;
}
.see-all {
    display: inline-block;
    margin-top: 1rem;
    font-weight: 600;
}
"#;
