use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod audio_player;
    pub mod back_to_top;
    pub mod blog_teaser;
    pub mod contact;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod hero_phone;
    pub mod markdown;
    pub mod navbar;
    pub mod social;
    pub mod testimonials;
}
mod hooks;
mod pages {
    pub mod blog_page;
    pub mod blogs;
    pub mod landing;
    pub mod not_found;
}
mod utils {
    pub mod api;
    pub mod content;
    pub mod dom;
    pub mod listener;
}

use pages::{blog_page::BlogPage, blogs::Blogs, landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blogs")]
    Blogs,
    #[at("/blog/:id")]
    BlogPage { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// `?category=` on the list page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// `?type=` on the article page; picks the related-articles category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleQuery {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::Blogs => html! { <Blogs /> },
        Route::BlogPage { id } => html! { <BlogPage id={id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting Dhyan site");
    yew::Renderer::<App>::new().render();
}
