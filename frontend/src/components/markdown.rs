use pulldown_cmark::{html, Options, Parser};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MarkdownProps {
    pub source: AttrValue,
}

pub fn to_html(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Renders article markdown. Raw HTML in the source is passed through, so
/// only feed it content from the site's own store.
#[function_component(Markdown)]
pub fn markdown(props: &MarkdownProps) -> Html {
    let rendered = to_html(&props.source);
    let Some(div) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.create_element("div").ok())
    else {
        return html! { <pre>{props.source.clone()}</pre> };
    };
    div.set_class_name("markdown");
    div.set_inner_html(&rendered);
    Html::VRef(div.into())
}
