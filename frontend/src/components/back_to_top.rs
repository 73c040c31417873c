use yew::prelude::*;

use crate::utils::dom::scroll_to_top;

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    if !props.visible {
        return html! {};
    }
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());
    html! {
        <button
            class="back-to-top"
            aria-label="Back to top"
            style="position: fixed; right: 2rem; bottom: 2rem; width: 48px; height: 48px; border-radius: 50%; border: none; background: #1f1a17; color: white; font-size: 1.25rem; cursor: pointer; z-index: 900;"
            {onclick}
        >
            {"↑"}
        </button>
    }
}
