use dhyan_common::SectionTiming;
use yew::prelude::*;

use crate::hooks::{use_carousel, use_on_screen};

#[derive(Properties, PartialEq)]
pub struct HeroPhoneProps {
    pub frame: String,
    pub screens: Vec<String>,
}

/// Phone mockup cycling through app screens; a tap moves on by hand and
/// pauses the rotation for a moment.
#[function_component(HeroPhone)]
pub fn hero_phone(props: &HeroPhoneProps) -> Html {
    let phone_ref = use_node_ref();
    let on_screen = use_on_screen(phone_ref.clone());
    let carousel = use_carousel(
        SectionTiming::HERO_PHONE,
        props.screens.len(),
        !props.screens.is_empty() && on_screen,
    );

    let onclick = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.next())
    };

    html! {
        <div class="hero-phone" ref={phone_ref} {onclick}>
            <div class="phone-screens">
                { for props.screens.iter().enumerate().map(|(i, screen)| html! {
                    <img
                        class={classes!("phone-screen", (i == carousel.index).then_some("phone-screen-active"))}
                        src={screen.clone()}
                        alt="Dhyan app screen"
                    />
                }) }
            </div>
            if !props.frame.is_empty() {
                <img class="phone-frame" src={props.frame.clone()} alt="" />
            }
        </div>
    }
}
