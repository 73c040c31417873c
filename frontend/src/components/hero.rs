use std::cell::RefCell;
use std::rc::Rc;

use dhyan_common::content::HeroContent;
use dhyan_common::scroll::{AutoScrollLatch, TriggerEvent, TriggerSpan};
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::hero_phone::HeroPhone;
use crate::hooks::{use_pin_trigger, use_window_scroll};
use crate::utils::content::load_hero;
use crate::utils::dom::scroll_to_node;

const AUTO_SCROLL_MS: u32 = 1500;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Where the auto-scroll lands.
    pub features_ref: NodeRef,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let content = use_state(|| None::<HeroContent>);
    let hero_ref = use_node_ref();
    let latch = use_mut_ref(AutoScrollLatch::default);
    let finish_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let content = content.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    content.set(Some(load_hero().await));
                });
                || ()
            },
            (),
        );
    }

    {
        let finish_timer = finish_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    finish_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    {
        let latch = latch.clone();
        let finish_timer = finish_timer.clone();
        let features_ref = props.features_ref.clone();
        use_pin_trigger(
            hero_ref.clone(),
            TriggerSpan::FullHeight,
            Callback::from(move |events: Vec<TriggerEvent>| {
                for event in events {
                    if !latch.borrow_mut().on_event(event) {
                        continue;
                    }
                    log::debug!("Auto-scrolling from hero to features");
                    scroll_to_node(&features_ref);
                    let latch = latch.clone();
                    *finish_timer.borrow_mut() = Some(Timeout::new(AUTO_SCROLL_MS, move || {
                        latch.borrow_mut().complete();
                    }));
                }
            }),
        );
    }

    {
        let latch = latch.clone();
        use_window_scroll(Callback::from(move |y: f64| latch.borrow_mut().on_scroll_y(y)));
    }

    let body = match &*content {
        Some(hero) => html! {
            <>
                <div class="hero-copy">
                    <h1>{hero.title.clone()}</h1>
                    <p class="hero-subtitle">{hero.subtitle.clone()}</p>
                    <p class="hero-download">{hero.download_text.clone()}</p>
                    <div class="store-badges">
                        { for [&hero.app_store, &hero.google_play].into_iter()
                            .filter(|badge| !badge.image_url.is_empty())
                            .map(|badge| html! {
                                <a href={badge.link.clone()} target="_blank" rel="noopener noreferrer">
                                    <img src={badge.image_url.clone()} alt="Download badge" />
                                </a>
                            }) }
                    </div>
                </div>
                <HeroPhone frame={hero.phone_frame.clone()} screens={hero.screens.clone()} />
            </>
        },
        None => html! { <div class="hero-copy hero-loading"></div> },
    };

    html! {
        <section id="hero" class="hero" ref={hero_ref}>
            <style>{HERO_CSS}</style>
            <div class="hero-inner">{body}</div>
        </section>
    }
}

const HERO_CSS: &str = r#"
.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background: radial-gradient(circle at 30% 20%, #3b2a20 0%, #12151b 70%);
    color: white;
}
.hero-inner {
    width: 90%;
    max-width: 72rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 3rem;
    padding-top: 6rem;
}
.hero-copy h1 {
    font-size: clamp(2.5rem, 5vw, 4.5rem);
    font-weight: 400;
    margin: 0 0 1rem;
}
.hero-subtitle {
    font-size: 1.25rem;
    opacity: 0.85;
}
.hero-download {
    margin-top: 2rem;
    font-weight: 600;
}
.hero-loading {
    min-height: 12rem;
}
.store-badges {
    display: flex;
    gap: 1rem;
}
.store-badges img {
    height: 48px;
}
.hero-phone {
    position: relative;
    width: 280px;
    height: 570px;
    flex-shrink: 0;
    cursor: pointer;
}
.phone-screens, .phone-frame {
    position: absolute;
    inset: 0;
}
.phone-screens {
    inset: 3% 5%;
    overflow: hidden;
    border-radius: 36px;
}
.phone-screen {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0;
    transition: opacity 0.6s ease;
}
.phone-screen-active {
    opacity: 1;
}
.phone-frame {
    width: 100%;
    height: 100%;
    pointer-events: none;
}
@media (max-width: 768px) {
    .hero-inner { flex-direction: column; text-align: center; }
    .store-badges { justify-content: center; }
    .hero-phone { width: 220px; height: 448px; }
}
"#;
