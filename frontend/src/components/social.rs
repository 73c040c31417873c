use dhyan_common::content::SocialItem;
use dhyan_common::scroll::{is_on_screen, ScrollDirection, ScrollStepper};
use dhyan_common::SectionTiming;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::{use_carousel, use_on_screen, use_window_scroll};
use crate::utils::content::load_social;
use crate::utils::dom::{rect_of, viewport_height};

#[function_component(Social)]
pub fn social() -> Html {
    let items = use_state(Vec::<SocialItem>::new);
    let section_ref = use_node_ref();
    let stepper = use_mut_ref(ScrollStepper::default);
    let on_screen = use_on_screen(section_ref.clone());
    let carousel = use_carousel(SectionTiming::SOCIAL, items.len(), !items.is_empty() && on_screen);

    {
        let items = items.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    items.set(load_social().await);
                });
                || ()
            },
            (),
        );
    }

    {
        let carousel = carousel.clone();
        let section_ref = section_ref.clone();
        use_window_scroll(Callback::from(move |y: f64| {
            // The baseline tracks every position so entering the section
            // doesn't count as one big jump.
            let step = stepper.borrow_mut().observe(y);
            let in_view = rect_of(&section_ref)
                .map(|(top, height)| is_on_screen(top, height, viewport_height()))
                .unwrap_or(false);
            match step {
                Some(ScrollDirection::Down) if in_view => carousel.next(),
                Some(ScrollDirection::Up) if in_view => carousel.prev(),
                _ => {}
            }
        }));
    }

    let current = items.get(carousel.index);
    let on_select = carousel.on_select();
    let ontouchmove = {
        let carousel = carousel.clone();
        Callback::from(move |_: TouchEvent| carousel.interact())
    };

    html! {
        <section id="social" class="social" ref={section_ref} {ontouchmove}>
            <style>{SOCIAL_CSS}</style>
            if let Some(item) = current {
                <div class="social-inner" key={carousel.index}>
                    <div class="social-copy">
                        <h2>{item.heading.clone()}</h2>
                        <p>{item.paragraph.clone()}</p>
                    </div>
                    <img class="social-mockup" src={item.image.clone()} alt={item.heading.clone()} />
                </div>
                <div class="dots">
                    { for (0..items.len()).map(|i| {
                        let on_select = on_select.clone();
                        html! {
                            <button
                                class={classes!("dot", (i == carousel.index).then_some("dot-active"))}
                                aria-label={format!("Show item {}", i + 1)}
                                onclick={Callback::from(move |_: MouseEvent| on_select.emit(i))}
                            />
                        }
                    }) }
                </div>
            }
        </section>
    }
}

const SOCIAL_CSS: &str = r#"
.social {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 2rem;
    background: #12151b;
    color: white;
}
.social-inner {
    width: 90%;
    max-width: 64rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 3rem;
    animation: social-in 0.5s ease;
}
.social-copy h2 {
    font-size: clamp(2rem, 4vw, 3.25rem);
    font-weight: 400;
}
.social-copy p {
    opacity: 0.8;
    max-width: 28rem;
}
.social-mockup {
    width: 320px;
    border-radius: 32px;
}
.dots {
    display: flex;
    gap: 0.5rem;
}
.dot {
    width: 10px;
    height: 10px;
    border-radius: 50%;
    border: none;
    background: rgba(255, 255, 255, 0.35);
    cursor: pointer;
}
.dot-active {
    background: white;
}
@keyframes social-in {
    from { opacity: 0; }
    to { opacity: 1; }
}
@media (max-width: 768px) {
    .social-inner { flex-direction: column; text-align: center; }
    .social-mockup { width: 240px; }
}
"#;
