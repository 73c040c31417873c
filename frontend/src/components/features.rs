use dhyan_common::content::FeatureCategory;
use dhyan_common::scroll::{TriggerEvent, TriggerSpan};
use dhyan_common::SectionTiming;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::{use_carousel, use_pin_trigger};
use crate::utils::content::load_features;
use crate::utils::dom::{rect_of, scroll_to_y, scroll_y, viewport_height};

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub section_ref: NodeRef,
    /// True while the section is pinned to the viewport.
    pub on_pinned: Callback<bool>,
}

/// Practices, one per viewport of scroll. The section is as tall as its
/// categories and the inner panel sticks while the page scrolls through it.
#[function_component(Features)]
pub fn features(props: &FeaturesProps) -> Html {
    let categories = use_state(Vec::<FeatureCategory>::new);
    let expanded = use_state(|| false);
    let carousel = use_carousel(SectionTiming::FEATURES, categories.len(), false);

    {
        let categories = categories.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    categories.set(load_features().await);
                });
                || ()
            },
            (),
        );
    }

    {
        let expanded = expanded.clone();
        use_effect_with_deps(
            move |_| {
                expanded.set(false);
                || ()
            },
            carousel.index,
        );
    }

    {
        let carousel = carousel.clone();
        let on_pinned = props.on_pinned.clone();
        use_pin_trigger(
            props.section_ref.clone(),
            TriggerSpan::Pinned,
            Callback::from(move |events: Vec<TriggerEvent>| {
                for event in events {
                    match event {
                        TriggerEvent::Enter | TriggerEvent::EnterBack => on_pinned.emit(true),
                        TriggerEvent::Leave | TriggerEvent::LeaveBack => on_pinned.emit(false),
                        TriggerEvent::Update { progress, .. } => carousel.scroll_progress(progress),
                    }
                }
            }),
        );
    }

    // Tabs jump to the middle of the category's stretch of scroll.
    let jump_to = {
        let section_ref = props.section_ref.clone();
        let len = categories.len();
        move |index: usize| {
            let section_ref = section_ref.clone();
            Callback::from(move |_: MouseEvent| {
                let Some((top, height)) = rect_of(&section_ref) else {
                    return;
                };
                let range = (height - viewport_height()).max(0.0);
                let fraction = (index as f64 + 0.5) / len.max(1) as f64;
                scroll_to_y(scroll_y() + top + range * fraction, true);
            })
        }
    };

    let toggle_expanded = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let panel = match categories.get(carousel.index) {
        Some(category) => {
            let description = if category.is_long() && !*expanded {
                category.preview()
            } else {
                category.description.clone()
            };
            let toggle_label = if *expanded { "Show less" } else { "Read more" };
            html! {
                <div class="feature-panel" key={category.name.clone()}>
                    <div class="feature-copy">
                        <h2>{category.name.clone()}</h2>
                        <p>{description}</p>
                        if category.is_long() {
                            <button class="read-more" onclick={toggle_expanded}>{toggle_label}</button>
                        }
                    </div>
                    <div class="feature-images">
                        { for category.images.iter().map(|image| html! {
                            <img src={image.clone()} alt={category.name.clone()} />
                        }) }
                    </div>
                </div>
            }
        }
        None => html! {},
    };

    let height = format!("height: {}vh;", categories.len().max(1) * 100);

    html! {
        <section id="features" class="features" ref={props.section_ref.clone()} style={height}>
            <style>{FEATURES_CSS}</style>
            <div class="features-sticky">
                <div class="feature-tabs">
                    { for categories.iter().enumerate().map(|(i, category)| html! {
                        <button
                            class={classes!("feature-tab", (i == carousel.index).then_some("feature-tab-active"))}
                            onclick={jump_to(i)}
                        >
                            {category.name.clone()}
                        </button>
                    }) }
                </div>
                {panel}
            </div>
        </section>
    }
}

const FEATURES_CSS: &str = r#"
.features {
    position: relative;
    background: #fdf8f3;
}
.features-sticky {
    position: sticky;
    top: 0;
    height: 100vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    gap: 2rem;
    overflow: hidden;
}
.feature-tabs {
    display: flex;
    gap: 0.75rem;
    flex-wrap: wrap;
    justify-content: center;
}
.feature-tab {
    border: 1px solid #c9b8a8;
    background: transparent;
    border-radius: 999px;
    padding: 0.5rem 1.25rem;
    cursor: pointer;
    font-size: 1rem;
}
.feature-tab-active {
    background: #1f1a17;
    color: white;
    border-color: #1f1a17;
}
.feature-panel {
    width: 90%;
    max-width: 72rem;
    display: flex;
    gap: 3rem;
    align-items: center;
    animation: feature-in 0.6s ease;
}
.feature-copy {
    flex: 1;
}
.feature-copy h2 {
    font-size: clamp(2rem, 4vw, 3.5rem);
    font-weight: 400;
    margin: 0 0 1rem;
}
.read-more {
    background: none;
    border: none;
    padding: 0;
    color: #a0522d;
    cursor: pointer;
    font-weight: 600;
}
.feature-images {
    flex: 1.4;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1rem;
}
.feature-images img {
    width: 100%;
    border-radius: 24px;
    object-fit: cover;
}
@keyframes feature-in {
    from { opacity: 0; transform: translateY(24px); }
    to { opacity: 1; transform: none; }
}
@media (max-width: 768px) {
    .feature-panel { flex-direction: column; gap: 1.5rem; }
    .feature-images { width: 100%; }
}
"#;
