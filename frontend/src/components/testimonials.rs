use dhyan_common::carousel::wrapped_offset;
use dhyan_common::content::{Review, TestimonialContent};
use dhyan_common::SectionTiming;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_carousel;
use crate::utils::content::load_testimonials;

/// Cards further than this from the centre are not drawn.
const VISIBLE_RADIUS: isize = 2;
const SWIPE_MIN_PX: i32 = 50;

fn slot_style(offset: isize) -> String {
    let scale = 1.0 - 0.12 * offset.unsigned_abs() as f64;
    format!(
        "transform: translateX({}%) scale({}); z-index: {};",
        offset * 62,
        scale,
        10 - offset.abs()
    )
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let content = use_state(|| None::<TestimonialContent>);
    let len = (*content).as_ref().map_or(0, |c| c.reviews.len());
    let carousel = use_carousel(SectionTiming::TESTIMONIALS, len, false);
    let touch_start = use_mut_ref(|| None::<i32>);

    {
        let content = content.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    content.set(Some(load_testimonials().await));
                });
                || ()
            },
            (),
        );
    }

    let Some(content) = (*content).as_ref() else {
        return html! { <section id="testimonials" class="testimonials"></section> };
    };
    let styles = &content.card_styles;

    let card = |(i, review): (usize, &Review)| -> Html {
        let offset = wrapped_offset(i, carousel.index, len);
        if offset.abs() > VISIBLE_RADIUS {
            return html! {};
        }
        let active = offset == 0;
        let background = if active { &styles.active } else { &styles.inactive };
        let onclick = {
            let carousel = carousel.clone();
            Callback::from(move |_: MouseEvent| carousel.select(i))
        };
        html! {
            <div
                key={i}
                class={classes!("review-card", active.then_some("review-card-active"))}
                style={format!("{} background-image: url('{}');", slot_style(offset), background)}
                {onclick}
            >
                <div class="stars">
                    { for (0..review.stars).map(|_| html! {
                        <img class="star" src={styles.star_icon.clone()} alt="★" />
                    }) }
                </div>
                <p class="review-text">{review.text.clone()}</p>
                <div class="reviewer">
                    if !review.image.is_empty() {
                        <img class="reviewer-image" src={review.image.clone()} alt={review.name.clone()} />
                    }
                    <span>{review.name.clone()}</span>
                </div>
            </div>
        }
    };

    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.prev())
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.next())
    };
    let on_select = carousel.on_select();

    let ontouchstart = {
        let touch_start = touch_start.clone();
        Callback::from(move |e: TouchEvent| {
            *touch_start.borrow_mut() = e.touches().get(0).map(|touch| touch.client_x());
        })
    };
    let ontouchend = {
        let carousel = carousel.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(start) = touch_start.borrow_mut().take() else {
                return;
            };
            let Some(end) = e.changed_touches().get(0).map(|touch| touch.client_x()) else {
                return;
            };
            let dx = end - start;
            if dx <= -SWIPE_MIN_PX {
                carousel.next();
            } else if dx >= SWIPE_MIN_PX {
                carousel.prev();
            }
        })
    };

    html! {
        <section id="testimonials" class="testimonials">
            <style>{TESTIMONIALS_CSS}</style>
            <h2>{"What our community says"}</h2>
            <div class="review-stage" {ontouchstart} {ontouchend}>
                { for content.reviews.iter().enumerate().map(card) }
            </div>
            <div class="review-controls">
                <button class="arrow" aria-label="Previous review" onclick={prev}>{"‹"}</button>
                <div class="review-dots">
                    { for (0..len).map(|i| {
                        let on_select = on_select.clone();
                        html! {
                            <button
                                class={classes!("review-dot", (i == carousel.index).then_some("review-dot-active"))}
                                aria-label={format!("Show review {}", i + 1)}
                                onclick={Callback::from(move |_: MouseEvent| on_select.emit(i))}
                            />
                        }
                    }) }
                </div>
                <button class="arrow" aria-label="Next review" onclick={next}>{"›"}</button>
            </div>
        </section>
    }
}

const TESTIMONIALS_CSS: &str = r#"
.testimonials {
    padding: 6rem 0;
    overflow: hidden;
    text-align: center;
    background: #fdf8f3;
}
.testimonials h2 {
    font-size: clamp(2rem, 4vw, 3.5rem);
    font-weight: 400;
}
.review-stage {
    position: relative;
    height: 360px;
    margin: 3rem auto;
    max-width: 72rem;
}
.review-card {
    position: absolute;
    left: calc(50% - 160px);
    width: 320px;
    height: 320px;
    padding: 2rem;
    box-sizing: border-box;
    border-radius: 28px;
    background-size: cover;
    background-color: #efe4d8;
    opacity: 0.6;
    cursor: pointer;
    transition: transform 0.5s ease, opacity 0.5s ease;
    text-align: left;
}
.review-card-active {
    opacity: 1;
    cursor: default;
    color: white;
    background-color: #1f1a17;
}
.stars {
    display: flex;
    gap: 4px;
}
.star {
    width: 18px;
    height: 18px;
}
.reviewer {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    font-weight: 600;
}
.reviewer-image {
    width: 40px;
    height: 40px;
    border-radius: 50%;
}
.review-controls {
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 1.5rem;
}
.arrow {
    width: 44px;
    height: 44px;
    border-radius: 50%;
    border: 1px solid #c9b8a8;
    background: white;
    font-size: 1.5rem;
    cursor: pointer;
}
.review-dots {
    display: flex;
    gap: 0.5rem;
}
.review-dot {
    width: 10px;
    height: 10px;
    border-radius: 50%;
    border: none;
    background: #d8c9ba;
    cursor: pointer;
}
.review-dot-active {
    background: #1f1a17;
}
"#;
