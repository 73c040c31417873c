use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::blog_teaser::BlogTeaser;
use crate::components::contact::Contact;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::social::Social;
use crate::components::testimonials::Testimonials;
use crate::utils::dom::{location_hash, scroll_to_id, scroll_to_top};

/// Sections need a moment to lay out before a deep link can land.
const HASH_SCROLL_DELAY_MS: u32 = 300;

#[function_component(Landing)]
pub fn landing() -> Html {
    let nav_hidden = use_state(|| false);
    let features_ref = use_node_ref();

    use_effect_with_deps(
        |_| {
            let deep_link = match location_hash() {
                Some(hash) => Some(Timeout::new(HASH_SCROLL_DELAY_MS, move || {
                    if !scroll_to_id(&hash) {
                        log::debug!("No section named {}", hash);
                    }
                })),
                None => {
                    scroll_to_top();
                    None
                }
            };
            move || drop(deep_link)
        },
        (),
    );

    let on_pinned = {
        let nav_hidden = nav_hidden.clone();
        Callback::from(move |pinned: bool| nav_hidden.set(pinned))
    };

    html! {
        <div class="landing">
            <style>{LANDING_CSS}</style>
            <Navbar hidden={*nav_hidden} />
            <Hero features_ref={features_ref.clone()} />
            <Features section_ref={features_ref} {on_pinned} />
            <Social />
            <Testimonials />
            <BlogTeaser />
            <Contact />
            <Footer />
        </div>
    }
}

const LANDING_CSS: &str = r#"
html, body {
    margin: 0;
    padding: 0;
}
body {
    font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
    color: #1f1a17;
    background: #fbf7f2;
}
.landing {
    position: relative;
    overflow-x: clip;
}
"#;
