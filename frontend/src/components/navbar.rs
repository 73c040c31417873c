use yew::prelude::*;
use yew_router::prelude::*;

use crate::utils::dom::{scroll_to_id, set_body_scroll_locked};
use crate::Route;

/// Label and landing-page section id.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("About", "hero"),
    ("Practices", "features"),
    ("Testimonials", "testimonials"),
    ("Blog", "blog"),
    ("Contact", "contact-section"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    #[prop_or_default]
    pub hidden: bool,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let sidebar_open = use_state(|| false);
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let on_landing = matches!(route, Some(Route::Home));

    {
        use_effect_with_deps(
            move |open| {
                set_body_scroll_locked(*open);
                || set_body_scroll_locked(false)
            },
            *sidebar_open,
        );
    }

    let go_to = {
        let sidebar_open = sidebar_open.clone();
        move |section: &'static str| {
            let sidebar_open = sidebar_open.clone();
            let navigator = navigator.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                sidebar_open.set(false);
                if on_landing {
                    scroll_to_id(section);
                    return;
                }
                let Some(navigator) = navigator.as_ref() else {
                    return;
                };
                if section == "blog" {
                    navigator.push(&Route::Blogs);
                } else {
                    navigator.push(&Route::Home);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_hash(section);
                    }
                }
            })
        }
    };

    let toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(!*sidebar_open))
    };

    let links = |class: &'static str| -> Html {
        NAV_ITEMS
            .iter()
            .map(|&(label, section)| {
                html! {
                    <a class={class} href={format!("/#{}", section)} onclick={go_to(section)}>
                        {label}
                    </a>
                }
            })
            .collect()
    };

    html! {
        <>
            <style>{NAVBAR_CSS}</style>
            <nav class={classes!("top-nav", props.hidden.then_some("top-nav-hidden"))}>
                <div class="nav-inner">
                    <button class="burger" aria-label="Open menu" onclick={toggle_sidebar.clone()}>
                        <span></span>
                        <span></span>
                    </button>
                    <Link<Route> to={Route::Home} classes="brand">{"Dhyan"}</Link<Route>>
                    <div class="nav-links">{links("nav-link")}</div>
                </div>
            </nav>
            if *sidebar_open {
                <div class="sidebar">
                    <button class="sidebar-close" aria-label="Close menu" onclick={toggle_sidebar}>
                        {"×"}
                    </button>
                    <div class="sidebar-links">{links("sidebar-link")}</div>
                </div>
            }
        </>
    }
}

const NAVBAR_CSS: &str = r#"
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    z-index: 1000;
    display: flex;
    justify-content: center;
    pointer-events: none;
    transition: transform 0.4s ease, opacity 0.4s ease;
}
.top-nav-hidden {
    transform: translateY(-120%);
    opacity: 0;
}
.nav-inner {
    pointer-events: auto;
    margin-top: 1rem;
    width: 92%;
    max-width: 64rem;
    height: 68px;
    padding: 0 2.5rem;
    border-radius: 28px;
    border: 1.5px solid #666;
    backdrop-filter: blur(15px);
    background: rgba(18, 21, 27, 0.6);
    display: flex;
    align-items: center;
    justify-content: space-between;
    color: white;
}
.brand {
    font-size: 1.5rem;
    font-weight: 600;
    text-decoration: none;
    color: white;
}
.nav-links {
    display: flex;
    gap: 2rem;
}
.nav-link {
    text-decoration: none;
    color: rgba(255, 255, 255, 0.85);
}
.nav-link:hover {
    color: white;
}
.burger {
    display: none;
    background: none;
    border: none;
    flex-direction: column;
    gap: 4px;
    cursor: pointer;
}
.burger span {
    display: block;
    width: 20px;
    height: 2.5px;
    border-radius: 2px;
    background: white;
}
.sidebar {
    position: fixed;
    inset: 0;
    z-index: 1100;
    background: rgba(0, 0, 0, 0.75);
    backdrop-filter: blur(8px);
    color: white;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
}
.sidebar-close {
    position: absolute;
    top: 1.5rem;
    right: 1.5rem;
    font-size: 2rem;
    background: none;
    border: none;
    color: white;
    cursor: pointer;
}
.sidebar-links {
    display: flex;
    flex-direction: column;
    gap: 2rem;
    font-size: 1.5rem;
}
.sidebar-link {
    text-decoration: none;
    color: white;
}
@media (max-width: 768px) {
    .nav-inner { height: 52px; padding: 0 1.25rem; border-radius: 20px; }
    .nav-links { display: none; }
    .burger { display: flex; }
}
"#;
