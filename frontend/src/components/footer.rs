use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-top">
                <div class="footer-brand">
                    <h3>{"Dhyan"}</h3>
                    <p>{"Meditation, mantra and breathwork for every day."}</p>
                </div>
                <div class="footer-social">
                    <a href="#" aria-label="Facebook">{"Facebook"}</a>
                    <a href="#" aria-label="Twitter">{"Twitter"}</a>
                    <a href="#" aria-label="Instagram">{"Instagram"}</a>
                    <a href="#" aria-label="LinkedIn">{"LinkedIn"}</a>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{"© Dhyan. All rights reserved."}</span>
                <div class="footer-links">
                    <Link<Route> to={Route::Blogs}>{"Blog"}</Link<Route>>
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms & Conditions"}</a>
                    <a href="/#contact-section">{"Contact us"}</a>
                </div>
            </div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
.footer {
    background: #12151b;
    color: rgba(255, 255, 255, 0.8);
    padding: 4rem 5% 2rem;
}
.footer-top, .footer-bottom {
    display: flex;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 2rem;
}
.footer-bottom {
    margin-top: 3rem;
    padding-top: 1.5rem;
    border-top: 1px solid rgba(255, 255, 255, 0.15);
    font-size: 0.875rem;
}
.footer-social, .footer-links {
    display: flex;
    gap: 1.5rem;
}
.footer a {
    text-decoration: none;
}
.footer a:hover {
    color: white;
}
"#;
