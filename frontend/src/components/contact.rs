use dhyan_common::{ContactRequest, ContactResponse};
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::hooks::use_window_scroll;
use crate::utils::api::Api;
use crate::utils::dom::{rect_of, viewport_height};

#[derive(Clone, PartialEq)]
enum SubmitState {
    Idle,
    Sending,
    Sent(String),
    Failed(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

async fn send_message(request: ContactRequest) -> Result<String, String> {
    let wrapper = Api::post("/api/contact")
        .json(&request)
        .map_err(|e| e.to_string())?;
    let response = wrapper
        .send()
        .await
        .map_err(|_| "Could not reach the server, please try again.".to_string())?;
    if response.ok() {
        return Ok(response
            .json::<ContactResponse>()
            .await
            .map(|r| r.message)
            .unwrap_or_else(|_| "Message sent.".to_string()));
    }
    let status = response.status();
    Err(match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("Something went wrong ({})", status),
    })
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let state = use_state(|| SubmitState::Idle);
    let show_top = use_state(|| false);
    let section_ref = use_node_ref();

    {
        let show_top = show_top.clone();
        let section_ref = section_ref.clone();
        use_window_scroll(Callback::from(move |y: f64| {
            let fills_viewport = rect_of(&section_ref)
                .map(|(top, height)| top <= 0.0 && top + height >= viewport_height())
                .unwrap_or(false);
            let visible = y > 100.0 && fills_viewport;
            if *show_top != visible {
                show_top.set(visible);
            }
        }));
    }

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *state == SubmitState::Sending {
                return;
            }
            let request = ContactRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            let request = match request.validate() {
                Ok(request) => request,
                Err(err) => {
                    state.set(SubmitState::Failed(err.to_string()));
                    return;
                }
            };
            state.set(SubmitState::Sending);
            let (name, email, message, state) =
                (name.clone(), email.clone(), message.clone(), state.clone());
            spawn_local(async move {
                match send_message(request).await {
                    Ok(reply) => {
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                        state.set(SubmitState::Sent(reply));
                    }
                    Err(reason) => {
                        log::warn!("Contact form rejected: {}", reason);
                        state.set(SubmitState::Failed(reason));
                    }
                }
            });
        })
    };

    let bind_input = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let status = match &*state {
        SubmitState::Idle => html! {},
        SubmitState::Sending => html! { <p class="form-status">{"Sending..."}</p> },
        SubmitState::Sent(reply) => html! { <p class="form-status form-ok">{reply.clone()}</p> },
        SubmitState::Failed(reason) => html! { <p class="form-status form-error">{reason.clone()}</p> },
    };

    html! {
        <section id="contact-section" class="contact" ref={section_ref}>
            <style>{CONTACT_CSS}</style>
            <div class="contact-inner">
                <div class="contact-copy">
                    <h2>{"Get in touch"}</h2>
                    <p>{"Questions, feedback or partnership ideas? We read every message."}</p>
                </div>
                <form class="contact-form" {onsubmit}>
                    <input
                        type="text"
                        placeholder="Your name"
                        value={(*name).clone()}
                        oninput={bind_input(&name)}
                    />
                    <input
                        type="email"
                        placeholder="Email address"
                        value={(*email).clone()}
                        oninput={bind_input(&email)}
                    />
                    <textarea
                        rows="6"
                        placeholder="Your message"
                        value={(*message).clone()}
                        oninput={on_message}
                    />
                    <button type="submit" disabled={*state == SubmitState::Sending}>{"Send message"}</button>
                    {status}
                </form>
            </div>
            <BackToTop visible={*show_top} />
        </section>
    }
}

const CONTACT_CSS: &str = r#"
.contact {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #f4ebe1;
}
.contact-inner {
    width: 90%;
    max-width: 64rem;
    display: flex;
    gap: 4rem;
    align-items: flex-start;
}
.contact-copy {
    flex: 1;
}
.contact-copy h2 {
    font-size: clamp(2rem, 4vw, 3.5rem);
    font-weight: 400;
    margin-top: 0;
}
.contact-form {
    flex: 1.2;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.contact-form input, .contact-form textarea {
    font: inherit;
    padding: 0.9rem 1.1rem;
    border-radius: 14px;
    border: 1px solid #d8c9ba;
    background: white;
}
.contact-form button {
    align-self: flex-start;
    padding: 0.9rem 2rem;
    border-radius: 999px;
    border: none;
    background: #1f1a17;
    color: white;
    font-size: 1rem;
    cursor: pointer;
}
.contact-form button:disabled {
    opacity: 0.6;
    cursor: default;
}
.form-ok {
    color: #2e7d32;
}
.form-error {
    color: #c62828;
}
@media (max-width: 768px) {
    .contact-inner { flex-direction: column; gap: 2rem; }
}
"#;
