use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::navbar::Navbar;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <>
            <Navbar />
            <div class="not-found" style="min-height: 80vh; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center;">
                <h1 style="font-size: 4rem; font-weight: 400; margin: 0;">{"404"}</h1>
                <p>{"This page drifted away."}</p>
                <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
            </div>
        </>
    }
}
