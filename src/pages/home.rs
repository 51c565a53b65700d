//! Public landing page. Signed-in visitors are bounced to the landing
//! route by the guard.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::guard::{self, RouteId};

#[component]
pub fn HomePage() -> impl IntoView {
    guard::enforce(RouteId::Home);

    view! {
        <div class="home-page">
            <h1>"DefectTrack"</h1>
            <p>"Defect management for construction projects."</p>
            <div class="home-page__actions">
                <A attr:class="btn btn--primary" href="/login">"Log in"</A>
                <A attr:class="btn" href="/register">"Register"</A>
            </div>
        </div>
    }
}
