//! Top navigation bar reflecting the session state.
//!
//! Links mirror the route-access table: role-gated routes only get a link
//! when the current role would pass the guard, so the nav never offers a
//! navigation the guard would bounce.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Application navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let role = move || auth.get().role();
    let signed_in = move || auth.get().is_authenticated();

    let logout = Callback::new(move |()| {
        let mut session = crate::session::browser_session();
        session.logout();
        auth.update(|state| state.user = None);
        navigate(crate::guard::LOGIN_ROUTE, NavigateOptions::default());
    });

    view! {
        <nav class="navbar">
            <A attr:class="navbar__brand" href="/">"DefectTrack"</A>

            <Show when=signed_in>
                <div class="navbar__links">
                    <A href="/projects">"Projects"</A>
                    <A href="/defects">"Defects"</A>
                    <Show when=move || matches!(role(), Some(Role::Manager | Role::Observer))>
                        <A href="/reports">"Reports"</A>
                    </Show>
                    <Show when=move || matches!(role(), Some(Role::Manager))>
                        <A href="/users">"Users"</A>
                    </Show>
                </div>
            </Show>

            <div class="navbar__session">
                {move || match auth.get().user {
                    Some(user) => view! {
                        <div class="navbar__account">
                            <span class="navbar__user">{user.display_name().to_owned()}</span>
                            <button class="btn" on:click=move |_| logout.run(())>
                                "Log out"
                            </button>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="navbar__account">
                            <A href="/login">"Log in"</A>
                            <A href="/register">"Register"</A>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </nav>
    }
}
