//! Login page: credential form feeding the session store.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::guard::{self, RouteId};
use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    guard::enforce(RouteId::Login);

    let auth = expect_context::<RwSignal<AuthState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = Callback::new(move |()| {
        if username.get().trim().is_empty() || password.get().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::Credentials;

            let credentials = Credentials {
                username: username.get().trim().to_owned(),
                password: password.get(),
            };
            let navigate = navigate.clone();
            error.set(None);
            pending.set(true);
            leptos::task::spawn_local(async move {
                let mut session = crate::session::browser_session();
                match session.login(&credentials).await {
                    Ok(user) => {
                        auth.update(|state| state.user = Some(user));
                        navigate(
                            crate::guard::LANDING_ROUTE,
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, &error, &pending);
        }
    });

    view! {
        <div class="login-page">
            <h1>"Log in"</h1>
            <form on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }>
                <label class="form__label">
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <p class="form__error">{message}</p> })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    "Log in"
                </button>
            </form>
            <p>"No account yet? " <A href="/register">"Register"</A></p>
        </div>
    }
}
