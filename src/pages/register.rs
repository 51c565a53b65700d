//! Registration page. A successful registration signs the user in
//! directly — the backend issues a token with the new account.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::guard::{self, RouteId};
use crate::net::types::Role;
use crate::state::auth::AuthState;

#[component]
pub fn RegisterPage() -> impl IntoView {
    guard::enforce(RouteId::Register);

    let auth = expect_context::<RwSignal<AuthState>>();
    let username = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Engineer);
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
            use crate::net::types::Registration;

            let registration = Registration {
                username: username.get().trim().to_owned(),
                full_name: full_name.get().trim().to_owned(),
                email: email.get().trim().to_owned(),
                password: password.get(),
                role: role.get(),
            };
            let navigate = navigate.clone();
            error.set(None);
            pending.set(true);
            leptos::task::spawn_local(async move {
                let mut session = crate::session::browser_session();
                match session.register(&registration).await {
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
            let _ = (&auth, &full_name, &email, &role, &error, &pending);
        }
    });

    view! {
        <div class="register-page">
            <h1>"Register"</h1>
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
                    "Full name"
                    <input
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
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
                <label class="form__label">
                    "Role"
                    <select on:change=move |ev| {
                        if let Some(parsed) = Role::parse(&event_target_value(&ev)) {
                            role.set(parsed);
                        }
                    }>
                        {Role::ALL
                            .iter()
                            .map(|r| {
                                let r = *r;
                                view! {
                                    <option value=r.as_str() selected=move || role.get() == r>
                                        {r.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <p class="form__error">{message}</p> })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    "Create account"
                </button>
            </form>
            <p>"Already registered? " <A href="/login">"Log in"</A></p>
        </div>
    }
}
