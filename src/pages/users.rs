//! User directory with role management. Manager only; the guard bounces
//! everyone else.

use leptos::prelude::*;

use crate::guard::{self, RouteId};
use crate::net::types::Role;

#[component]
pub fn UsersPage() -> impl IntoView {
    guard::enforce(RouteId::Users);

    let users = LocalResource::new(|| async {
        let session = crate::session::browser_session();
        crate::net::users::list(&session).await.ok()
    });
    let error = RwSignal::new(None::<String>);

    let on_role_change = move |user_id: i64, role: Role| {
        #[cfg(feature = "hydrate")]
        {
            let users = users.clone();
            leptos::task::spawn_local(async move {
                let session = crate::session::browser_session();
                match crate::net::users::update_role(&session, user_id, role).await {
                    Ok(_) => {
                        error.set(None);
                        users.refetch();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, role);
        }
    };

    view! {
        <div class="users-page">
            <h1>"Users"</h1>

            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="form__error">{message}</p> })
            }}

            <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|list| match list {
                            Some(list) => view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Username"</th>
                                            <th>"Full name"</th>
                                            <th>"Email"</th>
                                            <th>"Role"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|user| {
                                                let user_id = user.id;
                                                let current = user.role;
                                                view! {
                                                    <tr>
                                                        <td>{user.username.clone()}</td>
                                                        <td>{user.full_name.clone().unwrap_or_default()}</td>
                                                        <td>{user.email.clone()}</td>
                                                        <td>
                                                            <select on:change=move |ev| {
                                                                if let Some(parsed) =
                                                                    Role::parse(&event_target_value(&ev))
                                                                {
                                                                    on_role_change(user_id, parsed);
                                                                }
                                                            }>
                                                                {Role::ALL
                                                                    .iter()
                                                                    .map(|r| {
                                                                        let r = *r;
                                                                        view! {
                                                                            <option
                                                                                value=r.as_str()
                                                                                selected=move || r == current
                                                                            >
                                                                                {r.label()}
                                                                            </option>
                                                                        }
                                                                    })
                                                                    .collect::<Vec<_>>()}
                                                            </select>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                            .into_any(),
                            None => view! { <p class="form__error">"Could not load users."</p> }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
