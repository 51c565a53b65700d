//! Project list with manager-only create and delete.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::guard::{self, RouteId};
use crate::state::auth::AuthState;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    guard::enforce(RouteId::Projects);

    let auth = expect_context::<RwSignal<AuthState>>();
    let projects = LocalResource::new(|| async {
        let session = crate::session::browser_session();
        crate::net::projects::list(&session).await.ok()
    });

    let is_manager = move || auth.get().user.is_some_and(|user| user.is_manager());
    let show_create = RwSignal::new(false);

    let on_delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let projects = projects.clone();
            leptos::task::spawn_local(async move {
                let session = crate::session::browser_session();
                match crate::net::projects::delete(&session, id).await {
                    Ok(()) => projects.refetch(),
                    Err(err) => leptos::logging::warn!("project delete failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <div class="projects-page">
            <header class="projects-page__header">
                <h1>"Projects"</h1>
                <Show when=is_manager>
                    <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                        "+ New Project"
                    </button>
                </Show>
            </header>

            <Suspense fallback=move || view! { <p>"Loading projects..."</p> }>
                {move || {
                    projects
                        .get()
                        .map(|list| match list {
                            Some(list) if !list.is_empty() => view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Location"</th>
                                            <th>"Status"</th>
                                            <th>"Manager"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|project| {
                                                let id = project.id;
                                                let manager = project
                                                    .manager
                                                    .as_ref()
                                                    .map(|m| {
                                                        m.full_name
                                                            .clone()
                                                            .unwrap_or_else(|| m.username.clone())
                                                    })
                                                    .unwrap_or_default();
                                                view! {
                                                    <tr>
                                                        <td>
                                                            <A href=format!("/projects/{id}")>
                                                                {project.name.clone()}
                                                            </A>
                                                        </td>
                                                        <td>{project.location.clone()}</td>
                                                        <td>{project.status.clone()}</td>
                                                        <td>{manager}</td>
                                                        <td>
                                                            <Show when=is_manager>
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| on_delete(id)
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            </Show>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                            .into_any(),
                            Some(_) => view! { <p>"No projects yet."</p> }.into_any(),
                            None => view! { <p class="form__error">"Could not load projects."</p> }
                                .into_any(),
                        })
                }}
            </Suspense>

            <Show when=move || show_create.get()>
                <CreateProjectForm
                    on_done=Callback::new(move |()| {
                        show_create.set(false);
                        projects.refetch();
                    })
                    on_cancel=Callback::new(move |()| show_create.set(false))
                />
            </Show>
        </div>
    }
}

/// Inline form for creating a project. The signed-in manager becomes the
/// project's manager.
#[component]
fn CreateProjectForm(on_done: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        if name.get().trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::ProjectCreate;

            let Some(manager_id) = auth.get().user.map(|user| user.id) else {
                return;
            };
            let payload = ProjectCreate {
                name: name.get().trim().to_owned(),
                description: description.get(),
                location: location.get(),
                start_date: start_date.get(),
                end_date: end_date.get(),
                status: None,
                manager_id,
            };
            leptos::task::spawn_local(async move {
                let session = crate::session::browser_session();
                match crate::net::projects::create(&session, &payload).await {
                    Ok(_) => on_done.run(()),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, &description, &location, &start_date, &end_date, &error, &on_done);
        }
    });

    view! {
        <form class="inline-form" on:submit=move |ev| {
            ev.prevent_default();
            submit.run(());
        }>
            <label class="form__label">
                "Name"
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Description"
                <input
                    type="text"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Location"
                <input
                    type="text"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Start date"
                <input
                    type="date"
                    prop:value=move || start_date.get()
                    on:input=move |ev| start_date.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "End date"
                <input
                    type="date"
                    prop:value=move || end_date.get()
                    on:input=move |ev| end_date.set(event_target_value(&ev))
                />
            </label>
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="form__error">{message}</p> })
            }}
            <div class="inline-form__actions">
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" type="submit">"Create"</button>
            </div>
        </form>
    }
}
