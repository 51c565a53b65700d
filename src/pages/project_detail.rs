//! Single project: details, defect list with statistics, and a
//! create-defect form.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::guard::{self, RouteId};
use crate::net::types::Priority;
use crate::state::auth::AuthState;

fn route_id(params: &leptos_router::params::ParamsMap) -> Option<i64> {
    params.get("id").and_then(|raw| raw.parse().ok())
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    guard::enforce(RouteId::ProjectDetail);

    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();

    let project = LocalResource::new(move || async move {
        let id = route_id(&params.get())?;
        let session = crate::session::browser_session();
        crate::net::projects::get(&session, id).await.ok()
    });

    let defects = LocalResource::new(move || async move {
        let id = route_id(&params.get())?;
        let session = crate::session::browser_session();
        crate::net::defects::list_by_project(&session, id).await.ok()
    });

    // Stats come from the dedicated endpoint when it exists, otherwise
    // from aggregation over the defects we already fetched server-side.
    let stats = LocalResource::new(move || async move {
        let id = route_id(&params.get())?;
        let session = crate::session::browser_session();
        crate::net::defects::stats(&session, id).await.ok()
    });

    let can_edit = move || {
        matches!(
            auth.get().role(),
            Some(crate::net::types::Role::Manager | crate::net::types::Role::Engineer)
        )
    };

    let on_delete_defect = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let defects = defects.clone();
            let stats = stats.clone();
            leptos::task::spawn_local(async move {
                let session = crate::session::browser_session();
                match crate::net::defects::delete(&session, id).await {
                    Ok(()) => {
                        defects.refetch();
                        stats.refetch();
                    }
                    Err(err) => leptos::logging::warn!("defect delete failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <div class="project-detail-page">
            <Suspense fallback=move || view! { <p>"Loading project..."</p> }>
                {move || {
                    project
                        .get()
                        .map(|found| match found {
                            Some(project) => view! {
                                <header class="project-detail-page__header">
                                    <h1>{project.name.clone()}</h1>
                                    <p>{project.description.clone()}</p>
                                    <p class="project-detail-page__meta">
                                        {project.location.clone()} " · " {project.start_date.clone()}
                                        " — " {project.end_date.clone()}
                                    </p>
                                </header>
                            }
                            .into_any(),
                            None => view! { <p class="form__error">"Project not found."</p> }
                                .into_any(),
                        })
                }}
            </Suspense>

            {move || {
                stats
                    .get()
                    .flatten()
                    .map(|stats| view! {
                        <div class="stats-row">
                            <span>"Active: " {stats.active}</span>
                            <span>"Resolved: " {stats.resolved}</span>
                            <span>"Total: " {stats.total}</span>
                        </div>
                    })
            }}

            <h2>"Defects"</h2>
            <Suspense fallback=move || view! { <p>"Loading defects..."</p> }>
                {move || {
                    defects
                        .get()
                        .map(|list| match list {
                            Some(list) if !list.is_empty() => view! {
                                <ul class="defect-list">
                                    {list
                                        .into_iter()
                                        .map(|defect| {
                                            let id = defect.id;
                                            view! {
                                                <li class="defect-list__item">
                                                    <A href=format!("/defects/{id}")>
                                                        {defect.title.clone()}
                                                    </A>
                                                    <span class="defect-list__status">
                                                        {defect.status.label()}
                                                    </span>
                                                    <Show when=can_edit>
                                                        <button
                                                            class="btn btn--danger"
                                                            on:click=move |_| on_delete_defect(id)
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </Show>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                            .into_any(),
                            Some(_) => view! { <p>"No defects for this project."</p> }.into_any(),
                            None => view! { <p class="form__error">"Could not load defects."</p> }
                                .into_any(),
                        })
                }}
            </Suspense>

            <Show when=can_edit>
                <CreateDefectForm
                    project_id=Signal::derive(move || route_id(&params.get()))
                    on_created=Callback::new(move |()| {
                        defects.refetch();
                        stats.refetch();
                    })
                />
            </Show>
        </div>
    }
}

/// Minimal defect entry form: title, priority, optional assignee drawn
/// from the engineers directory.
#[component]
fn CreateDefectForm(
    project_id: Signal<Option<i64>>,
    on_created: Callback<()>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let priority = RwSignal::new(Priority::Medium);
    let assignee_id = RwSignal::new(None::<i64>);
    let error = RwSignal::new(None::<String>);

    let engineers = LocalResource::new(|| async {
        let session = crate::session::browser_session();
        crate::net::users::engineers(&session).await.unwrap_or_default()
    });

    let submit = Callback::new(move |()| {
        if title.get().trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::DefectCreate;

            let Some(project_id) = project_id.get() else {
                return;
            };
            let payload = DefectCreate {
                title: title.get().trim().to_owned(),
                description: description.get(),
                priority: priority.get(),
                project_id,
                assignee_id: assignee_id.get(),
                due_date: None,
            };
            leptos::task::spawn_local(async move {
                let session = crate::session::browser_session();
                match crate::net::defects::create(&session, &payload).await {
                    Ok(_) => {
                        title.set(String::new());
                        description.set(String::new());
                        error.set(None);
                        on_created.run(());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&project_id, &description, &priority, &assignee_id, &error, &on_created);
        }
    });

    view! {
        <form class="inline-form" on:submit=move |ev| {
            ev.prevent_default();
            submit.run(());
        }>
            <h3>"Report defect"</h3>
            <label class="form__label">
                "Title"
                <input
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
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
                "Priority"
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    if let Some(parsed) = Priority::ALL.iter().find(|p| p.as_str() == value) {
                        priority.set(*parsed);
                    }
                }>
                    {Priority::ALL
                        .iter()
                        .map(|p| {
                            let p = *p;
                            view! {
                                <option value=p.as_str() selected=move || priority.get() == p>
                                    {p.as_str()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="form__label">
                "Assignee"
                <select on:change=move |ev| {
                    assignee_id.set(event_target_value(&ev).parse().ok());
                }>
                    <option value="">"Unassigned"</option>
                    {move || {
                        engineers
                            .get()
                            .map(|list| {
                                list.into_iter()
                                    .map(|engineer| {
                                        view! {
                                            <option value=engineer.id.to_string()>
                                                {engineer.display_name().to_owned()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </select>
            </label>
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="form__error">{message}</p> })
            }}
            <button class="btn btn--primary" type="submit">"Create"</button>
        </form>
    }
}
