//! Single defect: details, workflow status control, and comments.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::guard::{self, RouteId};
use crate::net::comments::can_delete_comment;
use crate::net::types::DefectStatus;
use crate::state::auth::AuthState;

fn route_id(params: &leptos_router::params::ParamsMap) -> Option<i64> {
    params.get("id").and_then(|raw| raw.parse().ok())
}

#[component]
pub fn DefectDetailPage() -> impl IntoView {
    guard::enforce(RouteId::DefectDetail);

    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();

    let defect = LocalResource::new(move || async move {
        let id = route_id(&params.get())?;
        let session = crate::session::browser_session();
        crate::net::defects::get(&session, id).await.ok()
    });

    let comments = LocalResource::new(move || async move {
        let id = route_id(&params.get())?;
        let session = crate::session::browser_session();
        crate::net::comments::list_for_defect(&session, id).await.ok()
    });

    let on_status_change = move |status: DefectStatus| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::DefectUpdate;

            let Some(id) = route_id(&params.get_untracked()) else {
                return;
            };
            let defect = defect.clone();
            leptos::task::spawn_local(async move {
                let session = crate::session::browser_session();
                let payload = DefectUpdate {
                    status: Some(status),
                    ..DefectUpdate::default()
                };
                match crate::net::defects::update(&session, id, &payload).await {
                    Ok(_) => defect.refetch(),
                    Err(err) => leptos::logging::warn!("status update failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = status;
        }
    };

    let on_delete_comment = move |comment_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let comments = comments.clone();
            leptos::task::spawn_local(async move {
                let session = crate::session::browser_session();
                match crate::net::comments::delete(&session, comment_id).await {
                    Ok(()) => comments.refetch(),
                    Err(err) => leptos::logging::warn!("comment delete failed: {err}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = comment_id;
        }
    };

    view! {
        <div class="defect-detail-page">
            <Suspense fallback=move || view! { <p>"Loading defect..."</p> }>
                {move || {
                    defect
                        .get()
                        .map(|found| match found {
                            Some(defect) => {
                                let current = defect.status;
                                view! {
                                    <header class="defect-detail-page__header">
                                        <h1>{defect.title.clone()}</h1>
                                        <p>{defect.description.clone()}</p>
                                        <p class="defect-detail-page__meta">
                                            "Priority: " {defect.priority.as_str()}
                                        </p>
                                        <label class="form__label">
                                            "Status"
                                            <select on:change=move |ev| {
                                                let value = event_target_value(&ev);
                                                if let Some(parsed) = DefectStatus::ALL
                                                    .iter()
                                                    .find(|s| s.as_str() == value)
                                                {
                                                    on_status_change(*parsed);
                                                }
                                            }>
                                                {DefectStatus::ALL
                                                    .iter()
                                                    .map(|s| {
                                                        let s = *s;
                                                        view! {
                                                            <option
                                                                value=s.as_str()
                                                                selected=move || s == current
                                                            >
                                                                {s.label()}
                                                            </option>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </select>
                                        </label>
                                    </header>
                                }
                                .into_any()
                            }
                            None => view! { <p class="form__error">"Defect not found."</p> }
                                .into_any(),
                        })
                }}
            </Suspense>

            <h2>"Comments"</h2>
            <Suspense fallback=move || view! { <p>"Loading comments..."</p> }>
                {move || {
                    comments
                        .get()
                        .map(|list| match list {
                            Some(list) if !list.is_empty() => view! {
                                <ul class="comment-list">
                                    {list
                                        .into_iter()
                                        .map(|comment| {
                                            let comment_id = comment.id;
                                            let author = comment
                                                .user
                                                .as_ref()
                                                .map(|u| u.display_name().to_owned())
                                                .unwrap_or_else(|| format!("user #{}", comment.user_id));
                                            let content = comment.content.clone();
                                            let deletable = move || {
                                                can_delete_comment(
                                                    auth.get().user.as_ref(),
                                                    &comment,
                                                )
                                            };
                                            view! {
                                                <li class="comment-list__item">
                                                    <span class="comment-list__author">{author}</span>
                                                    <span>{content}</span>
                                                    <Show when=deletable>
                                                        <button
                                                            class="btn btn--danger"
                                                            on:click=move |_| on_delete_comment(comment_id)
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
                            Some(_) => view! { <p>"No comments yet."</p> }.into_any(),
                            None => view! { <p class="form__error">"Could not load comments."</p> }
                                .into_any(),
                        })
                }}
            </Suspense>

            <AddCommentForm
                defect_id=Signal::derive(move || route_id(&params.get()))
                on_added=Callback::new(move |()| comments.refetch())
            />
        </div>
    }
}

#[component]
fn AddCommentForm(defect_id: Signal<Option<i64>>, on_added: Callback<()>) -> impl IntoView {
    let content = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        if content.get().trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::CommentCreate;

            let Some(defect_id) = defect_id.get() else {
                return;
            };
            let payload = CommentCreate {
                defect_id,
                content: content.get().trim().to_owned(),
            };
            leptos::task::spawn_local(async move {
                let session = crate::session::browser_session();
                match crate::net::comments::create(&session, &payload).await {
                    Ok(_) => {
                        content.set(String::new());
                        error.set(None);
                        on_added.run(());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&defect_id, &error, &on_added);
        }
    });

    view! {
        <form class="inline-form" on:submit=move |ev| {
            ev.prevent_default();
            submit.run(());
        }>
            <label class="form__label">
                "Add comment"
                <textarea
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
            </label>
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="form__error">{message}</p> })
            }}
            <button class="btn btn--primary" type="submit">"Comment"</button>
        </form>
    }
}
