//! Defect list across all projects.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::guard::{self, RouteId};

#[component]
pub fn DefectsPage() -> impl IntoView {
    guard::enforce(RouteId::Defects);

    let defects = LocalResource::new(|| async {
        let session = crate::session::browser_session();
        crate::net::defects::list(&session).await.ok()
    });

    view! {
        <div class="defects-page">
            <h1>"Defects"</h1>

            <Suspense fallback=move || view! { <p>"Loading defects..."</p> }>
                {move || {
                    defects
                        .get()
                        .map(|list| match list {
                            Some(list) if !list.is_empty() => view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Title"</th>
                                            <th>"Status"</th>
                                            <th>"Priority"</th>
                                            <th>"Assignee"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|defect| {
                                                let assignee = defect
                                                    .assignee
                                                    .as_ref()
                                                    .map(|a| {
                                                        a.full_name
                                                            .clone()
                                                            .unwrap_or_else(|| a.username.clone())
                                                    })
                                                    .unwrap_or_else(|| "—".to_owned());
                                                view! {
                                                    <tr>
                                                        <td>
                                                            <A href=format!("/defects/{}", defect.id)>
                                                                {defect.title.clone()}
                                                            </A>
                                                        </td>
                                                        <td>{defect.status.label()}</td>
                                                        <td>{defect.priority.as_str()}</td>
                                                        <td>{assignee}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                            .into_any(),
                            Some(_) => view! { <p>"No defects recorded."</p> }.into_any(),
                            None => view! { <p class="form__error">"Could not load defects."</p> }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
