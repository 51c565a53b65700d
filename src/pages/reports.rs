//! Per-project defect statistics overview. Managers and observers only;
//! the guard bounces everyone else.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::guard::{self, RouteId};
use crate::net::types::{DefectStats, Project};

#[component]
pub fn ReportsPage() -> impl IntoView {
    guard::enforce(RouteId::Reports);

    // One sequential pass: the stats call already degrades to client-side
    // aggregation per project, so failures here mean the project list
    // itself was unavailable.
    let report = LocalResource::new(|| async {
        let session = crate::session::browser_session();
        let projects = crate::net::projects::list(&session).await.ok()?;
        let mut rows: Vec<(Project, DefectStats)> = Vec::with_capacity(projects.len());
        for project in projects {
            let stats = crate::net::defects::stats(&session, project.id)
                .await
                .unwrap_or_default();
            rows.push((project, stats));
        }
        Some(rows)
    });

    view! {
        <div class="reports-page">
            <h1>"Reports"</h1>

            <Suspense fallback=move || view! { <p>"Building report..."</p> }>
                {move || {
                    report
                        .get()
                        .map(|rows| match rows {
                            Some(rows) if !rows.is_empty() => view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Project"</th>
                                            <th>"Active"</th>
                                            <th>"Resolved"</th>
                                            <th>"Total"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {rows
                                            .into_iter()
                                            .map(|(project, stats)| {
                                                view! {
                                                    <tr>
                                                        <td>
                                                            <A href=format!("/projects/{}", project.id)>
                                                                {project.name.clone()}
                                                            </A>
                                                        </td>
                                                        <td>{stats.active}</td>
                                                        <td>{stats.resolved}</td>
                                                        <td>{stats.total}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                            .into_any(),
                            Some(_) => view! { <p>"No projects to report on."</p> }.into_any(),
                            None => view! { <p class="form__error">"Could not build the report."</p> }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
