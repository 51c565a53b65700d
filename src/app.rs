//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::NavBar;
use crate::pages::{
    defect_detail::DefectDetailPage, defects::DefectsPage, home::HomePage, login::LoginPage,
    project_detail::ProjectDetailPage, projects::ProjectsPage, register::RegisterPage,
    reports::ReportsPage, users::UsersPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth context, restores the persisted session, and
/// sets up client-side routing. Per-route access control runs in each
/// page via `guard::enforce`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Restore the persisted identity once the browser session is readable.
    // Effects only run client-side, so SSR renders the logged-out shell.
    Effect::new(move || {
        let session = crate::session::browser_session();
        auth.update(|state| {
            state.user = session.current_identity();
            state.loading = false;
        });

        // Refresh the profile in the background so server-side changes
        // (role updates, name edits) land without a re-login.
        #[cfg(feature = "hydrate")]
        if session.is_logged_in() {
            leptos::task::spawn_local(async move {
                let mut session = crate::session::browser_session();
                match session.refresh_profile().await {
                    Ok(user) => auth.update(|state| state.user = Some(user)),
                    Err(err) => leptos::logging::warn!("profile refresh failed: {err}"),
                }
            });
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/defecttrack.css"/>
        <Title text="DefectTrack"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("id")) view=ProjectDetailPage/>
                    <Route path=StaticSegment("defects") view=DefectsPage/>
                    <Route path=(StaticSegment("defects"), ParamSegment("id")) view=DefectDetailPage/>
                    <Route path=StaticSegment("reports") view=ReportsPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                </Routes>
            </main>
        </Router>
    }
}
