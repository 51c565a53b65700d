//! Route access guard: static per-route access rules and the redirect
//! decision evaluated before each page renders.
//!
//! DESIGN
//! ======
//! Access requirements are a closed table over [`RouteId`] rather than
//! loose per-route metadata, so adding a route or a role is a
//! compile-time-checked change. The decision itself is a pure function of
//! the route and a [`SessionView`] snapshot; it never fails. A session
//! with a token but no readable identity counts as authenticated with no
//! role, which denies every role-gated route.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::session::SessionView;

/// Route authenticated users land on after login and after a denied role
/// check. One constant for every role.
pub const LANDING_ROUTE: &str = "/projects";
/// Route unauthenticated users are sent to.
pub const LOGIN_ROUTE: &str = "/login";

/// Navigable routes known to the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteId {
    Home,
    Login,
    Register,
    Projects,
    ProjectDetail,
    Defects,
    DefectDetail,
    Reports,
    Users,
}

impl RouteId {
    pub const ALL: [RouteId; 9] = [
        RouteId::Home,
        RouteId::Login,
        RouteId::Register,
        RouteId::Projects,
        RouteId::ProjectDetail,
        RouteId::Defects,
        RouteId::DefectDetail,
        RouteId::Reports,
        RouteId::Users,
    ];

    /// Static access rule for the route.
    pub const fn access(self) -> AccessRule {
        match self {
            RouteId::Home | RouteId::Login | RouteId::Register => AccessRule {
                requires_auth: false,
                allowed_roles: None,
            },
            RouteId::Projects
            | RouteId::ProjectDetail
            | RouteId::Defects
            | RouteId::DefectDetail => AccessRule {
                requires_auth: true,
                allowed_roles: None,
            },
            RouteId::Reports => AccessRule {
                requires_auth: true,
                allowed_roles: Some(&[Role::Manager, Role::Observer]),
            },
            RouteId::Users => AccessRule {
                requires_auth: true,
                allowed_roles: Some(&[Role::Manager]),
            },
        }
    }

    /// Routes meant only for visitors who have not signed in yet.
    const fn pre_auth(self) -> bool {
        matches!(self, RouteId::Home | RouteId::Login | RouteId::Register)
    }
}

/// Access requirements attached to a route.
///
/// `allowed_roles: None` means any authenticated role is permitted.
#[derive(Clone, Copy, Debug)]
pub struct AccessRule {
    pub requires_auth: bool,
    pub allowed_roles: Option<&'static [Role]>,
}

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(&'static str),
}

/// Decide whether navigation to `route` proceeds.
///
/// Evaluation order matters: signed-in users are bounced off the
/// pre-authentication pages before any auth requirement is read, and the
/// auth requirement is settled before roles are considered.
pub fn decide(route: RouteId, session: SessionView) -> Decision {
    let rule = route.access();

    if session.authenticated && route.pre_auth() {
        return Decision::Redirect(LANDING_ROUTE);
    }

    if rule.requires_auth && !session.authenticated {
        return Decision::Redirect(LOGIN_ROUTE);
    }

    if let Some(allowed) = rule.allowed_roles {
        if session.authenticated {
            // No determinable role fails every role gate.
            let permitted = session.role.is_some_and(|role| allowed.contains(&role));
            if !permitted {
                return Decision::Redirect(LANDING_ROUTE);
            }
        }
    }

    Decision::Allow
}

/// Evaluate the guard when a page mounts, redirecting if required.
///
/// Runs inside an `Effect` so it sees the persisted session in the
/// browser; on the server the session reads as anonymous and the real
/// decision happens after hydration.
pub fn enforce(route: RouteId) {
    use leptos::prelude::*;
    use leptos_router::NavigateOptions;
    use leptos_router::hooks::use_navigate;

    let navigate = use_navigate();
    Effect::new(move || {
        if let Decision::Redirect(target) = decide(route, crate::session::browser_view()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
