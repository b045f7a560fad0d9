use crate::{
    api::Role,
    state::{use_session, SessionContext},
    utils::navigation::redirect_to,
};
use leptos::*;

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

impl GuardDecision {
    pub fn allows(self) -> bool {
        self == GuardDecision::Allow
    }
}

pub fn authenticated_guard(session: &SessionContext) -> GuardDecision {
    if session.is_logged_in() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(LOGIN_ROUTE)
    }
}

/// Only the exact role passes; a manager-only route turns employees away to
/// the dashboard.
pub fn role_guard(session: &SessionContext, required: Role) -> GuardDecision {
    if session.role() == required {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(HOME_ROUTE)
    }
}

fn redirect_unless_allowed(decision: GuardDecision) {
    create_effect(move |_| {
        if let GuardDecision::Redirect(target) = decision {
            log::debug!("Route guard redirecting to {}", target);
            redirect_to(target);
        }
    });
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let decision = authenticated_guard(&session);
    redirect_unless_allowed(decision);
    view! {
        <Show when=move || decision.allows() fallback=|| ()>
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let decision = role_guard(&session, role);
    redirect_unless_allowed(decision);
    view! {
        <Show when=move || decision.allows() fallback=|| ()>
            {children()}
        </Show>
    }
}
