use crate::{
    api::{use_api_client, Role},
    state::use_session,
    utils::navigation::redirect_to,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const EMPLOYEE_LINKS: &[NavLink] = &[
    NavLink {
        href: "/",
        label: "Dashboard",
    },
    NavLink {
        href: "/request",
        label: "Request Leave",
    },
    NavLink {
        href: "/my-leaves",
        label: "My Leaves",
    },
];

const MANAGER_LINKS: &[NavLink] = &[
    NavLink {
        href: "/approvals",
        label: "Approvals",
    },
    NavLink {
        href: "/register-employee",
        label: "Register Employee",
    },
];

/// Links the role may follow. Managers get the employee links too.
pub fn nav_links(role: Role) -> Vec<NavLink> {
    let mut links = EMPLOYEE_LINKS.to_vec();
    if role == Role::Manager {
        links.extend_from_slice(MANAGER_LINKS);
    }
    links
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session().snapshot();
    let api = use_api_client();
    let on_logout = move |_| {
        api.logout();
        redirect_to("/login");
    };
    let links = nav_links(session.role)
        .into_iter()
        .map(|link| {
            view! {
                <a
                    href=link.href
                    class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                >
                    {link.label}
                </a>
            }
        })
        .collect_view();
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"LeaveDesk"</h1>
                    <nav class="flex items-center space-x-2">
                        {links}
                        <span class="text-sm text-fg-muted px-3" data-testid="session-identity">
                            {format!("{} ({})", session.name, session.role.label())}
                        </span>
                        <button
                            on:click=on_logout
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        >
                            "Logout"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <NavBar/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div
            role="alert"
            class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4"
        >
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div
            role="status"
            class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4"
        >
            <p class="text-sm">{message}</p>
        </div>
    }
}

/// Success and error banners driven by two optional-message signals.
#[component]
pub fn FeedbackBanners(
    #[prop(into)] success: Signal<Option<String>>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        {move || success.get().map(|msg| view! { <SuccessMessage message=msg/> })}
        {move || error.get().map(|msg| view! { <ErrorMessage message=msg/> })}
    }
}

#[component]
pub fn EmptyState(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <p class="text-sm font-semibold text-fg-muted">{title}</p>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn navbar_shows_identity_and_manager_links() {
        let html = render_to_string(move || {
            provide_session(Role::Manager);
            view! { <NavBar/> }
        });
        assert!(html.contains("Maria (Manager)"));
        assert!(html.contains("/approvals"));
        assert!(html.contains("Logout"));
    }

    #[test]
    fn navbar_hides_manager_links_from_employees() {
        let html = render_to_string(move || {
            provide_session(Role::Employee);
            view! { <NavBar/> }
        });
        assert!(!html.contains("/register-employee"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_session(Role::Employee);
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner/>
                    <ErrorMessage message="error".into()/>
                    <SuccessMessage message="ok".into()/>
                    <EmptyState title="nothing here"/>
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
        assert!(html.contains("nothing here"));
    }
}
