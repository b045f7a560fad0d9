use super::{
    utils::{greeting, quick_links},
    view_model::DashboardViewModel,
};
use crate::components::{
    balance::BalanceTable,
    layout::{ErrorMessage, LoadingSpinner},
};
use leptos::*;

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let DashboardViewModel { session, balance } = DashboardViewModel::new();
    let links = quick_links(session.role)
        .into_iter()
        .map(|link| {
            view! {
                <a
                    href=link.href
                    class="block bg-surface-elevated shadow rounded-lg p-4 text-fg hover:bg-action-ghost-bg-hover"
                >
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">{greeting(&session.name)}</h1>
                <p class="mt-1 text-sm text-fg-muted">
                    "Signed in as " {session.role.label()}
                </p>
            </div>
            <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">{links}</div>
            <section class="bg-surface-elevated shadow rounded-lg p-6">
                <h2 class="text-lg font-semibold text-fg mb-4">"Your balance this year"</h2>
                <Suspense fallback=|| view! { <LoadingSpinner/> }>
                    {move || balance.get().map(|result| match result {
                        Ok(report) => view! { <BalanceTable report=report/> }.into_view(),
                        Err(msg) => view! { <ErrorMessage message=msg/> }.into_view(),
                    })}
                </Suspense>
            </section>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::test_support::ssr::render_as;

    #[test]
    fn manager_dashboard_links_to_manager_pages() {
        let html = render_as(Some(Role::Manager), || view! { <DashboardPanel/> });
        assert!(html.contains("Welcome, Maria"));
        assert!(html.contains("Manager"));
        assert!(html.contains("/approvals"));
    }

    #[test]
    fn employee_dashboard_hides_manager_pages() {
        let html = render_as(Some(Role::Employee), || view! { <DashboardPanel/> });
        assert!(!html.contains("/register-employee"));
        assert!(html.contains("/my-leaves"));
    }
}
