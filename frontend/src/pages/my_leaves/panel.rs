use super::{
    utils::LeaveRow,
    view_model::MyLeavesViewModel,
};
use crate::{
    components::{
        balance::BalanceTable,
        layout::{EmptyState, ErrorMessage, LoadingSpinner},
    },
    utils::date::parse_year,
};
use leptos::*;

#[component]
fn LeaveHistory(rows: Vec<LeaveRow>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <EmptyState title="You have not requested any leave yet."/> }.into_view();
    }
    view! {
        <table class="min-w-full divide-y divide-border text-sm">
            <thead class="bg-surface-muted">
                <tr>
                    <th class="px-4 py-2 text-left">"Type"</th>
                    <th class="px-4 py-2 text-left">"Dates"</th>
                    <th class="px-4 py-2 text-left">"Status"</th>
                    <th class="px-4 py-2 text-left">"Remark"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                <For
                    each=move || rows.clone()
                    key=|row| row.id
                    children=|row| {
                        view! {
                            <tr>
                                <td class="px-4 py-2">{row.leave_type}</td>
                                <td class="px-4 py-2">{row.period}</td>
                                <td class="px-4 py-2">{row.status}</td>
                                <td class="px-4 py-2">{row.remark}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
    .into_view()
}

#[component]
pub fn MyLeavesPanel() -> impl IntoView {
    let vm = MyLeavesViewModel::new();
    let year = vm.year;
    let rows = vm.rows;
    let balance = vm.balance;

    view! {
        <div class="space-y-6">
            <section class="bg-surface-elevated shadow rounded-lg p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-semibold text-fg">"My Balance"</h2>
                    <input
                        type="number"
                        class="w-28 border border-border rounded-md px-2 py-1"
                        prop:value=move || year.get().to_string()
                        on:change=move |ev| {
                            let next = parse_year(&event_target_value(&ev), year.get_untracked());
                            year.set(next);
                        }
                    />
                </div>
                <Suspense fallback=|| view! { <LoadingSpinner/> }>
                    {move || balance.get().map(|result| match result {
                        Ok(report) => view! { <BalanceTable report=report/> }.into_view(),
                        Err(msg) => view! { <ErrorMessage message=msg/> }.into_view(),
                    })}
                </Suspense>
            </section>
            <section class="bg-surface-elevated shadow rounded-lg p-6">
                <h2 class="text-lg font-semibold text-fg mb-4">"My Leaves"</h2>
                <Suspense fallback=|| view! { <LoadingSpinner/> }>
                    {move || rows.get().map(|result| match result {
                        Ok(rows) => view! { <LeaveHistory rows=rows/> }.into_view(),
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
    use crate::test_support::{helpers::provide_session, ssr::render_to_string};

    #[test]
    fn panel_renders_sections() {
        let html = render_to_string(move || {
            provide_session(Role::Employee);
            view! { <MyLeavesPanel/> }
        });
        assert!(html.contains("My Balance"));
        assert!(html.contains("My Leaves"));
    }

    #[test]
    fn empty_history_shows_placeholder() {
        let html = render_to_string(move || view! { <LeaveHistory rows=Vec::new()/> });
        assert!(html.contains("not requested any leave"));
    }
}
