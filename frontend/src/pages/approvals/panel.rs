use super::{
    utils::{describe_request, Decision},
    view_model::ApprovalsViewModel,
};
use crate::{
    api::LeaveRecord,
    components::{
        balance::TeamBalances,
        layout::{EmptyState, FeedbackBanners, LoadingSpinner},
    },
    utils::date::parse_year,
};
use leptos::*;

#[component]
fn DecisionButton(vm: ApprovalsViewModel, id: i64, decision: Decision) -> impl IntoView {
    let class = match decision {
        Decision::Approve => "px-3 py-1 rounded-md text-sm text-white bg-action-primary-bg disabled:opacity-50",
        Decision::Reject => "px-3 py-1 rounded-md text-sm text-white bg-action-danger-bg disabled:opacity-50",
    };
    let on_click = move |_| {
        let remark = vm.remark_for(id);
        spawn_local(async move {
            let _ = vm.decide(id, decision, Some(remark)).await;
        });
    };
    view! {
        <button class=class disabled=move || vm.is_acting(id) on:click=on_click>
            {decision.label()}
        </button>
    }
}

#[component]
fn PendingRow(vm: ApprovalsViewModel, record: LeaveRecord) -> impl IntoView {
    let id = record.id;
    let employee = record
        .employee_name
        .clone()
        .unwrap_or_else(|| format!("Request #{}", id));
    let reason = record.reason.clone().unwrap_or_else(|| "-".into());
    view! {
        <li class="py-4 flex flex-col gap-2 lg:flex-row lg:items-center lg:justify-between">
            <div>
                <p class="font-medium text-fg">{employee}</p>
                <p class="text-sm text-fg-muted">{describe_request(&record)}</p>
                <p class="text-sm text-fg-muted">{reason}</p>
            </div>
            <div class="flex items-center gap-2">
                <input
                    type="text"
                    placeholder="Remark (optional)"
                    class="border border-border rounded-md px-2 py-1 text-sm"
                    prop:value=move || vm.remark_for(id)
                    on:input=move |ev| vm.set_remark(id, event_target_value(&ev))
                />
                <DecisionButton vm=vm id=id decision=Decision::Approve/>
                <DecisionButton vm=vm id=id decision=Decision::Reject/>
            </div>
        </li>
    }
}

#[component]
pub fn ApprovalsPanel() -> impl IntoView {
    let vm = ApprovalsViewModel::new();
    create_effect(move |_| {
        spawn_local(async move {
            let _ = vm.refresh().await;
        });
    });

    let message = vm.message;
    let on_toggle = move |_| {
        spawn_local(async move { vm.toggle_balances().await });
    };
    let on_year = move |event: ev::Event| {
        let year = parse_year(&event_target_value(&event), vm.year.get_untracked());
        spawn_local(async move { vm.change_year(year).await });
    };

    view! {
        <div class="space-y-6">
            <FeedbackBanners
                success=Signal::derive(move || message.get().success)
                error=Signal::derive(move || message.get().error)
            />
            <section class="bg-surface-elevated shadow rounded-lg p-6">
                <h2 class="text-lg font-semibold text-fg mb-4">"Pending Approvals"</h2>
                {move || {
                    if vm.loading.get() {
                        view! { <LoadingSpinner/> }.into_view()
                    } else if vm.rows.with(Vec::is_empty) {
                        view! { <EmptyState title="No pending requests."/> }.into_view()
                    } else {
                        view! {
                            <ul class="divide-y divide-border">
                                <For
                                    each=move || vm.rows.get()
                                    key=|record| record.id
                                    children=move |record| view! { <PendingRow vm=vm record=record/> }
                                />
                            </ul>
                        }
                        .into_view()
                    }
                }}
            </section>
            <section class="bg-surface-elevated shadow rounded-lg p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-semibold text-fg">"Team Balances"</h2>
                    <div class="flex items-center gap-2">
                        <input
                            type="number"
                            class="w-28 border border-border rounded-md px-2 py-1"
                            prop:value=move || vm.year.get().to_string()
                            on:change=on_year
                        />
                        <button
                            class="px-3 py-1 rounded-md text-sm border border-border"
                            on:click=on_toggle
                        >
                            {move || if vm.show_balances.get() { "Hide balances" } else { "Show balances" }}
                        </button>
                    </div>
                </div>
                <Show when=move || vm.show_balances.get() fallback=|| ()>
                    {move || {
                        if vm.balances_loading.get() {
                            view! { <LoadingSpinner/> }.into_view()
                        } else {
                            view! { <TeamBalances reports=vm.balances.get()/> }.into_view()
                        }
                    }}
                </Show>
            </section>
        </div>
    }
}
