use super::view_model::RequestLeaveViewModel;
use crate::{api::LeaveType, components::layout::FeedbackBanners};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RequestLeavePanel() -> impl IntoView {
    let vm = RequestLeaveViewModel::new();
    let pending = vm.submit_action.pending();
    let leave_type = vm.form.leave_type_signal();
    let start = vm.form.start_signal();
    let end = vm.form.end_signal();
    let reason = vm.form.reason_signal();
    let message = vm.message;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 max-w-xl">
            <h2 class="text-lg font-semibold text-fg mb-4">"Request Leave"</h2>
            <FeedbackBanners
                success=Signal::derive(move || message.get().success)
                error=Signal::derive(move || message.get().error)
            />
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label for="leave-type" class="block text-sm font-medium text-fg">"Type"</label>
                    <select
                        id="leave-type"
                        class="mt-1 block w-full border border-border rounded-md px-3 py-2"
                        on:change=move |ev| leave_type.set(event_target_value(&ev))
                    >
                        {LeaveType::ALL
                            .iter()
                            .map(|kind| {
                                let value = kind.as_str();
                                view! {
                                    <option value=value selected=move || leave_type.get() == value>
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label for="start-date" class="block text-sm font-medium text-fg">"Start date"</label>
                        <input
                            id="start-date"
                            type="text"
                            placeholder="dd-MM-yyyy"
                            class="mt-1 block w-full border border-border rounded-md px-3 py-2"
                            prop:value=move || start.get()
                            on:input=move |ev| start.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="end-date" class="block text-sm font-medium text-fg">"End date"</label>
                        <input
                            id="end-date"
                            type="text"
                            placeholder="dd-MM-yyyy"
                            class="mt-1 block w-full border border-border rounded-md px-3 py-2"
                            prop:value=move || end.get()
                            on:input=move |ev| end.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div>
                    <label for="reason" class="block text-sm font-medium text-fg">"Reason"</label>
                    <textarea
                        id="reason"
                        rows="3"
                        class="mt-1 block w-full border border-border rounded-md px-3 py-2"
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="px-4 py-2 rounded-md text-sm font-medium text-white bg-action-primary-bg disabled:opacity-50"
                >
                    {move || if pending.get() { "Submitting..." } else { "Submit" }}
                </button>
            </form>
        </div>
    }
}
