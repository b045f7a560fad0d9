use super::{
    utils::{FieldError, RegistrationErrors, MIN_PASSWORD_LEN},
    view_model::RegisterEmployeeViewModel,
};
use crate::components::layout::FeedbackBanners;
use leptos::{ev::SubmitEvent, *};

#[component]
fn FieldHint(#[prop(into)] error: Signal<Option<FieldError>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|err| view! { <p class="mt-1 text-xs text-status-error-text">{err.message()}</p> })
    }
}

// Field errors stay hidden until the first rejected submit.
fn visible_error(
    show: RwSignal<bool>,
    errors: Memo<RegistrationErrors>,
    pick: fn(&RegistrationErrors) -> Option<FieldError>,
) -> Signal<Option<FieldError>> {
    Signal::derive(move || if show.get() { pick(&errors.get()) } else { None })
}

#[component]
pub fn RegisterEmployeePanel() -> impl IntoView {
    let vm = RegisterEmployeeViewModel::new();
    let form = vm.form;
    let message = vm.message;
    let show_errors = vm.show_errors;
    let errors = create_memo(move |_| form.errors());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let _ = vm.submit().await;
        });
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 max-w-xl">
            <h2 class="text-lg font-semibold text-fg mb-4">"Register Employee"</h2>
            <FeedbackBanners
                success=Signal::derive(move || message.get().success)
                error=Signal::derive(move || message.get().error)
            />
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label for="employee-name" class="block text-sm font-medium text-fg">"Name"</label>
                    <input
                        id="employee-name"
                        type="text"
                        class="mt-1 block w-full border border-border rounded-md px-3 py-2"
                        prop:value=move || form.name.get()
                        on:input=move |ev| form.name.set(event_target_value(&ev))
                    />
                    <FieldHint error=visible_error(show_errors, errors, |e| e.name)/>
                </div>
                <div>
                    <label for="employee-email" class="block text-sm font-medium text-fg">"Email"</label>
                    <input
                        id="employee-email"
                        type="email"
                        class="mt-1 block w-full border border-border rounded-md px-3 py-2"
                        prop:value=move || form.email.get()
                        on:input=move |ev| form.email.set(event_target_value(&ev))
                    />
                    <FieldHint error=visible_error(show_errors, errors, |e| e.email)/>
                </div>
                <div>
                    <label for="employee-password" class="block text-sm font-medium text-fg">"Password"</label>
                    <input
                        id="employee-password"
                        type="password"
                        minlength=MIN_PASSWORD_LEN.to_string()
                        class="mt-1 block w-full border border-border rounded-md px-3 py-2"
                        prop:value=move || form.password.get()
                        on:input=move |ev| form.password.set(event_target_value(&ev))
                    />
                    <FieldHint error=visible_error(show_errors, errors, |e| e.password)/>
                </div>
                <button
                    type="submit"
                    disabled=move || vm.saving.get() || !errors.get().is_empty()
                    class="px-4 py-2 rounded-md text-sm font-medium text-white bg-action-primary-bg disabled:opacity-50"
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Register" }}
                </button>
            </form>
        </div>
    }
}
