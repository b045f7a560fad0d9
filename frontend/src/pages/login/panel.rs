use super::view_model::LoginViewModel;
use crate::components::layout::ErrorMessage;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = LoginViewModel::new();
    let pending = vm.login_action.pending();
    let email = vm.form.email;
    let password = vm.form.password;
    let error = vm.error;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Sign in to LeaveDesk"</h2>
                <form class="mt-8 space-y-4" on:submit=on_submit>
                    <div>
                        <label for="email" class="block text-sm font-medium text-fg">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            autocomplete="username"
                            class="mt-1 block w-full px-3 py-2 border border-border rounded-md"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            class="mt-1 block w-full px-3 py-2 border border-border rounded-md"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    {move || error.get().map(|msg| view! { <ErrorMessage message=msg/> })}
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-white bg-action-primary-bg disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_as;

    #[test]
    fn login_panel_renders_form() {
        let html = render_as(None, || view! { <LoginPanel/> });
        assert!(html.contains("Sign in to LeaveDesk"));
        assert!(html.contains("type=\"password\""));
    }
}
