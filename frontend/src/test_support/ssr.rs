use leptos::*;

use super::helpers::{provide_session, provide_signed_out_session};
use crate::api::Role;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders `view` to HTML. Resources stay unloaded, so pages render their
/// initial (loading or empty) state without touching the network.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Renders `view` inside a session signed in as `role`, or a signed-out one
/// for `None`.
pub fn render_as<F, N>(role: Option<Role>, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        match role {
            Some(role) => {
                provide_session(role);
            }
            None => {
                provide_signed_out_session();
            }
        }
        view()
    })
}
