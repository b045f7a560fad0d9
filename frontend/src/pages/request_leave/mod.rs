use crate::components::layout::Layout;
use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::RequestLeavePanel;

#[component]
pub fn RequestLeavePage() -> impl IntoView {
    view! {
        <Layout>
            <RequestLeavePanel/>
        </Layout>
    }
}
