use crate::components::layout::Layout;
use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::ApprovalsPanel;

#[component]
pub fn ApprovalsPage() -> impl IntoView {
    view! {
        <Layout>
            <ApprovalsPanel/>
        </Layout>
    }
}
