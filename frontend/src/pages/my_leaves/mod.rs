use crate::components::layout::Layout;
use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::MyLeavesPanel;

#[component]
pub fn MyLeavesPage() -> impl IntoView {
    view! {
        <Layout>
            <MyLeavesPanel/>
        </Layout>
    }
}
