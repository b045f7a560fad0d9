use crate::components::layout::Layout;
use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::RegisterEmployeePanel;

#[component]
pub fn RegisterEmployeePage() -> impl IntoView {
    view! {
        <Layout>
            <RegisterEmployeePanel/>
        </Layout>
    }
}
