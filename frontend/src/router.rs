use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    api::{ApiClient, Role},
    components::guard::{RequireAuth, RequireRole},
    config,
    pages::{
        ApprovalsPage, DashboardPage, LoginPage, MyLeavesPage, RegisterEmployeePage,
        RequestLeavePage,
    },
    state::SessionContext,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/login",
    "/",
    "/request",
    "/my-leaves",
    "/approvals",
    "/register-employee",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/", "/request", "/my-leaves", "/approvals"];

pub const MANAGER_ROUTE_PATHS: &[&str] = &["/approvals", "/register-employee"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    let session = SessionContext::browser();
    provide_context(ApiClient::new(config::api_base_url(), session.clone()));
    provide_context(session);
    provide_meta_context();
    view! {
        <Title text="LeaveDesk"/>
        <Router>
            <Routes>
                <Route path="/login" view=LoginPage/>
                <Route path="/" view=ProtectedDashboard/>
                <Route path="/request" view=ProtectedRequestLeave/>
                <Route path="/my-leaves" view=ProtectedMyLeaves/>
                <Route path="/approvals" view=ProtectedApprovals/>
                <Route path="/register-employee" view=ManagerRegisterEmployee/>
                <Route path="/*any" view=|| view! { <Redirect path="/"/> }/>
            </Routes>
        </Router>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedRequestLeave() -> impl IntoView {
    view! { <RequireAuth><RequestLeavePage/></RequireAuth> }
}

#[component]
fn ProtectedMyLeaves() -> impl IntoView {
    view! { <RequireAuth><MyLeavesPage/></RequireAuth> }
}

#[component]
fn ProtectedApprovals() -> impl IntoView {
    view! {
        <RequireAuth>
            <RequireRole role=Role::Manager>
                <ApprovalsPage/>
            </RequireRole>
        </RequireAuth>
    }
}

// Role check only: without a session the stored role reads as EMPLOYEE and
// the dashboard guard takes over.
#[component]
fn ManagerRegisterEmployee() -> impl IntoView {
    view! { <RequireRole role=Role::Manager><RegisterEmployeePage/></RequireRole> }
}
