pub mod approvals;
pub mod dashboard;
pub mod login;
pub mod my_leaves;
pub mod register_employee;
pub mod request_leave;

pub use approvals::ApprovalsPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use my_leaves::MyLeavesPage;
pub use register_employee::RegisterEmployeePage;
pub use request_leave::RequestLeavePage;
