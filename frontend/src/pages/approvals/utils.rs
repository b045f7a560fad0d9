use crate::api::LeaveRecord;

pub const LOAD_PENDING_FAILED: &str = "Failed to load pending approvals.";
pub const LOAD_BALANCES_FAILED: &str = "Failed to load balances.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn label(self) -> &'static str {
        match self {
            Decision::Approve => "Approve",
            Decision::Reject => "Reject",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Decision::Approve => "Failed to approve. Please try again.",
            Decision::Reject => "Failed to reject. Please try again.",
        }
    }
}

pub fn normalize_remark(raw: Option<&str>) -> String {
    raw.unwrap_or_default().trim().to_string()
}

pub fn describe_request(record: &LeaveRecord) -> String {
    format!(
        "{} · {} to {}",
        record.leave_type, record.start_date, record.end_date
    )
}
