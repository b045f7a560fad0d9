use crate::api::LeaveRecord;
use serde::{Deserialize, Serialize};

pub const LOAD_LEAVES_FAILED: &str = "Failed to load your leaves.";
pub const LOAD_BALANCE_FAILED: &str = "Failed to load your balance.";

/// One rendered row of the leave history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRow {
    pub id: i64,
    pub leave_type: String,
    pub period: String,
    pub status: String,
    pub remark: String,
}

impl From<&LeaveRecord> for LeaveRow {
    fn from(record: &LeaveRecord) -> Self {
        Self {
            id: record.id,
            leave_type: record.leave_type.clone(),
            period: format_period(&record.start_date, &record.end_date),
            status: record
                .status
                .clone()
                .unwrap_or_else(|| "PENDING".to_string()),
            remark: record
                .decision_remark
                .clone()
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub fn format_period(start: &str, end: &str) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{} → {}", start, end)
    }
}
