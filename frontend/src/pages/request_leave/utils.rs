use crate::{
    api::{ApiError, BalanceShortfall, CreateLeaveRequest, LeaveType},
    utils::date::normalize_date,
};
use leptos::*;

pub const INVALID_DATES: &str = "Please enter valid dates.";
pub const INVALID_TYPE: &str = "Please choose a leave type.";
pub const SUBMITTED: &str = "Leave request submitted successfully.";
pub const OVERLAPPING: &str = "You already have a pending/approved leave overlapping these dates.";
pub const SUBMIT_FAILED: &str = "Failed to submit leave request.";

/// Raw form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveFormInput {
    pub leave_type: String,
    pub start: String,
    pub end: String,
    pub reason: String,
}

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    leave_type: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal(LeaveType::default().as_str().to_string()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn leave_type_signal(&self) -> RwSignal<String> {
        self.leave_type
    }

    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn snapshot(&self) -> LeaveFormInput {
        LeaveFormInput {
            leave_type: self.leave_type.get_untracked(),
            start: self.start_date.get_untracked(),
            end: self.end_date.get_untracked(),
            reason: self.reason.get_untracked(),
        }
    }
}

pub fn build_leave_request(input: &LeaveFormInput) -> Result<CreateLeaveRequest, ApiError> {
    let (start_date, end_date) = match (normalize_date(&input.start), normalize_date(&input.end)) {
        (Ok(start), Ok(end)) => (start, end),
        _ => return Err(ApiError::validation(INVALID_DATES)),
    };
    let leave_type = input
        .leave_type
        .parse::<LeaveType>()
        .map_err(|_| ApiError::validation(INVALID_TYPE))?;
    let reason = input.reason.trim();
    Ok(CreateLeaveRequest {
        leave_type,
        start_date,
        end_date,
        reason: (!reason.is_empty()).then(|| reason.to_string()),
    })
}

/// Maps a failed submission to the text shown under the form.
pub fn submission_error_message(err: &ApiError) -> String {
    match err.status {
        Some(409) => OVERLAPPING.to_string(),
        Some(400) => err
            .details
            .as_ref()
            .and_then(BalanceShortfall::from_body)
            .map(|shortfall| shortfall.message())
            .unwrap_or_else(|| err.message_or(SUBMIT_FAILED)),
        _ => err.message_or(SUBMIT_FAILED),
    }
}
