use super::{
    repository::LeaveRequestRepository,
    utils::{build_leave_request, submission_error_message, LeaveFormInput, LeaveFormState, SUBMITTED},
};
use crate::{api::use_api_client, utils::message::MessageState};
use leptos::*;

/// Validates, sends and words the outcome of one submission. Invalid input
/// never reaches the network.
pub async fn submit_leave(
    repo: &LeaveRequestRepository,
    input: LeaveFormInput,
) -> Result<String, String> {
    let payload = build_leave_request(&input).map_err(|err| err.error)?;
    match repo.submit(payload).await {
        Ok(record) => {
            log::info!("Leave request {} submitted", record.id);
            Ok(SUBMITTED.to_string())
        }
        Err(err) => Err(submission_error_message(&err)),
    }
}

#[derive(Clone, Copy)]
pub struct RequestLeaveViewModel {
    pub form: LeaveFormState,
    pub message: RwSignal<MessageState>,
    pub submit_action: Action<LeaveFormInput, Result<String, String>>,
}

impl RequestLeaveViewModel {
    pub fn new() -> Self {
        let repository = store_value(LeaveRequestRepository::new(use_api_client()));
        let form = LeaveFormState::default();
        let message = create_rw_signal(MessageState::default());

        let submit_action = create_action(move |input: &LeaveFormInput| {
            let repo = repository.get_value();
            let input = input.clone();
            async move { submit_leave(&repo, input).await }
        });

        create_effect(move |_| {
            if let Some(result) = submit_action.value().get() {
                match result {
                    Ok(msg) => message.update(|m| m.set_success(msg)),
                    Err(msg) => message.update(|m| m.set_error(msg)),
                }
            }
        });

        Self {
            form,
            message,
            submit_action,
        }
    }

    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        self.message.update(|m| m.clear());
        self.submit_action.dispatch(self.form.snapshot());
    }
}

impl Default for RequestLeaveViewModel {
    fn default() -> Self {
        Self::new()
    }
}
