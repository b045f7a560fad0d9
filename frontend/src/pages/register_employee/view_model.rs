use super::{
    repository::RegisterEmployeeRepository,
    utils::{validate, RegistrationErrors, RegistrationFormState, REGISTERED, REGISTER_FAILED},
};
use crate::{api::use_api_client, utils::message::MessageState};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Another submission is still running.
    Busy,
    Invalid(RegistrationErrors),
    Registered,
    Failed(String),
}

#[derive(Clone, Copy)]
pub struct RegisterEmployeeViewModel {
    repository: StoredValue<RegisterEmployeeRepository>,
    pub form: RegistrationFormState,
    pub saving: RwSignal<bool>,
    pub message: RwSignal<MessageState>,
    pub show_errors: RwSignal<bool>,
}

impl RegisterEmployeeViewModel {
    pub fn new() -> Self {
        Self::with_repository(RegisterEmployeeRepository::new(use_api_client()))
    }

    pub fn with_repository(repository: RegisterEmployeeRepository) -> Self {
        Self {
            repository: store_value(repository),
            form: RegistrationFormState::default(),
            saving: create_rw_signal(false),
            message: create_rw_signal(MessageState::default()),
            show_errors: create_rw_signal(false),
        }
    }

    pub async fn submit(&self) -> RegistrationOutcome {
        if self.saving.get_untracked() {
            return RegistrationOutcome::Busy;
        }
        let input = self.form.snapshot();
        let errors = validate(&input);
        if !errors.is_empty() {
            self.show_errors.set(true);
            return RegistrationOutcome::Invalid(errors);
        }

        self.saving.set(true);
        self.message.update(|m| m.clear());
        let repo = self.repository.get_value();
        let result = repo.register(&input).await;
        self.saving.set(false);

        match result {
            Ok(user) => {
                log::info!("Registered employee {} ({})", user.name, user.id);
                self.message.update(|m| m.set_success(REGISTERED));
                self.form.reset();
                self.show_errors.set(false);
                RegistrationOutcome::Registered
            }
            Err(err) => {
                let msg = err.message_or(REGISTER_FAILED);
                self.message.update(|m| m.set_error(msg.clone()));
                RegistrationOutcome::Failed(msg)
            }
        }
    }
}

impl Default for RegisterEmployeeViewModel {
    fn default() -> Self {
        Self::new()
    }
}
