use super::{
    repository::LoginRepository,
    utils::{LoginFormState, LOGIN_FAILED},
};
use crate::{
    api::{use_api_client, LoginRequest},
    utils::navigation::redirect_to,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<(), String>>,
}

/// Whatever went wrong, the user only learns that the credentials were not
/// accepted.
pub async fn perform_login(repo: &LoginRepository, request: LoginRequest) -> Result<(), String> {
    match repo.login(request).await {
        Ok(_) => Ok(()),
        Err(err) => {
            log::debug!("Login failed: {}", err);
            Err(LOGIN_FAILED.to_string())
        }
    }
}

impl LoginViewModel {
    pub fn new() -> Self {
        let repository = store_value(LoginRepository::new(use_api_client()));
        let form = LoginFormState::default();
        let error = create_rw_signal(None::<String>);

        let login_action = create_action(move |request: &LoginRequest| {
            let repo = repository.get_value();
            let request = request.clone();
            async move { perform_login(&repo, request).await }
        });

        create_effect(move |_| {
            if let Some(result) = login_action.value().get() {
                match result {
                    Ok(()) => {
                        error.set(None);
                        redirect_to("/");
                    }
                    Err(msg) => error.set(Some(msg)),
                }
            }
        });

        Self {
            form,
            error,
            login_action,
        }
    }

    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(msg) => self.error.set(Some(msg)),
        }
    }
}

impl Default for LoginViewModel {
    fn default() -> Self {
        Self::new()
    }
}
