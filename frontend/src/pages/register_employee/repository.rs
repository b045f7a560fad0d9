use super::utils::RegistrationInput;
use crate::api::{ApiClient, ApiError, UserResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct RegisterEmployeeRepository {
    client: Rc<ApiClient>,
}

impl RegisterEmployeeRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn register(&self, input: &RegistrationInput) -> Result<UserResponse, ApiError> {
        self.client
            .create_employee(input.name.trim(), input.email.trim(), &input.password)
            .await
    }
}
