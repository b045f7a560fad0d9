use super::{
    client::ApiClient,
    types::{ApiError, CreateEmployee, Role, UserResponse},
};

impl ApiClient {
    pub async fn create_employee(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserResponse, ApiError> {
        let payload = CreateEmployee {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: Role::Employee,
        };
        let response = self
            .send(
                self.http_client()
                    .post(self.endpoint("/users"))
                    .json(&payload),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn list_users(&self) -> Result<Vec<UserResponse>, ApiError> {
        let response = self
            .send(self.http_client().get(self.endpoint("/users")))
            .await?;
        self.map_json_response(response).await
    }
}
