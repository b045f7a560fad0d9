use super::{
    client::ApiClient,
    filter::LOGIN_PATH,
    types::{ApiError, LoginRequest, LoginResponse},
};

impl ApiClient {
    /// Signs in and stores the returned session.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .send(
                self.http_client()
                    .post(self.endpoint(LOGIN_PATH))
                    .json(&request),
            )
            .await?;
        let login: LoginResponse = self.map_json_response(response).await?;
        self.session().save(&login.token, &login.role, &login.name);
        log::info!("Signed in as {} ({})", login.name, login.role);
        Ok(login)
    }

    /// Drops the stored session. The leave service keeps no server-side
    /// session, so nothing is sent.
    pub fn logout(&self) {
        self.session().logout();
        log::info!("Signed out");
    }
}
