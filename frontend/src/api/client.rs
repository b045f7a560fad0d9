use leptos::use_context;
use reqwest::{Client, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{filter::AuthFilter, types::ApiError};
use crate::{config, state::SessionContext};

/// HTTP access to the leave service. Every request goes through the
/// [`AuthFilter`] before it leaves the browser.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    filter: AuthFilter,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionContext) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            filter: AuthFilter::new(&base_url, session.clone()),
            base_url,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        let request = self.filter.apply(&request)?;
        log::debug!("{} {}", request.method(), request.url());
        let response = self.execute(request).await?;
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            log::warn!("Leave service rejected the session ({})", response.url());
        }
        Ok(response)
    }

    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = find_mock(request.url().as_str()) {
            // Give concurrently polled futures a chance to run, as a real
            // round trip would.
            tokio::task::yield_now().await;
            return responder.respond(&request)?.into_response();
        }
        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::parse(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.ok();
        let error = ApiError::http(status, body);
        log::debug!("HTTP {}: {}", status, error.error);
        error
    }
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| {
        ApiClient::new(
            config::api_base_url(),
            crate::state::session::use_session(),
        )
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use mock_transport::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_transport::find_mock;
