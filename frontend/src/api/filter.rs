use reqwest::{
    header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Method, Request, Url,
};

use super::types::ApiError;
use crate::state::SessionContext;

pub const LOGIN_PATH: &str = "/auth/login";

/// Outgoing-request policy for calls to the leave service: bearer token on
/// everything under the API base except login, JSON content type for
/// in-memory bodies that do not declare one.
#[derive(Clone)]
pub struct AuthFilter {
    api_base: Option<Url>,
    session: SessionContext,
}

impl AuthFilter {
    pub fn new(api_base: &str, session: SessionContext) -> Self {
        let api_base = match Url::parse(api_base) {
            Ok(url) => Some(url),
            Err(err) => {
                log::warn!(
                    "API base {:?} is not an absolute URL ({}); no request will carry a token",
                    api_base,
                    err
                );
                None
            }
        };
        Self { api_base, session }
    }

    /// Returns the request to send. `request` itself is left untouched.
    pub fn apply(&self, request: &Request) -> Result<Request, ApiError> {
        let mut outgoing = request
            .try_clone()
            .ok_or_else(|| ApiError::request_failed("Request body cannot be cloned"))?;

        if self.should_attach_token(outgoing.url()) && !outgoing.headers().contains_key(AUTHORIZATION)
        {
            if let Some(token) = self.session.token() {
                match HeaderValue::from_str(&format!("Bearer {}", token)) {
                    Ok(value) => {
                        outgoing.headers_mut().insert(AUTHORIZATION, value);
                    }
                    Err(_) => log::warn!("Stored token is not a valid header value; sending without it"),
                }
            }
        }

        if method_has_body(outgoing.method())
            && has_inline_body(&outgoing)
            && !outgoing.headers().contains_key(CONTENT_TYPE)
        {
            outgoing
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(outgoing)
    }

    pub fn is_api_url(&self, url: &Url) -> bool {
        let Some(base) = &self.api_base else {
            return false;
        };
        if url.scheme() != base.scheme()
            || url.host_str() != base.host_str()
            || url.port_or_known_default() != base.port_or_known_default()
        {
            return false;
        }
        let base_path = base.path().trim_end_matches('/');
        let path = url.path();
        path == base_path
            || path
                .strip_prefix(base_path)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    pub fn is_login_url(&self, url: &Url) -> bool {
        let Some(base) = &self.api_base else {
            return false;
        };
        let login = format!("{}{}", base.path().trim_end_matches('/'), LOGIN_PATH);
        self.is_api_url(url) && url.path().trim_end_matches('/').eq_ignore_ascii_case(&login)
    }

    fn should_attach_token(&self, url: &Url) -> bool {
        self.is_api_url(url) && !self.is_login_url(url)
    }
}

fn method_has_body(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

// Multipart and streamed bodies expose no bytes and keep whatever type the
// transport assigns them.
fn has_inline_body(request: &Request) -> bool {
    request.body().and_then(|body| body.as_bytes()).is_some()
}
