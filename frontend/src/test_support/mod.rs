#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, Role};
    use crate::state::SessionContext;
    use leptos::*;

    pub const TEST_API_BASE: &str = "http://leave.test/api";

    pub fn session_with(role: Role) -> SessionContext {
        let session = SessionContext::in_memory();
        session.save("tok-test", role.as_str(), "Maria");
        session
    }

    /// Provides a signed-in session plus a client bound to it.
    pub fn provide_session(role: Role) -> SessionContext {
        let session = session_with(role);
        provide_context(session.clone());
        provide_context(ApiClient::new(TEST_API_BASE, session.clone()));
        session
    }

    pub fn provide_signed_out_session() -> SessionContext {
        let session = SessionContext::in_memory();
        provide_context(session.clone());
        provide_context(ApiClient::new(TEST_API_BASE, session.clone()));
        session
    }
}
