use web_sys::{Storage, Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BrowserUnavailable {
    #[error("no window object")]
    Window,
    #[error("localStorage is disabled")]
    LocalStorage,
}

pub fn window() -> Result<Window, BrowserUnavailable> {
    web_sys::window().ok_or(BrowserUnavailable::Window)
}

/// `window.localStorage`; private browsing modes may deny it.
pub fn local_storage() -> Result<Storage, BrowserUnavailable> {
    window()?
        .local_storage()
        .ok()
        .flatten()
        .ok_or(BrowserUnavailable::LocalStorage)
}
