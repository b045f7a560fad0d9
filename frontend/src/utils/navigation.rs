use super::storage::window;

/// Full page navigation, so every component re-reads the stored session.
pub fn redirect_to(path: &str) {
    match window() {
        Ok(win) => {
            if win.location().set_href(path).is_err() {
                log::error!("Failed to navigate to {}", path);
            }
        }
        Err(err) => log::warn!("Cannot navigate to {}: {}", path, err),
    }
}

pub fn origin() -> Option<String> {
    window().ok()?.location().origin().ok()
}
