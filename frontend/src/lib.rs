pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Installs logging, resolves the runtime config, then mounts the app.
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("Logger not installed: {}", err);
    }
    log::info!("Starting LeaveDesk frontend");

    wasm_bindgen_futures::spawn_local(async {
        config::init().await;
        router::mount_app();
    });
}
