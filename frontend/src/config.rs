use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::utils::navigation;

pub const DEFAULT_API_BASE_URL: &str = "/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_string(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    // window.__LEAVEDESK_ENV (env.js) wins over window.__LEAVEDESK_CONFIG
    read_global_string("__LEAVEDESK_ENV", ["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_string("__LEAVEDESK_CONFIG", ["api_base_url", "API_BASE_URL"]))
}

fn write_window_config(url: &str) {
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__LEAVEDESK_CONFIG".into(), &obj);
}

async fn fetch_runtime_config(origin: &str) -> anyhow::Result<RuntimeConfig> {
    let url = format!("{}/config.json", origin);
    let resp = reqwest::Client::new()
        .get(&url)
        .send()
        .await
        .with_context(|| format!("requesting {}", url))?;
    if !resp.status().is_success() {
        bail!("{} answered {}", url, resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("decoding config.json")
}

/// Turns a configured base into an absolute URL without a trailing slash.
/// Path-only bases ("/api") are resolved against the page origin.
pub fn resolve_base_url(raw: &str, origin: Option<&str>) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    match origin {
        Some(origin) if trimmed.starts_with('/') => {
            format!("{}{}", origin.trim_end_matches('/'), trimmed)
        }
        _ => trimmed.to_string(),
    }
}

fn cache_base_url(value: String) -> String {
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

/// The resolved base, or the default before `init` has completed.
pub fn api_base_url() -> String {
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let origin = navigation::origin();
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(resolve_base_url(&existing, origin.as_deref()));
    }
    if let Some(origin) = origin.as_deref() {
        match fetch_runtime_config(origin).await {
            Ok(RuntimeConfig {
                api_base_url: Some(url),
            }) => {
                write_window_config(&url);
                return cache_base_url(resolve_base_url(&url, Some(origin)));
            }
            Ok(_) => log::debug!("config.json has no api_base_url"),
            Err(err) => log::info!("Runtime config unavailable ({:#}); using default", err),
        }
    }
    cache_base_url(resolve_base_url(DEFAULT_API_BASE_URL, origin.as_deref()))
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL: {}", base);
}
