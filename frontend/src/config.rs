use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        keys.into_iter()
            .filter_map(|key| js_sys::Reflect::get(&obj, &key.into()).ok())
            .find_map(|v| v.as_string())
            .filter(|v| !v.trim().is_empty())
    }

    // window.__SCHEDULE_ENV = { API_BASE_URL: "..." }
    // window.__SCHEDULE_CONFIG = { api_base_url: "..." }
    pub(super) fn snapshot_from_globals() -> Option<String> {
        read_global("__SCHEDULE_ENV", ["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global("__SCHEDULE_CONFIG", ["api_base_url", "API_BASE_URL"]))
    }

    pub(super) fn write_window_config(url: &str) {
        let Some(w) = web_sys::window() else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&w, &"__SCHEDULE_CONFIG".into(), &obj);
    }

    fn config_json_url() -> Option<String> {
        let href = web_sys::window()?.location().href().ok()?;
        web_sys::Url::new_with_base("./config.json", &href)
            .ok()
            .map(|url| url.href())
    }

    pub(super) async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let resp = reqwest::get(config_json_url()?).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

/// Resolved once: env global, config global, `./config.json`, then the
/// local default.
#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = browser::snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(url) = browser::fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.api_base_url)
        .filter(|url| !url.trim().is_empty())
    {
        browser::write_window_config(&url);
        return cache_base_url(&url);
    }
    log::info!("No runtime API config found, using {}", DEFAULT_API_BASE_URL);
    cache_base_url(DEFAULT_API_BASE_URL)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    match API_BASE_URL.get() {
        Some(cached) => cached.clone(),
        None => cache_base_url(DEFAULT_API_BASE_URL),
    }
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::debug!("API base URL: {}", url);
}
