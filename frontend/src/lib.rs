pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
pub mod test_support;
pub mod utils;

/// Installs the console logger and panic hook, starts the runtime config
/// fetch and mounts the app.
#[cfg(target_arch = "wasm32")]
pub fn start_app() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting schedule frontend");

    // window.__SCHEDULE_ENV takes precedence over ./config.json.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    router::mount_app();
}
