#[cfg(target_arch = "wasm32")]
fn main() {
    schedule_frontend::start_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("schedule-frontend runs in the browser; build it for wasm32-unknown-unknown");
}
