mod auth;
pub mod client;
mod files;
mod schedule;
pub mod types;
pub mod unauthorized;

pub use client::*;
pub use types::*;
pub use unauthorized::UnauthorizedPolicy;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
