pub mod auth;
pub mod schedule;
pub mod session;
