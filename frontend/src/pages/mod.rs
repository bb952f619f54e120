pub mod home;
pub mod login;
pub mod schedule;

pub use home::*;
pub use login::*;
pub use schedule::*;
