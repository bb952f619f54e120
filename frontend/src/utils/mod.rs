pub mod date;
pub mod download;
pub mod progress;
pub mod storage;
pub mod upload;

pub use download::{trigger_blob_download, trigger_bytes_download};
