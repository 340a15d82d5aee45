//! I/O modules for the background statement upload.

pub mod async_uploader;

// Re-export commonly used types
pub use async_uploader::{AsyncUploader, UploadResult};
