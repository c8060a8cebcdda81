pub mod client;
pub mod error;

// Public API exports
pub use client::{validate_pdf, HttpMaterialSource, MaterialSource, GENERIC_APPLICATION_ERROR};
pub use error::UploadError;
