pub mod config;
pub mod convert;
pub mod error;
pub mod import_export;
pub mod models;
pub mod tags;
pub mod utils;

// Re-export error types for convenience
pub use error::{MarkportError, Result};
