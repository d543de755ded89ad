// Public modules
pub mod defaults;
pub mod discover;
pub mod error;
pub mod rewrite;
pub mod runner;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
