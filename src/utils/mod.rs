//! Shared utilities: keyword classification and progress reporting.

pub mod classify;
pub mod progress;

// Re-exports for public API
#[allow(unused_imports)]
pub use classify::*;
