pub mod build;
pub mod postings;
pub mod stats;
pub mod types;

// Re-exports for public API
#[allow(unused_imports)]
pub use types::*;
