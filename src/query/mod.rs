pub mod search;

pub use search::top5;
// Re-export for public API
#[allow(unused_imports)]
pub use search::RESULT_LIMIT;
