pub mod collation;
pub mod dashboard;
pub mod query_engine;
pub mod sessions;
pub mod statistics;
pub mod wishlist;

// Re-export main components
pub use collation::*;
pub use dashboard::*;
pub use query_engine::*;
pub use sessions::*;
pub use statistics::*;
pub use wishlist::*;

/// Cap used by the dashboard and statistics lists.
pub const DEFAULT_LIST_LIMIT: usize = 5;
