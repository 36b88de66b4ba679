pub mod errors;
pub mod forms;
pub mod game;
pub mod query;
pub mod stats;
pub mod user;
pub mod wishlist;

pub type GameId = String;
pub type UserId = String;

// Re-export all types
pub use errors::*;
pub use forms::*;
pub use game::*;
pub use query::*;
pub use stats::*;
pub use user::*;
pub use wishlist::*;
