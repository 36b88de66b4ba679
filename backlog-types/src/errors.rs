use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Failure to read one of the enumerated values from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
pub enum LibraryError {
    #[error("game not found: {game_id}")]
    GameNotFound { game_id: String },
    #[error("wishlist item not found: {item_id}")]
    WishlistItemNotFound { item_id: String },
    #[error("invalid query: {message}")]
    InvalidQuery { message: String },
    #[error("priority must be between 1 and 5, got {priority}")]
    InvalidPriority { priority: i32 },
    #[error("playtime must not be negative")]
    InvalidPlaytime,
    #[error("price must not be negative")]
    InvalidPrice,
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("a Steam ID is required")]
    MissingSteamId,
}

impl From<ParseError> for LibraryError {
    fn from(err: ParseError) -> Self {
        LibraryError::InvalidQuery {
            message: err.to_string(),
        }
    }
}
