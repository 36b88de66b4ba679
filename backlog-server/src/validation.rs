//! Form input checks. The query engine trusts its input, so everything
//! coming from a form is checked here before it is turned into a model.

use backlog_types::{
    Game, GameDraft, GameUpdate, LibraryError, ProfileUpdate, UserId, WishlistDraft,
    WishlistItem,
};
use chrono::Utc;
use uuid::Uuid;

pub const MIN_PRIORITY: i32 = 1;
pub const MAX_PRIORITY: i32 = 5;

pub fn validate_priority(priority: i32) -> Result<u8, LibraryError> {
    if (MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
        Ok(priority as u8)
    } else {
        Err(LibraryError::InvalidPriority { priority })
    }
}

pub fn validate_title(title: &str) -> Result<String, LibraryError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(LibraryError::EmptyTitle);
    }
    Ok(title.to_string())
}

pub fn validate_price(price: Option<i64>) -> Result<Option<u32>, LibraryError> {
    price
        .map(|amount| u32::try_from(amount).map_err(|_| LibraryError::InvalidPrice))
        .transpose()
}

pub fn validate_playtime(hours: Option<f64>) -> Result<Option<f64>, LibraryError> {
    match hours {
        Some(value) if !value.is_finite() || value < 0.0 => Err(LibraryError::InvalidPlaytime),
        other => Ok(other),
    }
}

fn clean_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Turn a registration form into the game it would create.
pub fn game_from_draft(draft: GameDraft, user_id: &UserId) -> Result<Game, LibraryError> {
    let now = Utc::now();
    Ok(Game {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.clone(),
        title: validate_title(&draft.title)?,
        platform: draft.platform,
        status: draft.status,
        igdb_id: None,
        steam_app_id: None,
        cover_image_url: None,
        purchase_price: validate_price(draft.purchase_price)?,
        purchase_date: draft.purchase_date,
        priority: validate_priority(draft.priority)?,
        playtime_hours: None,
        notes: clean_notes(draft.notes),
        created_at: now,
        updated_at: now,
    })
}

/// Apply detail-page edits to a copy of `game`.
pub fn apply_update(game: &Game, update: GameUpdate) -> Result<Game, LibraryError> {
    let mut updated = game.clone();
    updated.status = update.status;
    updated.priority = validate_priority(update.priority)?;
    if update.playtime_hours.is_some() {
        updated.playtime_hours = validate_playtime(update.playtime_hours)?;
    }
    updated.notes = clean_notes(update.notes);
    updated.updated_at = Utc::now();
    Ok(updated)
}

pub fn wishlist_item_from_draft(
    draft: WishlistDraft,
    user_id: &UserId,
) -> Result<WishlistItem, LibraryError> {
    Ok(WishlistItem {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.clone(),
        title: validate_title(&draft.title)?,
        platform: draft.platform,
        igdb_id: None,
        expected_price: validate_price(draft.expected_price)?,
        release_date: draft.release_date,
        notes: clean_notes(draft.notes),
        created_at: Utc::now(),
    })
}

pub fn validate_profile(update: &ProfileUpdate) -> Result<(), LibraryError> {
    validate_title(&update.display_name)?;
    Ok(())
}
