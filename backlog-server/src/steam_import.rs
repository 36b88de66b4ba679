use backlog_types::{LibraryError, SteamOwnedGame};
use std::collections::HashSet;
use std::time::Duration;
use tracing::info;

/// Stand-in for the Steam Web API: returns a canned owned-games list
/// after an artificial delay. Imports are acknowledged but never stored.
pub struct SteamImporter {
    library: Vec<SteamOwnedGame>,
    fetch_delay: Duration,
}

impl SteamImporter {
    pub fn new(library: Vec<SteamOwnedGame>, fetch_delay: Duration) -> Self {
        Self {
            library,
            fetch_delay,
        }
    }

    pub async fn fetch_library(&self, steam_id: &str) -> Result<Vec<SteamOwnedGame>, LibraryError> {
        let steam_id = steam_id.trim();
        if steam_id.is_empty() {
            return Err(LibraryError::MissingSteamId);
        }

        info!("Fetching Steam library for {} (mock)", steam_id);
        tokio::time::sleep(self.fetch_delay).await;

        Ok(self.library.clone())
    }

    /// Count how many of the selected app ids exist in the library.
    /// Unknown and repeated ids are ignored.
    pub fn import_selected(&self, appids: &[u32]) -> usize {
        let selected: HashSet<u32> = appids.iter().copied().collect();
        let imported = self
            .library
            .iter()
            .filter(|game| selected.contains(&game.appid))
            .count();

        info!(
            "Imported {} of {} selected Steam games (mock)",
            imported,
            appids.len()
        );
        imported
    }
}
