use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use std::cmp::Ordering;
use tracing::warn;

/// Locale-aware title comparison. Titles are mostly Japanese, so kana and
/// kanji are ordered by the Japanese collation tables instead of by code point.
pub struct TitleCollator {
    collator: Option<Collator>,
}

impl TitleCollator {
    pub fn japanese() -> Self {
        let options = CollatorOptions::new();
        let collator = match Collator::try_new(&locale!("ja").into(), options) {
            Ok(collator) => Some(collator),
            Err(err) => {
                warn!(
                    "Japanese collation unavailable, using code point order: {}",
                    err
                );
                None
            }
        };

        Self { collator }
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(left, right),
            None => left.cmp(right),
        }
    }
}

thread_local! {
    static SHARED: TitleCollator = TitleCollator::japanese();
}

/// Run `f` with this thread's collator, built on first use.
pub fn with_title_collator<T>(f: impl FnOnce(&TitleCollator) -> T) -> T {
    SHARED.with(f)
}

impl Default for TitleCollator {
    fn default() -> Self {
        Self::japanese()
    }
}
