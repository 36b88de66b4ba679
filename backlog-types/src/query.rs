use crate::{GameStatus, ParseError, Platform};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Text accepted in place of a concrete value to mean "no filter".
pub const ALL_SENTINEL: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum SortBy {
    Title,
    #[default]
    PurchaseDate,
    PlaytimeHours, // Query strings may also say "playtime", see FromStr
    Priority,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Title => "title",
            SortBy::PurchaseDate => "purchaseDate",
            SortBy::PlaytimeHours => "playtimeHours",
            SortBy::Priority => "priority",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "title" => Ok(SortBy::Title),
            "purchaseDate" => Ok(SortBy::PurchaseDate),
            "playtimeHours" | "playtime" => Ok(SortBy::PlaytimeHours),
            "priority" => Ok(SortBy::Priority),
            _ => Err(ParseError::UnknownSortKey(s.to_string())),
        }
    }
}

/// One immutable library view request. `None` filters mean "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct LibraryQuery {
    pub search_text: String,
    pub platform: Option<Platform>,
    pub status: Option<GameStatus>,
    pub sort_by: SortBy,
}

impl LibraryQuery {
    pub fn new(sort_by: SortBy) -> Self {
        Self {
            sort_by,
            ..Default::default()
        }
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Build a query from raw request text, where absent, empty or `"all"`
    /// filters select everything and an absent sort key falls back to the
    /// default order.
    pub fn from_raw(
        search: Option<&str>,
        platform: Option<&str>,
        status: Option<&str>,
        sort_by: Option<&str>,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            search_text: search.unwrap_or_default().to_string(),
            platform: parse_selection(platform)?,
            status: parse_selection(status)?,
            sort_by: match sort_by.map(str::trim) {
                None | Some("") => SortBy::default(),
                Some(raw) => raw.parse()?,
            },
        })
    }
}

/// Parse an optional filter value, mapping absent/empty/`"all"` to `None`.
pub fn parse_selection<T>(raw: Option<&str>) -> Result<Option<T>, ParseError>
where
    T: FromStr<Err = ParseError>,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) if value.eq_ignore_ascii_case(ALL_SENTINEL) => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}
