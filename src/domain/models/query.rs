//! Query inputs and derived results.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::artist::Artist;

/// Filter criteria applied before any search term.
///
/// Every field is optional on the wire. A missing range bound is unbounded
/// and an empty set accepts everything, so the default value restricts
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default = "year_floor")]
    pub creation_year_min: i32,

    #[serde(default = "year_ceiling")]
    pub creation_year_max: i32,

    #[serde(default = "year_floor")]
    pub first_album_year_min: i32,

    #[serde(default = "year_ceiling")]
    pub first_album_year_max: i32,

    /// Accepted member counts.
    #[serde(default)]
    pub members: Vec<usize>,

    /// Accepted location substrings, matched case-insensitively.
    #[serde(default)]
    pub locations: Vec<String>,
}

const fn year_floor() -> i32 {
    i32::MIN
}

const fn year_ceiling() -> i32 {
    i32::MAX
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            creation_year_min: year_floor(),
            creation_year_max: year_ceiling(),
            first_album_year_min: year_floor(),
            first_album_year_max: year_ceiling(),
            members: Vec::new(),
            locations: Vec::new(),
        }
    }
}

impl FilterCriteria {
    /// Criteria that accept every record.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn with_creation_years(mut self, min: i32, max: i32) -> Self {
        self.creation_year_min = min;
        self.creation_year_max = max;
        self
    }

    pub fn with_first_album_years(mut self, min: i32, max: i32) -> Self {
        self.first_album_year_min = min;
        self.first_album_year_max = max;
        self
    }

    pub fn with_member_counts(mut self, counts: impl IntoIterator<Item = usize>) -> Self {
        self.members = counts.into_iter().collect();
        self
    }

    pub fn with_locations<S: Into<String>>(mut self, locations: impl IntoIterator<Item = S>) -> Self {
        self.locations = locations.into_iter().map(Into::into).collect();
        self
    }
}

/// Records matching a search, in aggregate order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub artists: Vec<Artist>,
}

impl SearchResult {
    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}

/// Field kind a suggestion was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestionCategory {
    #[serde(rename = "artist/band")]
    Artist,
    #[serde(rename = "member")]
    Member,
    #[serde(rename = "first album")]
    FirstAlbum,
    #[serde(rename = "created date")]
    CreationDate,
    #[serde(rename = "location")]
    Location,
}

impl SuggestionCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "artist/band",
            Self::Member => "member",
            Self::FirstAlbum => "first album",
            Self::CreationDate => "created date",
            Self::Location => "location",
        }
    }
}

impl fmt::Display for SuggestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Autocomplete entry offered for a partial query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    #[serde(rename = "type")]
    pub category: SuggestionCategory,
}

impl Suggestion {
    pub fn new(text: impl Into<String>, category: SuggestionCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}
