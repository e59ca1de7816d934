//! Source records and the per-artist indices served by the remote API.
//!
//! Every type here mirrors one remote payload shape. Records are decoded once
//! per refresh and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Identifier shared by an artist and its index entries.
pub type ArtistId = u32;

/// One artist or band as published by the artists endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,

    #[serde(default)]
    pub image: String,

    pub name: String,

    #[serde(default)]
    pub members: Vec<String>,

    /// Year the act was formed.
    pub creation_date: i32,

    /// Release date of the first album, formatted `DD-MM-YYYY`.
    #[serde(default)]
    pub first_album: String,

    // Links to the per-artist index endpoints. Decoded for completeness,
    // never followed: the indices are fetched in bulk instead.
    #[serde(default)]
    pub locations: String,

    #[serde(default)]
    pub concert_dates: String,

    #[serde(default)]
    pub relations: String,
}

impl Artist {
    /// Year component of the first album date.
    ///
    /// Takes the final `-`-separated component; anything that does not parse
    /// yields `0` so that range checks fail instead of erroring.
    pub fn first_album_year(&self) -> i32 {
        self.first_album
            .rsplit('-')
            .next()
            .and_then(|year| year.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

/// Concert locations per artist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationIndex {
    #[serde(default)]
    pub index: Vec<LocationEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub id: ArtistId,

    #[serde(default)]
    pub locations: Vec<String>,

    /// Link to the matching dates entry.
    #[serde(default)]
    pub dates: String,
}

impl LocationIndex {
    /// Locations of one artist, empty when the id is unknown.
    ///
    /// A repeated id resolves to its last entry, matching [`Self::by_artist`].
    pub fn for_artist(&self, id: ArtistId) -> &[String] {
        self.index
            .iter()
            .rfind(|entry| entry.id == id)
            .map_or(&[], |entry| entry.locations.as_slice())
    }

    /// Lookup table used by full scans so each record joins in O(1).
    /// Later entries overwrite earlier ones with the same id.
    pub fn by_artist(&self) -> HashMap<ArtistId, &[String]> {
        self.index
            .iter()
            .map(|entry| (entry.id, entry.locations.as_slice()))
            .collect()
    }
}

/// Concert dates per artist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateIndex {
    #[serde(default)]
    pub index: Vec<DateEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateEntry {
    pub id: ArtistId,

    #[serde(default)]
    pub dates: Vec<String>,
}

impl DateIndex {
    pub fn for_artist(&self, id: ArtistId) -> &[String] {
        self.index
            .iter()
            .rfind(|entry| entry.id == id)
            .map_or(&[], |entry| entry.dates.as_slice())
    }
}

/// Concert dates grouped by location, per artist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationIndex {
    #[serde(default)]
    pub index: Vec<RelationEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationEntry {
    pub id: ArtistId,

    #[serde(default)]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

impl RelationIndex {
    pub fn for_artist(&self, id: ArtistId) -> Option<&BTreeMap<String, Vec<String>>> {
        self.index
            .iter()
            .rfind(|entry| entry.id == id)
            .map(|entry| &entry.dates_locations)
    }
}

/// All four datasets from a single fetch run.
///
/// An `Aggregate` is only ever built whole by the aggregate fetcher; readers
/// never see records from one run joined with indices from another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    pub artists: Vec<Artist>,
    pub locations: LocationIndex,
    pub dates: DateIndex,
    pub relations: RelationIndex,
}

impl Aggregate {
    pub fn artist(&self, id: ArtistId) -> Option<&Artist> {
        self.artists.iter().find(|artist| artist.id == id)
    }
}
