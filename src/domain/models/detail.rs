//! Detail view of a single artist.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::artist::Artist;

/// A geocoded concert location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub address: String,
    pub lat: f64,
    pub lon: f64,
}

/// One concert: a location paired with a parsed date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub location: String,
    pub date: NaiveDate,
}

/// Everything the detail page shows for one artist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistDetail {
    pub artist: Artist,

    /// Locations that could be geocoded; the rest are omitted.
    pub locations: Vec<GeoLocation>,

    pub dates: Vec<String>,

    pub relations: BTreeMap<String, Vec<String>>,

    /// Concerts in chronological order.
    pub events: Vec<Event>,
}
