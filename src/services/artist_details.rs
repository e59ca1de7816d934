//! Detail view assembly for a single artist.
//!
//! Joins the artist with its three indices, geocodes its locations, and
//! turns the relation index into a chronological event list. Geocoding is
//! best-effort: failed lookups are logged and left out.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::models::{Aggregate, ArtistDetail, ArtistId, Event, GeoLocation};
use crate::domain::ports::Geocoder;

/// Build the detail view for `id`, or `None` when the artist is unknown.
pub async fn build_detail(
    aggregate: &Aggregate,
    id: ArtistId,
    geocoder: &dyn Geocoder,
) -> Option<ArtistDetail> {
    let artist = aggregate.artist(id)?.clone();
    let relations = aggregate.relations.for_artist(id).cloned().unwrap_or_default();

    Some(ArtistDetail {
        locations: geocode_all(aggregate.locations.for_artist(id), geocoder).await,
        dates: aggregate.dates.for_artist(id).to_vec(),
        events: events_from_relations(&relations),
        relations,
        artist,
    })
}

/// Geocode every location concurrently, keeping input order.
pub async fn geocode_all(locations: &[String], geocoder: &dyn Geocoder) -> Vec<GeoLocation> {
    let lookups = locations.iter().map(|location| async move {
        match geocoder.geocode(location).await {
            Ok(Some(found)) => Some(found),
            Ok(None) => {
                debug!(location = %location, "no geocoding result");
                None
            }
            Err(e) => {
                warn!(location = %location, error = %e, "failed to geocode location");
                None
            }
        }
    });

    join_all(lookups).await.into_iter().flatten().collect()
}

/// One event per parseable (location, date) pair, ordered by date then location.
pub fn events_from_relations(relations: &BTreeMap<String, Vec<String>>) -> Vec<Event> {
    let mut events: Vec<Event> = relations
        .iter()
        .flat_map(|(location, dates)| {
            dates.iter().filter_map(move |raw| {
                let parsed = parse_concert_date(raw);
                if parsed.is_none() {
                    debug!(location = %location, date = %raw, "skipping unparseable concert date");
                }
                parsed.map(|date| Event {
                    location: location.clone(),
                    date,
                })
            })
        })
        .collect();

    events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.location.cmp(&b.location)));
    events
}

/// Parse a `DD-MM-YYYY` concert date. The dates index marks some entries
/// with a leading `*`, which is ignored.
pub fn parse_concert_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim().trim_start_matches('*');
    NaiveDate::parse_from_str(trimmed, "%d-%m-%Y").ok()
}
