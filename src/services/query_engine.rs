//! Search, filtering, and suggestions over one aggregate.
//!
//! Everything here is a pure function of its inputs. Callers pass the
//! aggregate they obtained from the cache; nothing is locked or mutated.

use std::collections::HashSet;

use crate::domain::errors::QueryInputError;
use crate::domain::models::{
    Aggregate, Artist, FilterCriteria, SearchResult, Suggestion, SuggestionCategory,
};

/// Whether `artist`, joined with its `locations`, passes every criterion.
pub fn matches(artist: &Artist, locations: &[String], criteria: &FilterCriteria) -> bool {
    within(artist.creation_date, criteria.creation_year_min, criteria.creation_year_max)
        && within(
            artist.first_album_year(),
            criteria.first_album_year_min,
            criteria.first_album_year_max,
        )
        && accepts_member_count(artist, criteria)
        && accepts_locations(locations, criteria)
}

fn within(year: i32, min: i32, max: i32) -> bool {
    (min..=max).contains(&year)
}

fn accepts_member_count(artist: &Artist, criteria: &FilterCriteria) -> bool {
    criteria.members.is_empty() || criteria.members.contains(&artist.member_count())
}

fn accepts_locations(locations: &[String], criteria: &FilterCriteria) -> bool {
    if criteria.locations.is_empty() {
        return true;
    }
    let wanted: Vec<String> = criteria.locations.iter().map(|l| l.to_lowercase()).collect();

    locations.iter().any(|location| {
        let location = location.trim().to_lowercase();
        wanted.iter().any(|w| location.contains(w.as_str()))
    })
}

/// How a search string is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SearchTerm {
    All,
    Year(i32),
    Text(String),
}

impl SearchTerm {
    fn parse(query: &str) -> Self {
        if query.is_empty() {
            Self::All
        } else if query.len() == 4 && query.bytes().all(|b| b.is_ascii_digit()) {
            query.parse().map_or_else(|_| Self::Text(query.to_lowercase()), Self::Year)
        } else {
            Self::Text(query.to_lowercase())
        }
    }

    fn matches(&self, artist: &Artist, locations: &[String]) -> bool {
        match self {
            Self::All => true,
            // Year queries look at the creation year only.
            Self::Year(year) => artist.creation_date == *year,
            Self::Text(needle) => {
                contains_ci(&artist.name, needle)
                    || artist.members.iter().any(|m| contains_ci(m, needle))
                    || contains_ci(&artist.first_album, needle)
                    || locations.iter().any(|l| contains_ci(l.trim(), needle))
            }
        }
    }
}

/// `needle` must already be lower-cased.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Filter the aggregate, then match what remains against `query`.
///
/// An empty query returns every record that passes the filter. A query of
/// exactly four digits matches creation years only. Anything else is a
/// case-insensitive substring match over name, members, first album date,
/// and locations. Results keep the aggregate's order.
pub fn search(aggregate: &Aggregate, query: &str, criteria: &FilterCriteria) -> SearchResult {
    let term = SearchTerm::parse(query);
    let locations = aggregate.locations.by_artist();

    let artists = aggregate
        .artists
        .iter()
        .filter(|artist| {
            let joined = locations.get(&artist.id).copied().unwrap_or_default();
            matches(artist, joined, criteria) && term.matches(artist, joined)
        })
        .cloned()
        .collect();

    SearchResult { artists }
}

/// Autocomplete entries for `query`, deduplicated by (text, category).
///
/// The creation year is compared as a substring of its decimal form, unlike
/// search, which requires an exact year.
pub fn suggest(aggregate: &Aggregate, query: &str) -> Result<Vec<Suggestion>, QueryInputError> {
    if query.is_empty() {
        return Err(QueryInputError::EmptyQuery);
    }

    let needle = query.to_lowercase();
    let locations = aggregate.locations.by_artist();
    let mut collector = SuggestionCollector::default();

    for artist in &aggregate.artists {
        if contains_ci(&artist.name, &needle) {
            collector.push(&artist.name, SuggestionCategory::Artist);
        }

        for member in &artist.members {
            if contains_ci(member, &needle) {
                collector.push(member, SuggestionCategory::Member);
            }
        }

        if contains_ci(&artist.first_album, &needle) {
            collector.push(&artist.first_album, SuggestionCategory::FirstAlbum);
        }

        let year = artist.creation_date.to_string();
        if year.contains(query) {
            collector.push(&year, SuggestionCategory::CreationDate);
        }

        for location in locations.get(&artist.id).copied().unwrap_or_default() {
            let location = location.trim();
            if contains_ci(location, &needle) {
                collector.push(location, SuggestionCategory::Location);
            }
        }
    }

    Ok(collector.finish())
}

#[derive(Default)]
struct SuggestionCollector {
    seen: HashSet<(String, SuggestionCategory)>,
    ordered: Vec<Suggestion>,
}

impl SuggestionCollector {
    fn push(&mut self, text: &str, category: SuggestionCategory) {
        if self.seen.insert((text.to_string(), category)) {
            self.ordered.push(Suggestion::new(text, category));
        }
    }

    fn finish(self) -> Vec<Suggestion> {
        self.ordered
    }
}
