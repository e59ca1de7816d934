//! Common test utilities for integration tests
//!
//! Provides an in-memory source client and a small fixture catalog shared
//! across the integration test files.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use groupie::domain::models::{
    Artist, DateEntry, DateIndex, LocationEntry, LocationIndex, RelationEntry, RelationIndex,
};
use groupie::domain::ports::{SourceClient, SourcePayload};
use groupie::{AggregateFetcher, SourceError, SourceKind};

struct FixtureArtist {
    id: u32,
    name: &'static str,
    members: &'static [&'static str],
    creation_date: i32,
    first_album: &'static str,
    relations: &'static [(&'static str, &'static [&'static str])],
}

const FIXTURE: &[FixtureArtist] = &[
    FixtureArtist {
        id: 1,
        name: "Queen",
        members: &["Freddie Mercury", "Brian May", "Roger Taylor", "John Deacon"],
        creation_date: 1970,
        first_album: "14-12-1973",
        relations: &[
            ("london-uk", &["*23-08-2019", "22-08-2019"]),
            ("los_angeles-usa", &["20-08-2019"]),
        ],
    },
    FixtureArtist {
        id: 2,
        name: "Pink Floyd",
        members: &["Syd Barrett", "David Gilmour", "Roger Waters", "Nick Mason", "Richard Wright"],
        creation_date: 1965,
        first_album: "05-08-1967",
        relations: &[
            ("berlin-germany", &["01-07-1988"]),
            ("london-uk", &["10-03-1973"]),
        ],
    },
    FixtureArtist {
        id: 3,
        name: "Scorpions",
        members: &["Klaus Meine", "Rudolf Schenker"],
        creation_date: 1965,
        first_album: "01-01-1972",
        relations: &[("hanover-germany", &["05-05-2020"])],
    },
];

/// Tag stamped on every record produced by fetch generation `generation`.
pub fn generation_tag(generation: u64) -> String {
    format!("gen-{generation}")
}

pub fn artists(generation: u64) -> Vec<Artist> {
    FIXTURE
        .iter()
        .map(|a| Artist {
            id: a.id,
            image: format!("https://img.test/{}-{}.jpeg", a.id, generation_tag(generation)),
            name: a.name.to_string(),
            members: a.members.iter().map(ToString::to_string).collect(),
            creation_date: a.creation_date,
            first_album: a.first_album.to_string(),
            locations: format!("https://api.test/locations/{}", a.id),
            concert_dates: format!("https://api.test/dates/{}", a.id),
            relations: format!("https://api.test/relation/{}", a.id),
        })
        .collect()
}

pub fn locations(generation: u64) -> LocationIndex {
    LocationIndex {
        index: FIXTURE
            .iter()
            .map(|a| LocationEntry {
                id: a.id,
                locations: a.relations.iter().map(|(l, _)| (*l).to_string()).collect(),
                dates: generation_tag(generation),
            })
            .collect(),
    }
}

/// Concert dates per artist, followed by the generation tag.
pub fn dates(generation: u64) -> DateIndex {
    DateIndex {
        index: FIXTURE
            .iter()
            .map(|a| DateEntry {
                id: a.id,
                dates: a
                    .relations
                    .iter()
                    .flat_map(|(_, dates)| dates.iter().map(ToString::to_string))
                    .chain(std::iter::once(generation_tag(generation)))
                    .collect(),
            })
            .collect(),
    }
}

pub fn relations(generation: u64) -> RelationIndex {
    RelationIndex {
        index: FIXTURE
            .iter()
            .map(|a| {
                let mut dates_locations: BTreeMap<String, Vec<String>> = a
                    .relations
                    .iter()
                    .map(|(l, d)| ((*l).to_string(), d.iter().map(ToString::to_string).collect()))
                    .collect();
                // Extra key so relation payloads carry the generation too.
                dates_locations.insert(generation_tag(generation), Vec::new());
                RelationEntry {
                    id: a.id,
                    dates_locations,
                }
            })
            .collect(),
    }
}

/// In-memory [`SourceClient`] whose output and failures are scripted by the test.
///
/// Every payload is stamped with the current generation, so a test can bump
/// the generation between refreshes and check which fetch a snapshot came from.
pub struct ScriptedSource {
    generation: AtomicU64,
    failing: Mutex<Option<SourceKind>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            generation: AtomicU64::new(1),
            failing: Mutex::new(None),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn fail_on(&self, kind: Option<SourceKind>) {
        *self.failing.lock().unwrap() = kind;
    }

    /// Bump the generation and return the new value.
    pub fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Total `fetch` calls so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceClient for ScriptedSource {
    async fn fetch(&self, kind: SourceKind) -> Result<SourcePayload, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if *self.failing.lock().unwrap() == Some(kind) {
            return Err(SourceError::fetch(format!("http://scripted/{kind}"), "connection refused"));
        }

        let generation = self.generation.load(Ordering::SeqCst);
        Ok(match kind {
            SourceKind::Artists => SourcePayload::Artists(artists(generation)),
            SourceKind::Locations => SourcePayload::Locations(locations(generation)),
            SourceKind::Dates => SourcePayload::Dates(dates(generation)),
            SourceKind::Relations => SourcePayload::Relations(relations(generation)),
        })
    }
}

pub fn fetcher(source: &Arc<ScriptedSource>) -> AggregateFetcher {
    AggregateFetcher::new(Arc::clone(source) as Arc<dyn SourceClient>)
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
