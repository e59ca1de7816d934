use criterion::{black_box, criterion_group, criterion_main, Criterion};
use groupie::domain::models::{Aggregate, Artist, LocationEntry};
use groupie::services::query_engine::{search, suggest};
use groupie::FilterCriteria;

const CITIES: &[&str] = &["london-uk", "berlin-germany", "osaka-japan", "seattle-usa", "lyon-france"];

fn catalog(size: u32) -> Aggregate {
    let mut aggregate = Aggregate::default();
    for id in 1..=size {
        aggregate.artists.push(Artist {
            id,
            image: String::new(),
            name: format!("Band {id}"),
            members: (0..=id % 6).map(|m| format!("Member {id}-{m}")).collect(),
            creation_date: 1950 + i32::try_from(id % 70).unwrap_or(0),
            first_album: format!("01-01-{}", 1955 + id % 65),
            locations: String::new(),
            concert_dates: String::new(),
            relations: String::new(),
        });
        aggregate.locations.index.push(LocationEntry {
            id,
            locations: CITIES.iter().take((id % 5 + 1) as usize).map(ToString::to_string).collect(),
            dates: String::new(),
        });
    }
    aggregate
}

fn bench_search(c: &mut Criterion) {
    let aggregate = catalog(500);
    let unrestricted = FilterCriteria::unrestricted();
    let filtered = FilterCriteria::unrestricted()
        .with_creation_years(1970, 1990)
        .with_member_counts([2, 3, 4])
        .with_locations(["germany"]);

    c.bench_function("search_text", |b| {
        b.iter(|| search(black_box(&aggregate), black_box("member 4"), &unrestricted));
    });
    c.bench_function("search_year", |b| {
        b.iter(|| search(black_box(&aggregate), black_box("1975"), &unrestricted));
    });
    c.bench_function("search_filtered", |b| {
        b.iter(|| search(black_box(&aggregate), black_box(""), &filtered));
    });
}

fn bench_suggest(c: &mut Criterion) {
    let aggregate = catalog(500);

    c.bench_function("suggest_location", |b| {
        b.iter(|| suggest(black_box(&aggregate), black_box("lon")));
    });
    c.bench_function("suggest_year", |b| {
        b.iter(|| suggest(black_box(&aggregate), black_box("19")));
    });
}

criterion_group!(benches, bench_search, bench_suggest);
criterion_main!(benches);
