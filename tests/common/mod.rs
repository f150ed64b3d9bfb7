//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::Instant;

use inkdex::catalog::{CatalogStore, Record};

/// Build a record with the fields most tests care about
pub fn record(websign: &str, title: &str, progress: u8) -> Record {
    let mut record = Record {
        websign: websign.to_string(),
        title: title.to_string(),
        ..Record::default()
    };
    record.set_progress(progress);
    record
}

/// Record with a tag list on top of the basics
pub fn tagged_record(websign: &str, title: &str, tags: &str) -> Record {
    Record {
        websign: websign.to_string(),
        title: title.to_string(),
        tag: tags.to_string(),
        ..Record::default()
    }
}

/// Store preloaded with `count` generated records: websigns counting up
/// from 1000, titles "Entry 0".."Entry n", progress cycling 0/50/100
pub fn seeded_store(count: usize) -> CatalogStore {
    let mut store = CatalogStore::new();
    let now = Instant::now();
    for i in 0..count {
        store.append(
            record(
                &format!("{}", 1000 + i),
                &format!("Entry {}", i),
                [0, 50, 100][i % 3],
            ),
            now,
        );
    }
    store
}

/// Titles of the visible rows in projection order
pub fn visible_titles(store: &CatalogStore) -> Vec<String> {
    (0..store.visible_count())
        .map(|i| store.get(i).unwrap().title.clone())
        .collect()
}

/// Websigns of the visible rows in projection order
pub fn visible_websigns(store: &CatalogStore) -> Vec<String> {
    (0..store.visible_count())
        .map(|i| store.get(i).unwrap().websign.clone())
        .collect()
}
