//! Store invariants - stable logical indices, projection consistency,
//! cache invalidation, change notices

mod common;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Instant;

use common::{record, seeded_store, visible_titles};
use inkdex::catalog::{
    BatchMutable, CatalogStore, Column, Filterable, Purpose, ReadStatus, Sortable,
};
use inkdex::messages::ChangeNotice;
use inkdex::render::RowSource;

#[test]
fn test_logical_indices_survive_removal() {
    let mut store = seeded_store(5);
    let now = Instant::now();

    // Remember the logical index of the last row, then delete the middle
    let last_logical = store.logical_of(4).unwrap();
    assert!(store.remove(2, now));

    assert_eq!(store.visible_count(), 4);
    assert_eq!(store.get_logical(last_logical).unwrap().title, "Entry 4");
    // The dead slot is never reused
    assert!(store.get_logical(2).is_none());

    let next = store.append(record("2000", "Late arrival", 0), now);
    assert_eq!(next, 5);
}

#[test]
fn test_visible_indices_always_dense() {
    let mut store = seeded_store(10);
    let now = Instant::now();
    store.remove(3, now);
    store.remove(0, now);
    store.set_status_filter(Some(ReadStatus::Completed));

    for i in 0..store.visible_count() {
        assert!(store.get(i).is_some());
    }
    assert!(store.get(store.visible_count()).is_none());
    assert!(store.validate().is_valid());
}

#[test]
fn test_field_update_invalidates_cache() {
    let mut store = seeded_store(3);
    let now = Instant::now();

    assert_eq!(store.display_value(0, Column::Title), Some("Entry 0"));
    assert_eq!(store.display_value(1, Column::Title), Some("Entry 1"));

    let logical = store.logical_of(1).unwrap();
    store.set_field(logical, Column::Title, "Renamed", now);
    assert_eq!(store.display_value(1, Column::Title), Some("Renamed"));

    // Other rows keep their cached values
    assert_eq!(store.display_value(0, Column::Title), Some("Entry 0"));
    assert_eq!(store.cache_stats().hits, 1);
    assert_eq!(store.cache_stats().misses, 3);
}

#[test]
fn test_progress_update_derives_read_status() {
    let mut store = CatalogStore::new();
    let now = Instant::now();
    store.append(record("1", "a", 0), now);

    store.set_field(0, Column::Progress, "100%", now);
    assert_eq!(store.get(0).unwrap().read_status, ReadStatus::Completed);
    assert_eq!(
        store.value(0, Column::ReadStatus, Purpose::Display),
        Some("Completed")
    );

    store.set_field(0, Column::Progress, "garbage", now);
    assert_eq!(store.get(0).unwrap().progress, 0);
    assert_eq!(store.get(0).unwrap().read_status, ReadStatus::Unread);
}

#[test]
fn test_batch_update_coalesces_notices() {
    let mut store = seeded_store(10);
    let now = Instant::now();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |notice| sink.borrow_mut().push(notice));

    let mut updates = HashMap::new();
    for logical in [2usize, 3, 4, 8] {
        updates.insert(logical, vec![(Column::Author, "Someone".to_string())]);
    }
    assert!(store.batch_update(&updates, now));

    assert_eq!(
        *seen.borrow(),
        vec![ChangeNotice::rows(2, 4), ChangeNotice::rows(8, 8)]
    );
}

#[test]
fn test_append_emits_scoped_notice() {
    let mut store = seeded_store(3);
    let now = Instant::now();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = store.subscribe(move |notice| sink.borrow_mut().push(notice));

    store.append(record("9", "New", 0), now);
    assert_eq!(*seen.borrow(), vec![ChangeNotice::rows(3, 3)]);

    assert!(store.unsubscribe(id));
    store.append(record("10", "Unseen", 0), now);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_hidden_append_is_silent() {
    let mut store = CatalogStore::new();
    let now = Instant::now();
    store.set_status_filter(Some(ReadStatus::Completed));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |notice| sink.borrow_mut().push(notice));

    store.append(record("1", "Unread thing", 0), now);
    assert!(seen.borrow().is_empty());
    assert_eq!(store.visible_count(), 0);
    assert_eq!(store.total_live(), 1);
}

#[test]
fn test_load_records_resets_everything() {
    let mut store = seeded_store(5);
    let now = Instant::now();
    store.set_status_filter(Some(ReadStatus::Completed));

    store.load_records(
        vec![record("1", "x", 100), record("2", "y", 0)],
        now,
    );
    // Filter survives the reload
    assert_eq!(store.total_live(), 2);
    assert_eq!(visible_titles(&store), vec!["x"]);

    store.clear_filters();
    assert_eq!(store.visible_count(), 2);
}

#[test]
fn test_export_visible_respects_projection() {
    let mut store = seeded_store(6);
    store.set_status_filter(Some(ReadStatus::Completed));
    let exported = store.export_visible();
    assert_eq!(exported.len(), store.visible_count());
    assert!(exported
        .iter()
        .all(|r| r.read_status == ReadStatus::Completed));
}

#[test]
fn test_capability_traits_compose() {
    // Collaborators see only the capability they need
    fn narrow_to_completed(model: &mut impl Filterable) {
        model.set_status_filter(Some(ReadStatus::Completed));
    }
    fn sort_by_title(model: &mut impl Sortable) {
        model.request_sort(Column::Title);
    }
    fn import(model: &mut impl BatchMutable, records: Vec<inkdex::Record>) -> Vec<usize> {
        model.batch_append(records, Instant::now())
    }

    let mut store = CatalogStore::new();
    import(
        &mut store,
        vec![record("2", "b", 100), record("1", "a", 100), record("3", "c", 0)],
    );
    narrow_to_completed(&mut store);
    sort_by_title(&mut store);

    assert_eq!(visible_titles(&store), vec!["a", "b"]);

    // The render-facing capability is read-only
    fn count_rows(source: &impl RowSource) -> usize {
        source.visible_count()
    }
    assert_eq!(count_rows(&store), 2);
}

#[test]
fn test_status_counts_and_tag_frequencies() {
    let mut store = CatalogStore::new();
    let now = Instant::now();
    store.append(record("1", "a", 0), now);
    store.append(record("2", "b", 40), now);
    store.append(record("3", "c", 100), now);
    store.set_field(0, Column::Tag, "romance, comedy", now);
    store.set_field(1, Column::Tag, "comedy", now);

    let counts = store.status_counts();
    assert_eq!(counts.all, 3);
    assert_eq!(counts.unread, 1);
    assert_eq!(counts.reading, 1);
    assert_eq!(counts.completed, 1);

    let tags = store.tag_frequencies();
    assert_eq!(tags.get("comedy"), Some(&2));
    assert_eq!(tags.get("romance"), Some(&1));

    // Counts follow the projection
    store.set_status_filter(Some(ReadStatus::Unread));
    let counts = store.status_counts();
    assert_eq!(counts.all, 3);
    assert_eq!(counts.unread, 1);
    assert_eq!(counts.completed, 0);
}
