//! Filter pipeline - category conjunction, text conditions, regex
//! fallback, structural reset behavior

mod common;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use common::{record, seeded_store, tagged_record, visible_titles};
use inkdex::catalog::{
    CatalogStore, Column, CombineLogic, ReadStatus, TextCondition, TextFilter,
};
use inkdex::messages::ChangeNotice;

#[test]
fn test_status_filter_projection() {
    // Progress 0/50/100 cycling means every third record is completed
    let mut store = seeded_store(9);
    store.set_status_filter(Some(ReadStatus::Completed));
    assert_eq!(store.visible_count(), 3);
    assert_eq!(visible_titles(&store), vec!["Entry 2", "Entry 5", "Entry 8"]);

    store.set_status_filter(None);
    assert_eq!(store.visible_count(), 9);
}

#[test]
fn test_tag_filter_any_match() {
    let mut store = CatalogStore::new();
    let now = Instant::now();
    store.append(tagged_record("1", "a", "romance, comedy"), now);
    store.append(tagged_record("2", "b", "drama"), now);
    store.append(tagged_record("3", "c", "comedy"), now);
    store.append(tagged_record("4", "d", ""), now);

    store.set_tag_filter(vec!["comedy".to_string(), "horror".to_string()]);
    assert_eq!(visible_titles(&store), vec!["a", "c"]);

    // Empty tag list clears the category
    store.set_tag_filter(Vec::new());
    assert_eq!(store.visible_count(), 4);
}

#[test]
fn test_two_condition_or_filter() {
    let mut store = CatalogStore::new();
    let now = Instant::now();
    let mut a = record("1", "A Love Story", 0);
    a.author = "Jones".to_string();
    let mut b = record("2", "Something Else", 0);
    b.author = "Smith".to_string();
    let mut c = record("3", "Plain", 0);
    c.author = "Jones".to_string();
    store.append(a, now);
    store.append(b, now);
    store.append(c, now);

    let filter = TextFilter {
        first: TextCondition::new(Column::Title, "love"),
        second: Some(TextCondition::new(Column::Author, "smith")),
        combine: CombineLogic::Or,
        case_sensitive: false,
        use_regex: false,
    };
    store.set_text_filter(Some(&filter));
    assert_eq!(visible_titles(&store), vec!["A Love Story", "Something Else"]);
}

#[test]
fn test_invalid_regex_degrades_to_substring() {
    let mut store = CatalogStore::new();
    let now = Instant::now();
    store.append(record("1", "title [unclosed bracket", 0), now);
    store.append(record("2", "other", 0), now);

    let mut filter = TextFilter::single(TextCondition::new(Column::Title, "[unclosed"));
    filter.use_regex = true;
    store.set_text_filter(Some(&filter));
    assert_eq!(store.visible_count(), 1);
    assert_eq!(store.get(0).unwrap().websign, "1");
}

#[test]
fn test_category_conjunction_with_custom_predicate() {
    let mut store = CatalogStore::new();
    let now = Instant::now();
    let mut a = tagged_record("1", "Wanted", "comedy");
    a.set_progress(100);
    let mut b = tagged_record("2", "Wrong tag", "drama");
    b.set_progress(100);
    let mut c = tagged_record("3", "Wanted too", "comedy");
    c.set_progress(100);
    store.append(a, now);
    store.append(b, now);
    store.append(c, now);

    store.set_status_filter(Some(ReadStatus::Completed));
    store.set_tag_filter(vec!["comedy".to_string()]);
    store.set_custom_filter(Some(Box::new(|_, logical| logical != 2)));
    assert_eq!(visible_titles(&store), vec!["Wanted"]);

    store.clear_filters();
    assert!(!store.filters_active());
    assert_eq!(store.visible_count(), 3);
}

#[test]
fn test_filter_change_is_always_full_reset() {
    let mut store = seeded_store(4);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |notice| sink.borrow_mut().push(notice));

    // A filter that matches every row still resets wholesale
    let filter = TextFilter::single(TextCondition::new(Column::Title, "Entry"));
    store.set_text_filter(Some(&filter));
    assert_eq!(store.visible_count(), 4);
    assert_eq!(*seen.borrow(), vec![ChangeNotice::FullReset]);
}

#[test]
fn test_search_does_not_change_projection() {
    let store = seeded_store(9);
    let filter = TextFilter::single(TextCondition::new(Column::Title, "entry 3"));
    let hits = store.search_visible(&filter);
    assert_eq!(hits, vec![3]);
    assert_eq!(store.visible_count(), 9);
}
