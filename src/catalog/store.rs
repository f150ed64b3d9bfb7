//! Catalog store
//!
//! Slot-based record storage with stable logical indices and a derived
//! visible-index projection. Deletion marks a slot dead instead of
//! compacting, so a logical index identifies the same record for its
//! whole lifetime. Filtering and sorting operate on projections; the
//! display cache and duplicate index are maintained here as a
//! consequence of mutations, never independently.
//!
//! All methods take an explicit `now` where debounced work is involved;
//! the owning thread calls `tick` once per dispatch to service due
//! timers.

use std::collections::HashMap;
use std::time::Instant;

use crate::messages::{coalesce_rows, ChangeNotice, Observers, SubscriptionId};

use super::cache::{CacheStats, DisplayCache};
use super::dupes::{
    BatchSessionId, BatchSessions, DuplicateChoice, DuplicateIndex,
};
use super::filter::{CustomFilter, FilterSet, TextFilter};
use super::record::{Column, Purpose, ReadStatus, Record};
use super::sort::{sort_key, SortDirection, SortState};

#[derive(Debug)]
struct Slot {
    record: Record,
    alive: bool,
}

/// Outcome of one batch-import append
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchAppendOutcome {
    Added(usize),
    /// The websign already exists and this session still prompts;
    /// `existing` holds the visible indices currently sharing it
    NeedsConfirmation { existing: Vec<usize> },
}

/// Per-status row counts for sidebar badges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    /// Total live records, regardless of filtering
    pub all: usize,
    pub unread: usize,
    pub reading: usize,
    pub completed: usize,
}

/// Result of an integrity check over the projection
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub issues: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct CatalogStore {
    slots: Vec<Slot>,
    /// Live logical indices in current sequence order; sorting under an
    /// active filter reorders this so later rebuilds stay consistent
    order: Vec<usize>,
    /// visible index → logical index
    visible: Vec<usize>,
    filters: FilterSet,
    sort: SortState,
    cache: DisplayCache,
    dupes: DuplicateIndex,
    batches: BatchSessions,
    observers: Observers,
    filter_rebuilds: u64,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ======================= Ingestion =======================

    /// Append a record, returning its logical index.
    ///
    /// The record joins the visible projection immediately iff it passes
    /// the active filters; hidden appends emit no notice.
    pub fn append(&mut self, record: Record, now: Instant) -> usize {
        let logical = self.slots.len();
        let passes = self.filters.matches(&record, logical);
        let key = record.websign.clone();
        self.slots.push(Slot {
            record,
            alive: true,
        });
        self.order.push(logical);

        if passes {
            let visible_index = self.visible.len();
            self.visible.push(logical);
            if !key.is_empty() {
                self.dupes.record_insert(&key, visible_index, now);
            }
            self.observers
                .emit(ChangeNotice::rows(visible_index, visible_index));
        }
        logical
    }

    /// Append many records, emitting one scoped notice for the visible
    /// run they add
    pub fn batch_append(&mut self, records: Vec<Record>, now: Instant) -> Vec<usize> {
        if records.is_empty() {
            return Vec::new();
        }
        let first_new_visible = self.visible.len();
        let mut logicals = Vec::with_capacity(records.len());
        for record in records {
            let logical = self.slots.len();
            let passes = self.filters.matches(&record, logical);
            let key = record.websign.clone();
            self.slots.push(Slot {
                record,
                alive: true,
            });
            self.order.push(logical);
            if passes {
                let visible_index = self.visible.len();
                self.visible.push(logical);
                if !key.is_empty() {
                    self.dupes.record_insert(&key, visible_index, now);
                }
            }
            logicals.push(logical);
        }
        if self.visible.len() > first_new_visible {
            self.observers
                .emit(ChangeNotice::rows(first_new_visible, self.visible.len() - 1));
        }
        logicals
    }

    /// Replace the whole catalog (import "load" path)
    pub fn load_records(&mut self, records: Vec<Record>, now: Instant) {
        self.slots.clear();
        self.order.clear();
        self.visible.clear();
        self.sort.clear();
        self.dupes.clear();
        for record in records {
            let logical = self.slots.len();
            self.slots.push(Slot {
                record,
                alive: true,
            });
            self.order.push(logical);
        }
        self.rebuild_visible();
        // Arm the consistency pass for the burst of inserts
        if !self.slots.is_empty() {
            self.dupes.record_removal(now);
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.order.clear();
        self.visible.clear();
        self.sort.clear();
        self.filters.clear();
        self.cache.clear();
        self.dupes.clear();
        self.observers.emit(ChangeNotice::FullReset);
    }

    // =================== Batch import sessions ===================

    pub fn begin_batch(&mut self, now: Instant) -> BatchSessionId {
        self.batches.begin(now)
    }

    pub fn end_batch(&mut self, session: BatchSessionId) {
        self.batches.end(session);
    }

    /// Append inside a batch session with duplicate confirmation.
    ///
    /// The first duplicate websign encountered asks for confirmation
    /// unless the session has already answered yes-to-all.
    pub fn batch_append_one(
        &mut self,
        record: Record,
        session: BatchSessionId,
        now: Instant,
    ) -> BatchAppendOutcome {
        if !record.websign.is_empty() && self.batches.should_prompt(session, now) {
            let existing: Vec<usize> = match self.dupes.duplicates_of(&record.websign) {
                Some(indices) => indices.to_vec(),
                None => self
                    .find_visible_by_websign(&record.websign)
                    .into_iter()
                    .collect(),
            };
            if !existing.is_empty() {
                return BatchAppendOutcome::NeedsConfirmation { existing };
            }
        }
        BatchAppendOutcome::Added(self.append(record, now))
    }

    /// Apply the user's answer to a duplicate prompt. Accept and
    /// yes-to-all append the record; reject drops it.
    pub fn resolve_duplicate(
        &mut self,
        record: Record,
        session: BatchSessionId,
        choice: DuplicateChoice,
        now: Instant,
    ) -> Option<usize> {
        self.batches.record_choice(session, choice, now);
        match choice {
            DuplicateChoice::Accept | DuplicateChoice::AcceptAll => {
                Some(self.append(record, now))
            }
            DuplicateChoice::Reject => None,
        }
    }

    fn find_visible_by_websign(&self, key: &str) -> Option<usize> {
        self.visible
            .iter()
            .position(|&logical| self.slots[logical].record.websign == key)
    }

    // ======================= Mutation =======================

    /// Mark the record at a visible index dead. Storage is not
    /// compacted; other logical indices keep their meaning.
    pub fn remove(&mut self, visible_index: usize, now: Instant) -> bool {
        let Some(&logical) = self.visible.get(visible_index) else {
            return false;
        };
        self.slots[logical].alive = false;
        self.order.retain(|&l| l != logical);
        self.visible.remove(visible_index);
        self.cache.clear();
        // Visible indices after the removal all shifted
        self.dupes.record_removal(now);
        self.rebuild_dupes_now();
        self.observers.emit(ChangeNotice::FullReset);
        true
    }

    /// Replace a record wholesale. Visible membership is re-evaluated on
    /// the next filter rebuild, matching the update-then-refilter flow.
    pub fn replace(&mut self, logical_index: usize, record: Record, now: Instant) -> bool {
        let Some(slot) = self.slots.get_mut(logical_index).filter(|s| s.alive) else {
            return false;
        };
        let key_changed = slot.record.websign != record.websign;
        slot.record = record;
        self.cache.purge_row(logical_index);
        if key_changed {
            self.dupes.record_removal(now);
        }
        if let Some(visible_index) = self.visible_position(logical_index) {
            self.observers
                .emit(ChangeNotice::rows(visible_index, visible_index));
        }
        true
    }

    /// Set a single field from text, with tolerant coercion. Setting
    /// `progress` re-derives `read_status` inside the record.
    pub fn set_field(
        &mut self,
        logical_index: usize,
        column: Column,
        value: &str,
        now: Instant,
    ) -> bool {
        let Some(slot) = self.slots.get_mut(logical_index).filter(|s| s.alive) else {
            return false;
        };
        let key_changed =
            column == Column::Websign && slot.record.websign != value;
        slot.record.set_text(column, value);
        self.cache.purge_row(logical_index);
        if key_changed {
            self.dupes.record_removal(now);
        }
        if let Some(visible_index) = self.visible_position(logical_index) {
            self.observers
                .emit(ChangeNotice::rows(visible_index, visible_index));
        }
        true
    }

    /// Set progress directly (context-menu path); re-derives status
    pub fn set_progress(&mut self, logical_index: usize, progress: u8) -> bool {
        let Some(slot) = self.slots.get_mut(logical_index).filter(|s| s.alive) else {
            return false;
        };
        slot.record.set_progress(progress);
        self.cache.purge_row(logical_index);
        if let Some(visible_index) = self.visible_position(logical_index) {
            self.observers
                .emit(ChangeNotice::rows(visible_index, visible_index));
        }
        true
    }

    /// Apply several field updates to one record, emitting one notice
    pub fn update(
        &mut self,
        logical_index: usize,
        fields: &[(Column, String)],
        now: Instant,
    ) -> bool {
        let Some(slot) = self.slots.get_mut(logical_index).filter(|s| s.alive) else {
            return false;
        };
        let mut key_changed = false;
        for (column, value) in fields {
            if *column == Column::Websign && slot.record.websign != *value {
                key_changed = true;
            }
            slot.record.set_text(*column, value);
        }
        self.cache.purge_row(logical_index);
        if key_changed {
            self.dupes.record_removal(now);
        }
        if let Some(visible_index) = self.visible_position(logical_index) {
            self.observers
                .emit(ChangeNotice::rows(visible_index, visible_index));
        }
        true
    }

    /// Update many records; notices are coalesced into consecutive
    /// visible runs. Unknown logical indices are skipped; returns true
    /// when every update applied.
    pub fn batch_update(
        &mut self,
        updates: &HashMap<usize, Vec<(Column, String)>>,
        now: Instant,
    ) -> bool {
        let mut all_applied = true;
        let mut touched = Vec::new();
        let mut key_changed = false;

        for (&logical_index, fields) in updates {
            let Some(slot) = self.slots.get_mut(logical_index).filter(|s| s.alive) else {
                all_applied = false;
                continue;
            };
            for (column, value) in fields {
                if *column == Column::Websign && slot.record.websign != *value {
                    key_changed = true;
                }
                slot.record.set_text(*column, value);
            }
            self.cache.purge_row(logical_index);
            if let Some(visible_index) = self.visible_position(logical_index) {
                touched.push(visible_index);
            }
        }

        if key_changed {
            self.dupes.record_removal(now);
        }
        for notice in coalesce_rows(touched) {
            self.observers.emit(notice);
        }
        all_applied
    }

    // ======================= Access =======================

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Live records, filtered out or not
    pub fn total_live(&self) -> usize {
        self.order.len()
    }

    pub fn hidden_count(&self) -> usize {
        self.total_live() - self.visible_count()
    }

    pub fn get(&self, visible_index: usize) -> Option<&Record> {
        let &logical = self.visible.get(visible_index)?;
        Some(&self.slots[logical].record)
    }

    pub fn get_logical(&self, logical_index: usize) -> Option<&Record> {
        self.slots
            .get(logical_index)
            .filter(|s| s.alive)
            .map(|s| &s.record)
    }

    /// Visible → logical mapping (O(1))
    pub fn logical_of(&self, visible_index: usize) -> Option<usize> {
        self.visible.get(visible_index).copied()
    }

    /// Logical → visible position, None when filtered out
    pub fn visible_position(&self, logical_index: usize) -> Option<usize> {
        self.visible.iter().position(|&l| l == logical_index)
    }

    /// Cached cell value for a visible row
    pub fn value(
        &mut self,
        visible_index: usize,
        column: Column,
        purpose: Purpose,
    ) -> Option<&str> {
        let &logical = self.visible.get(visible_index)?;
        let record = &self.slots[logical].record;
        Some(self.cache.value(logical, column, purpose, record))
    }

    /// Formatted display value for a visible row
    pub fn display_value(&mut self, visible_index: usize, column: Column) -> Option<&str> {
        self.value(visible_index, column, Purpose::Display)
    }

    // ======================= Filtering =======================

    pub fn set_status_filter(&mut self, status: Option<ReadStatus>) {
        self.filters.set_status(status);
        self.rebuild_visible();
    }

    pub fn set_tag_filter(&mut self, tags: Vec<String>) {
        self.filters.set_tags(tags);
        self.rebuild_visible();
    }

    pub fn set_text_filter(&mut self, filter: Option<&TextFilter>) {
        self.filters.set_text(filter);
        self.rebuild_visible();
    }

    pub fn set_custom_filter(&mut self, predicate: Option<CustomFilter>) {
        self.filters.set_custom(predicate);
        self.rebuild_visible();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.rebuild_visible();
    }

    pub fn filters_active(&self) -> bool {
        self.filters.is_active()
    }

    /// One-pass scan of live records in sequence order. Always treated
    /// as structural: caches drop, consumers get a full reset, even when
    /// the visible count is unchanged.
    fn rebuild_visible(&mut self) {
        let slots = &self.slots;
        let filters = &self.filters;
        self.visible = self
            .order
            .iter()
            .copied()
            .filter(|&logical| {
                slots[logical].alive && filters.matches(&slots[logical].record, logical)
            })
            .collect();
        self.filter_rebuilds += 1;
        self.cache.clear();
        self.rebuild_dupes_now();
        tracing::debug!(
            "Rebuilt visible rows: {}/{} visible",
            self.visible.len(),
            self.order.len()
        );
        self.observers.emit(ChangeNotice::FullReset);
    }

    fn rebuild_dupes_now(&mut self) {
        let pairs: Vec<(&str, usize)> = self
            .visible
            .iter()
            .enumerate()
            .map(|(visible_index, &logical)| {
                (self.slots[logical].record.websign.as_str(), visible_index)
            })
            .collect();
        self.dupes.rebuild(pairs);
    }

    // ======================= Sorting =======================

    /// Cycle the sort state for a column: none → ascending → descending
    /// → none. Returning to none restores insertion order.
    pub fn request_sort(&mut self, column: Column) -> Option<SortDirection> {
        let direction = self.sort.cycle(column);
        self.apply_sort(column, direction);
        direction
    }

    /// Explicit sort request (bypasses the cycle)
    pub fn sort(&mut self, column: Column, direction: SortDirection) {
        self.sort.set(column, direction);
        self.apply_sort(column, Some(direction));
    }

    pub fn sort_state(&self) -> Option<(Column, SortDirection)> {
        self.sort.active()
    }

    fn apply_sort(&mut self, column: Column, direction: Option<SortDirection>) {
        match direction {
            Some(direction) => {
                if self.filters.is_active() {
                    // Reorder the live sequence so later rebuilds keep
                    // this ordering
                    let slots = &self.slots;
                    self.order
                        .sort_by_cached_key(|&logical| sort_key(&slots[logical].record, column));
                    if direction == SortDirection::Descending {
                        self.order.reverse();
                    }
                    self.rebuild_visible();
                } else {
                    let slots = &self.slots;
                    self.visible
                        .sort_by_cached_key(|&logical| sort_key(&slots[logical].record, column));
                    if direction == SortDirection::Descending {
                        self.visible.reverse();
                    }
                    self.cache.clear();
                    self.rebuild_dupes_now();
                    self.observers.emit(ChangeNotice::FullReset);
                }
            }
            None => {
                // Back to insertion order
                self.order.sort_unstable();
                self.rebuild_visible();
            }
        }
    }

    // ======================= Duplicates =======================

    pub fn duplicate_index(&self) -> &DuplicateIndex {
        &self.dupes
    }

    pub fn is_flagged_duplicate(&self, visible_index: usize) -> bool {
        self.dupes.is_flagged(visible_index)
    }

    /// Service due debounced work; call once per event-loop dispatch
    pub fn tick(&mut self, now: Instant) {
        if self.dupes.poll_rebuild(now) {
            self.rebuild_dupes_now();
        }
    }

    // ======================= Queries =======================

    /// Non-destructive search over the current projection
    pub fn search_visible(&self, filter: &TextFilter) -> Vec<usize> {
        let compiled = filter.compile();
        self.visible
            .iter()
            .enumerate()
            .filter(|(_, &logical)| compiled.matches(&self.slots[logical].record))
            .map(|(visible_index, _)| visible_index)
            .collect()
    }

    /// Status counts for sidebar badges; `all` counts every live record,
    /// the per-status buckets count visible rows
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts {
            all: self.total_live(),
            ..StatusCounts::default()
        };
        for &logical in &self.visible {
            match self.slots[logical].record.read_status {
                ReadStatus::Unread => counts.unread += 1,
                ReadStatus::Reading => counts.reading += 1,
                ReadStatus::Completed => counts.completed += 1,
            }
        }
        counts
    }

    /// Tag → frequency over visible rows (tag-cloud input)
    pub fn tag_frequencies(&self) -> HashMap<String, usize> {
        let mut frequencies = HashMap::new();
        for &logical in &self.visible {
            for tag in self.slots[logical].record.tags() {
                *frequencies.entry(tag.to_string()).or_insert(0) += 1;
            }
        }
        frequencies
    }

    /// Clone out visible rows in projection order (export collaborator)
    pub fn export_visible(&self) -> Vec<Record> {
        self.visible
            .iter()
            .map(|&logical| self.slots[logical].record.clone())
            .collect()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Structural scans performed so far (debug instrumentation)
    pub fn filter_rebuilds(&self) -> u64 {
        self.filter_rebuilds
    }

    /// Check projection invariants; used by tests and debug assertions
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        for (visible_index, &logical) in self.visible.iter().enumerate() {
            match self.slots.get(logical) {
                None => report.issues.push(format!(
                    "visible row {} references unknown logical index {}",
                    visible_index, logical
                )),
                Some(slot) if !slot.alive => report.issues.push(format!(
                    "visible row {} references dead logical index {}",
                    visible_index, logical
                )),
                Some(_) => {}
            }
        }
        if self.visible.len() > self.order.len() {
            report.issues.push(format!(
                "visible count {} exceeds live count {}",
                self.visible.len(),
                self.order.len()
            ));
        }
        if !self.filters.is_active() && self.visible.len() != self.order.len() {
            report.issues.push(format!(
                "no filters active but {}/{} rows visible",
                self.visible.len(),
                self.order.len()
            ));
        }
        report
    }

    // ===================== Notifications =====================

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(ChangeNotice) + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

/// Filtering capability, for collaborators that only narrow the
/// projection (sidebar, tag cloud)
pub trait Filterable {
    fn set_status_filter(&mut self, status: Option<ReadStatus>);
    fn set_tag_filter(&mut self, tags: Vec<String>);
    fn set_text_filter(&mut self, filter: Option<&TextFilter>);
    fn clear_filters(&mut self);
    fn filters_active(&self) -> bool;
}

impl Filterable for CatalogStore {
    fn set_status_filter(&mut self, status: Option<ReadStatus>) {
        CatalogStore::set_status_filter(self, status);
    }

    fn set_tag_filter(&mut self, tags: Vec<String>) {
        CatalogStore::set_tag_filter(self, tags);
    }

    fn set_text_filter(&mut self, filter: Option<&TextFilter>) {
        CatalogStore::set_text_filter(self, filter);
    }

    fn clear_filters(&mut self) {
        CatalogStore::clear_filters(self);
    }

    fn filters_active(&self) -> bool {
        CatalogStore::filters_active(self)
    }
}

/// Sorting capability (header-click handlers)
pub trait Sortable {
    fn request_sort(&mut self, column: Column) -> Option<SortDirection>;
    fn sort(&mut self, column: Column, direction: SortDirection);
    fn sort_state(&self) -> Option<(Column, SortDirection)>;
}

impl Sortable for CatalogStore {
    fn request_sort(&mut self, column: Column) -> Option<SortDirection> {
        CatalogStore::request_sort(self, column)
    }

    fn sort(&mut self, column: Column, direction: SortDirection) {
        CatalogStore::sort(self, column, direction);
    }

    fn sort_state(&self) -> Option<(Column, SortDirection)> {
        CatalogStore::sort_state(self)
    }
}

/// Bulk-mutation capability (import pipeline)
pub trait BatchMutable {
    fn batch_append(&mut self, records: Vec<Record>, now: Instant) -> Vec<usize>;
    fn batch_update(
        &mut self,
        updates: &HashMap<usize, Vec<(Column, String)>>,
        now: Instant,
    ) -> bool;
}

impl BatchMutable for CatalogStore {
    fn batch_append(&mut self, records: Vec<Record>, now: Instant) -> Vec<usize> {
        CatalogStore::batch_append(self, records, now)
    }

    fn batch_update(
        &mut self,
        updates: &HashMap<usize, Vec<(Column, String)>>,
        now: Instant,
    ) -> bool {
        CatalogStore::batch_update(self, updates, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(websign: &str, title: &str) -> Record {
        Record {
            websign: websign.to_string(),
            title: title.to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn test_append_assigns_logical_indices() {
        let mut store = CatalogStore::new();
        let now = Instant::now();
        assert_eq!(store.append(record("1", "a"), now), 0);
        assert_eq!(store.append(record("2", "b"), now), 1);
        assert_eq!(store.visible_count(), 2);
        assert_eq!(store.get(0).unwrap().title, "a");
    }

    #[test]
    fn test_remove_preserves_logical_indices() {
        let mut store = CatalogStore::new();
        let now = Instant::now();
        store.append(record("1", "a"), now);
        store.append(record("2", "b"), now);
        store.append(record("3", "c"), now);

        assert!(store.remove(1, now));
        assert_eq!(store.visible_count(), 2);
        assert_eq!(store.total_live(), 2);
        // Logical index 2 still means "c"
        assert_eq!(store.get_logical(2).unwrap().title, "c");
        assert!(store.get_logical(1).is_none());
        assert!(!store.remove(5, now));
    }

    #[test]
    fn test_append_time_visibility_check() {
        let mut store = CatalogStore::new();
        let now = Instant::now();
        store.set_status_filter(Some(ReadStatus::Completed));

        let mut done = record("1", "done");
        done.set_progress(100);
        store.append(done, now);
        store.append(record("2", "fresh"), now);

        assert_eq!(store.visible_count(), 1);
        assert_eq!(store.total_live(), 2);
        assert_eq!(store.get(0).unwrap().title, "done");
    }

    #[test]
    fn test_set_field_out_of_range_is_noop() {
        let mut store = CatalogStore::new();
        let now = Instant::now();
        store.append(record("1", "a"), now);
        assert!(!store.set_field(9, Column::Title, "x", now));
        assert!(store.set_field(0, Column::Title, "x", now));
        assert_eq!(store.get(0).unwrap().title, "x");
    }

    #[test]
    fn test_progress_update_derives_status_in_store() {
        let mut store = CatalogStore::new();
        let now = Instant::now();
        store.append(record("1", "a"), now);
        store.set_field(0, Column::Progress, "100", now);
        assert_eq!(store.get(0).unwrap().read_status, ReadStatus::Completed);
        store.set_progress(0, 0);
        assert_eq!(store.get(0).unwrap().read_status, ReadStatus::Unread);
    }

    #[test]
    fn test_validate_clean_store() {
        let mut store = CatalogStore::new();
        let now = Instant::now();
        store.append(record("1", "a"), now);
        store.append(record("1", "b"), now);
        store.remove(0, now);
        assert!(store.validate().is_valid());
    }

    #[test]
    fn test_value_purpose_split() {
        let mut store = CatalogStore::new();
        let now = Instant::now();
        let mut r = record("1", "a");
        r.set_progress(30);
        store.append(r, now);
        assert_eq!(
            store.value(0, Column::Progress, Purpose::Display),
            Some("30%")
        );
        assert_eq!(store.value(0, Column::Progress, Purpose::Raw), Some("30"));
        assert_eq!(store.value(9, Column::Progress, Purpose::Raw), None);
    }
}
