//! Change notifications
//!
//! Structural changes in the catalog are broadcast to registered
//! observers (render views, sidebar counters). A notice is either a
//! scoped visible-index range — "only these rows changed" — or a full
//! reset — "re-derive everything". Filter and sort changes are always a
//! full reset, even when the visible count happens to stay the same.

use std::fmt;

/// What changed, from a consumer's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeNotice {
    /// Projection invalidated wholesale (filter/sort/load/remove)
    FullReset,
    /// Inclusive visible-index range whose content changed in place
    Rows { start: usize, end: usize },
}

impl ChangeNotice {
    pub fn rows(start: usize, end: usize) -> Self {
        ChangeNotice::Rows { start, end }
    }
}

/// Coalesce a set of changed visible indices into the fewest scoped
/// notices by grouping consecutive runs
pub fn coalesce_rows(mut rows: Vec<usize>) -> Vec<ChangeNotice> {
    if rows.is_empty() {
        return Vec::new();
    }
    rows.sort_unstable();
    rows.dedup();

    let mut notices = Vec::new();
    let mut start = rows[0];
    let mut end = rows[0];
    for &row in &rows[1..] {
        if row == end + 1 {
            end = row;
        } else {
            notices.push(ChangeNotice::rows(start, end));
            start = row;
            end = row;
        }
    }
    notices.push(ChangeNotice::rows(start, end));
    notices
}

/// Handle returned by `Observers::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Callback registry replacing signal/slot wiring.
///
/// Observers receive notices by value and must not call back into the
/// emitting store (single-threaded cooperative model).
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(ChangeNotice)>)>,
}

impl Observers {
    pub fn subscribe(&mut self, callback: impl FnMut(ChangeNotice) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription; unknown ids are a no-op
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn emit(&mut self, notice: ChangeNotice) {
        for (_, callback) in &mut self.subscribers {
            callback(notice);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
