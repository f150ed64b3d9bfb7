//! Duplicate websign index
//!
//! Secondary index from websign to the visible indices sharing it, plus
//! highlight marks for duplicate rows. Two maintenance strategies run
//! together: an incremental fast path on insert, and a debounced full
//! rebuild that restores consistency after removals or structural
//! reshuffles. Batch imports get a per-session duplicate-confirmation
//! flow with yes-to-all suppression.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::debounce::Debouncer;

/// Delay before a scheduled full rebuild fires; mutations within the
/// window collapse into one rebuild
pub const REBUILD_DELAY: Duration = Duration::from_millis(500);

/// Sessions that were never explicitly ended expire after this long
pub const BATCH_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug)]
pub struct DuplicateIndex {
    /// key → visible indices, singletons included; the public surface
    /// only ever exposes keys held by two or more rows
    entries: HashMap<String, Vec<usize>>,
    /// Visible indices marked for duplicate highlight
    flagged: HashSet<usize>,
    rebuild: Debouncer,
}

impl Default for DuplicateIndex {
    fn default() -> Self {
        Self::new(REBUILD_DELAY)
    }
}

impl DuplicateIndex {
    pub fn new(rebuild_delay: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            flagged: HashSet::new(),
            rebuild: Debouncer::new(rebuild_delay),
        }
    }

    /// Incremental fast path for a newly inserted row.
    ///
    /// A 1→2 transition flags both holders; at ≥2 only the new row is
    /// flagged (the earlier ones already are). Also schedules the
    /// debounced rebuild.
    pub fn record_insert(&mut self, key: &str, visible_index: usize, now: Instant) {
        let indices = self.entries.entry(key.to_string()).or_default();
        indices.push(visible_index);
        if indices.len() == 2 {
            self.flagged.extend(indices.iter().copied());
        } else if indices.len() > 2 {
            self.flagged.insert(visible_index);
        }
        self.rebuild.schedule(now);
    }

    /// Removals reshuffle visible indices; only the rebuild can fix the
    /// map, so just (re)arm the timer
    pub fn record_removal(&mut self, now: Instant) {
        self.rebuild.schedule(now);
    }

    pub fn rebuild_pending(&self) -> bool {
        self.rebuild.is_pending()
    }

    /// True once the debounced rebuild is due; the caller then feeds
    /// `rebuild` the current live (key, visible index) pairs
    pub fn poll_rebuild(&mut self, now: Instant) -> bool {
        self.rebuild.poll(now)
    }

    /// Recompute the whole map and highlight marks from scratch
    pub fn rebuild<'a>(&mut self, live: impl IntoIterator<Item = (&'a str, usize)>) {
        self.entries.clear();
        self.flagged.clear();
        for (key, visible_index) in live {
            if key.is_empty() {
                continue;
            }
            self.entries
                .entry(key.to_string())
                .or_default()
                .push(visible_index);
        }
        for indices in self.entries.values() {
            if indices.len() > 1 {
                self.flagged.extend(indices.iter().copied());
            }
        }
        tracing::debug!(
            "Rebuilt duplicate index: {} keys, {} flagged rows",
            self.entries.len(),
            self.flagged.len()
        );
    }

    /// Visible indices sharing `key`, only when at least two do
    pub fn duplicates_of(&self, key: &str) -> Option<&[usize]> {
        self.entries
            .get(key)
            .filter(|indices| indices.len() > 1)
            .map(Vec::as_slice)
    }

    /// All keys currently held by two or more rows
    pub fn iter_duplicates(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.entries
            .iter()
            .filter(|(_, indices)| indices.len() > 1)
            .map(|(key, indices)| (key.as_str(), indices.as_slice()))
    }

    pub fn is_flagged(&self, visible_index: usize) -> bool {
        self.flagged.contains(&visible_index)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.flagged.clear();
        self.rebuild.cancel();
    }
}

/// Session handle for a batch import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchSessionId(u64);

/// Caller-supplied answer to a duplicate prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateChoice {
    Accept,
    Reject,
    /// Accept this and every later duplicate in the same session
    AcceptAll,
}

#[derive(Debug)]
struct SessionState {
    started: Instant,
    skip_prompts: bool,
}

/// Per-session duplicate-confirmation tracking.
///
/// Sessions end explicitly via `end`, or expire after a TTL so a caller
/// that forgets to end one cannot grow the map without bound.
#[derive(Debug)]
pub struct BatchSessions {
    next_id: u64,
    ttl: Duration,
    sessions: HashMap<BatchSessionId, SessionState>,
}

impl Default for BatchSessions {
    fn default() -> Self {
        Self::new(BATCH_SESSION_TTL)
    }
}

impl BatchSessions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            next_id: 0,
            ttl,
            sessions: HashMap::new(),
        }
    }

    pub fn begin(&mut self, now: Instant) -> BatchSessionId {
        self.prune(now);
        let id = BatchSessionId(self.next_id);
        self.next_id += 1;
        self.sessions.insert(
            id,
            SessionState {
                started: now,
                skip_prompts: false,
            },
        );
        id
    }

    /// Ending an unknown or expired session is a no-op
    pub fn end(&mut self, id: BatchSessionId) {
        self.sessions.remove(&id);
    }

    /// Whether a duplicate encountered in this session should prompt.
    /// Unknown/expired sessions prompt (the safe default).
    pub fn should_prompt(&mut self, id: BatchSessionId, now: Instant) -> bool {
        self.prune(now);
        self.sessions
            .get(&id)
            .map(|state| !state.skip_prompts)
            .unwrap_or(true)
    }

    pub fn record_choice(&mut self, id: BatchSessionId, choice: DuplicateChoice, now: Instant) {
        self.prune(now);
        if choice == DuplicateChoice::AcceptAll {
            if let Some(state) = self.sessions.get_mut(&id) {
                state.skip_prompts = true;
            }
        }
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.sessions
            .retain(|_, state| now.duration_since(state.started) < ttl);
    }
}
