//! Display value cache
//!
//! Memoizes formatted cell values so repeatedly rendered rows don't
//! re-format during scrolling. Holds no correctness-critical state: it is
//! always safe to drop wholesale, and the store does exactly that on
//! every structural change.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::record::{Column, Purpose, Record};

/// Hit/miss counters, surfaced for debug logging
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Memo map keyed by (logical index, column, purpose)
#[derive(Debug, Default)]
pub struct DisplayCache {
    entries: HashMap<(usize, Column, Purpose), String>,
    stats: CacheStats,
}

/// Compute the value for one cell
fn format_value(record: &Record, column: Column, purpose: Purpose) -> String {
    match purpose {
        Purpose::Raw => record.raw_text(column).into_owned(),
        Purpose::Display => match column {
            Column::Progress => format!("{}%", record.progress),
            Column::ReadStatus => record.read_status.label().to_string(),
            _ => record.raw_text(column).into_owned(),
        },
    }
}

impl DisplayCache {
    /// Cached read; computes and stores on miss
    pub fn value(
        &mut self,
        logical_index: usize,
        column: Column,
        purpose: Purpose,
        record: &Record,
    ) -> &str {
        match self.entries.entry((logical_index, column, purpose)) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry.insert(format_value(record, column, purpose))
            }
        }
    }

    /// Drop every entry for one logical index, all columns and purposes
    pub fn purge_row(&mut self, logical_index: usize) {
        self.entries.retain(|&(row, _, _), _| row != logical_index);
    }

    /// Wholesale clear (structural change)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
