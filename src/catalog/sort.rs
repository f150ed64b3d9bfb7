//! Sort engine
//!
//! One column is sorted at a time, cycling none → ascending → descending
//! → none on repeated requests. Key extraction is type-aware per column;
//! malformed numeric fields fall back to 0 instead of erroring.

use std::sync::LazyLock;

use regex::Regex;

use super::record::{Column, Record};

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Width used to zero-pad numeric-looking string values so numeric and
/// lexicographic orderings agree within a column
const NUMERIC_PAD_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current sort state; `None` means insertion order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(Column, SortDirection)>,
}

impl SortState {
    /// Advance the cycle for a sort request on `column`.
    ///
    /// Same column: ascending → descending → none. A different column
    /// resets to ascending on that column.
    pub fn cycle(&mut self, column: Column) -> Option<SortDirection> {
        let next = match self.active {
            Some((active, SortDirection::Ascending)) if active == column => {
                Some(SortDirection::Descending)
            }
            Some((active, SortDirection::Descending)) if active == column => None,
            _ => Some(SortDirection::Ascending),
        };
        self.active = next.map(|direction| (column, direction));
        next
    }

    /// Set an explicit column/direction (bypassing the cycle)
    pub fn set(&mut self, column: Column, direction: SortDirection) {
        self.active = Some((column, direction));
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<(Column, SortDirection)> {
        self.active
    }
}

/// Comparable key extracted from one cell
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Int(i64),
    Ordinal(u8),
    Text(String),
}

/// Extract the sort key for a record in the given column
pub fn sort_key(record: &Record, column: Column) -> SortKey {
    match column {
        Column::Websign => SortKey::Int(websign_key(&record.websign)),
        Column::Progress => SortKey::Int(i64::from(record.progress)),
        Column::ReadStatus => SortKey::Ordinal(record.read_status.ordinal()),
        _ => SortKey::Text(text_key(&record.raw_text(column))),
    }
}

/// Websign sorts numerically: parse the whole value, else the first run
/// of digits, else 0
fn websign_key(value: &str) -> i64 {
    let trimmed = value.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return n;
    }
    DIGIT_RUN
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .unwrap_or(0)
}

/// Case-insensitive string key; purely numeric values are zero-padded so
/// "9" sorts before "10"
fn text_key(value: &str) -> String {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        format!("{:0>width$}", trimmed, width = NUMERIC_PAD_WIDTH)
    } else {
        trimmed.to_lowercase()
    }
}
