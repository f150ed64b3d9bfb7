//! Card pool
//!
//! Fixed-capacity arena of render cards. Only the visible window's rows
//! are ever bound to a card; scrolling releases cards that left the
//! window and rebinds them to rows that entered it, so memory stays
//! constant no matter how large the catalog grows.

use std::collections::HashMap;

use super::thumbs::ThumbState;
use super::window::WindowRange;

/// Enough cards for the largest practical window (wide viewport, small
/// tiles, two buffer rows each way)
pub const DEFAULT_CAPACITY: usize = 50;

/// Titles longer than this are truncated with an ellipsis on the card
pub const TITLE_LIMIT: usize = 40;

/// Stable handle to a pool slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(usize);

/// Everything a card displays, derived from one visible row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardContent {
    pub title: String,
    pub status_label: String,
    pub progress: u8,
    /// Duplicate-websign highlight
    pub highlighted: bool,
    /// Thumbnail lookup key (record file path)
    pub thumb_key: Option<String>,
}

/// One render card; default state is blank and unbound
#[derive(Debug, Default)]
pub struct Card {
    bound: Option<usize>,
    content: CardContent,
    thumb: ThumbState,
}

impl Card {
    /// Visible index this card currently renders, if any
    pub fn bound_row(&self) -> Option<usize> {
        self.bound
    }

    pub fn content(&self) -> &CardContent {
        &self.content
    }

    pub fn thumb(&self) -> &ThumbState {
        &self.thumb
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    pub capacity: usize,
    pub in_use: usize,
    pub free: usize,
    /// Slots ever created; stays put once a card is released
    pub created: usize,
}

/// Result of a window update: rows that need fresh content
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WindowUpdate {
    /// Rows newly bound, in ascending order
    pub acquired: Vec<usize>,
    pub released: usize,
}

#[derive(Debug)]
pub struct CardPool {
    cards: Vec<Card>,
    free: Vec<CardId>,
    /// visible index → bound card
    bound: HashMap<usize, CardId>,
    capacity: usize,
}

impl Default for CardPool {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl CardPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            cards: Vec::new(),
            free: Vec::new(),
            bound: HashMap::new(),
            capacity,
        }
    }

    /// Bind a card to a visible row. Re-acquiring a bound row returns
    /// the same card; an exhausted pool returns `None` and the caller
    /// skips the row until the window shrinks.
    pub fn acquire(&mut self, visible_index: usize) -> Option<CardId> {
        if let Some(&id) = self.bound.get(&visible_index) {
            return Some(id);
        }
        let id = match self.free.pop() {
            Some(id) => id,
            None if self.cards.len() < self.capacity => {
                let id = CardId(self.cards.len());
                self.cards.push(Card::default());
                id
            }
            None => {
                tracing::warn!(
                    "Card pool exhausted at capacity {}, row {} left unbound",
                    self.capacity,
                    visible_index
                );
                return None;
            }
        };
        self.cards[id.0].bound = Some(visible_index);
        self.bound.insert(visible_index, id);
        Some(id)
    }

    /// Unbind the card for a row and blank it so stale content can never
    /// show through the next binding. Unbound rows are a no-op.
    pub fn release(&mut self, visible_index: usize) -> bool {
        let Some(id) = self.bound.remove(&visible_index) else {
            return false;
        };
        let card = &mut self.cards[id.0];
        card.bound = None;
        card.content = CardContent::default();
        card.thumb = ThumbState::Empty;
        self.free.push(id);
        true
    }

    /// Reconcile bindings with a new window: release rows that left,
    /// acquire rows that entered. Calling twice with the same window
    /// changes nothing.
    pub fn update_window(&mut self, range: Option<WindowRange>) -> WindowUpdate {
        let mut update = WindowUpdate::default();

        let stale: Vec<usize> = self
            .bound
            .keys()
            .copied()
            .filter(|&row| range.map_or(true, |r| !r.contains(row)))
            .collect();
        for row in stale {
            self.release(row);
            update.released += 1;
        }

        if let Some(range) = range {
            for row in range.iter() {
                if !self.bound.contains_key(&row) && self.acquire(row).is_some() {
                    update.acquired.push(row);
                }
            }
        }
        update
    }

    /// Drop every binding (full reset path)
    pub fn release_all(&mut self) {
        let rows: Vec<usize> = self.bound.keys().copied().collect();
        for row in rows {
            self.release(row);
        }
    }

    pub fn card_for(&self, visible_index: usize) -> Option<&Card> {
        self.bound.get(&visible_index).map(|&id| &self.cards[id.0])
    }

    pub fn set_content(&mut self, visible_index: usize, content: CardContent) -> bool {
        match self.bound.get(&visible_index) {
            Some(&id) => {
                self.cards[id.0].content = content;
                true
            }
            None => false,
        }
    }

    pub fn set_thumb(&mut self, visible_index: usize, state: ThumbState) -> bool {
        match self.bound.get(&visible_index) {
            Some(&id) => {
                self.cards[id.0].thumb = state;
                true
            }
            None => false,
        }
    }

    /// Bound rows in ascending order
    pub fn bound_rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.bound.keys().copied().collect();
        rows.sort_unstable();
        rows
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            capacity: self.capacity,
            in_use: self.bound.len(),
            free: self.free.len(),
            created: self.cards.len(),
        }
    }
}

/// Truncate a card title at a char boundary, appending an ellipsis
pub fn truncate_title(title: &str, limit: usize) -> String {
    if title.chars().count() <= limit {
        return title.to_string();
    }
    let cut: String = title.chars().take(limit.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
