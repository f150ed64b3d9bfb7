//! Card grid
//!
//! Composes the window math, the card pool and a thumbnail provider
//! into the render-side consumer of catalog change notices. The host
//! owns both the grid and the store and forwards notices explicitly;
//! the grid never holds a reference back into the store.

use crate::catalog::record::Record;
use crate::catalog::store::CatalogStore;
use crate::messages::ChangeNotice;

use super::pool::{truncate_title, CardContent, CardPool, PoolStats, TITLE_LIMIT};
use super::thumbs::{ThumbState, ThumbnailProvider};
use super::window::{compute_window, GridMetrics, ViewportState, WindowRange};

/// Buffer rows rendered above and below the viewport
pub const DEFAULT_BUFFER_ROWS: usize = 2;

/// What the grid needs from its data source. The catalog store is the
/// production implementation; tests can substitute a fixture.
pub trait RowSource {
    fn visible_count(&self) -> usize;
    fn record(&self, visible_index: usize) -> Option<&Record>;
    fn is_duplicate(&self, visible_index: usize) -> bool;
}

impl RowSource for CatalogStore {
    fn visible_count(&self) -> usize {
        CatalogStore::visible_count(self)
    }

    fn record(&self, visible_index: usize) -> Option<&Record> {
        self.get(visible_index)
    }

    fn is_duplicate(&self, visible_index: usize) -> bool {
        self.is_flagged_duplicate(visible_index)
    }
}

#[derive(Debug)]
pub struct CardGrid<P: ThumbnailProvider> {
    pool: CardPool,
    viewport: ViewportState,
    metrics: GridMetrics,
    buffer_rows: usize,
    window: Option<WindowRange>,
    thumbs: P,
}

impl<P: ThumbnailProvider> CardGrid<P> {
    pub fn new(metrics: GridMetrics, pool_capacity: usize, thumbs: P) -> Self {
        Self {
            pool: CardPool::new(pool_capacity),
            viewport: ViewportState::default(),
            metrics,
            buffer_rows: DEFAULT_BUFFER_ROWS,
            window: None,
            thumbs,
        }
    }

    pub fn with_buffer_rows(mut self, buffer_rows: usize) -> Self {
        self.buffer_rows = buffer_rows;
        self
    }

    /// Resize or scroll: recompute the window and reconcile bindings
    pub fn set_viewport(&mut self, viewport: ViewportState, source: &impl RowSource) {
        self.viewport = viewport;
        self.refresh_window(source);
    }

    pub fn scroll_to(&mut self, scroll_y: u32, source: &impl RowSource) {
        self.viewport.scroll_y = scroll_y;
        self.refresh_window(source);
    }

    /// React to a catalog change. Scoped row notices refresh only the
    /// bound cards they intersect; anything structural rebinds from
    /// scratch.
    pub fn on_change(&mut self, notice: ChangeNotice, source: &impl RowSource) {
        match notice {
            ChangeNotice::FullReset => {
                self.pool.release_all();
                self.window = None;
                self.refresh_window(source);
            }
            ChangeNotice::Rows { start, end } => {
                let Some(window) = self.window else { return };
                let first = start.max(window.first);
                let last = end.min(window.last);
                for row in first..=last {
                    self.bind_row(row, source);
                }
            }
        }
    }

    fn refresh_window(&mut self, source: &impl RowSource) {
        let window = compute_window(
            self.viewport,
            self.metrics,
            self.buffer_rows,
            source.visible_count(),
        );
        if window == self.window && window.is_some() {
            return;
        }
        self.window = window;
        let update = self.pool.update_window(window);
        for row in update.acquired {
            self.bind_row(row, source);
        }
    }

    fn bind_row(&mut self, row: usize, source: &impl RowSource) {
        let Some(record) = source.record(row) else { return };
        let content = CardContent {
            title: truncate_title(&record.title, TITLE_LIMIT),
            status_label: record.read_status.label().to_string(),
            progress: record.progress,
            highlighted: source.is_duplicate(row),
            thumb_key: record.file_path.clone(),
        };
        let thumb = match content.thumb_key.as_deref() {
            Some(key) => self.thumbs.request(key),
            None => ThumbState::Missing,
        };
        self.pool.set_content(row, content);
        self.pool.set_thumb(row, thumb);
    }

    pub fn window(&self) -> Option<WindowRange> {
        self.window
    }

    pub fn pool(&self) -> &CardPool {
        &self.pool
    }

    pub fn pool_stats(&self) -> PoolStats {
        self.pool.stats()
    }

    pub fn thumbs_mut(&mut self) -> &mut P {
        &mut self.thumbs
    }
}
