//! Visible-window math
//!
//! Pure geometry: given viewport dimensions, scroll offset, tile size
//! and the visible row count, compute the inclusive range of visible
//! indices worth materializing. The range is padded by whole buffer rows
//! above and below so slow scrolling never hits an unbound card.

/// Tile footprint in the grid, including margins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    pub tile_width: u32,
    pub tile_height: u32,
}

/// What the scroll container currently shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportState {
    pub width: u32,
    pub height: u32,
    pub scroll_y: u32,
}

/// Inclusive range of visible indices to materialize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRange {
    pub first: usize,
    pub last: usize,
}

impl WindowRange {
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    pub fn contains(&self, visible_index: usize) -> bool {
        (self.first..=self.last).contains(&visible_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> {
        self.first..=self.last
    }
}

/// Items per grid row; never less than 1 even when the viewport is
/// narrower than a tile
pub fn columns_per_row(viewport_width: u32, tile_width: u32) -> usize {
    ((viewport_width / tile_width.max(1)) as usize).max(1)
}

/// Compute the buffered visible window, clamped to `0..total`.
///
/// Returns `None` for an empty dataset. Resize and scroll share this
/// path: both reduce to new viewport values in, new range out.
pub fn compute_window(
    viewport: ViewportState,
    metrics: GridMetrics,
    buffer_rows: usize,
    total: usize,
) -> Option<WindowRange> {
    if total == 0 {
        return None;
    }
    let columns = columns_per_row(viewport.width, metrics.tile_width);
    let tile_height = metrics.tile_height.max(1);

    let start_grid_row = (viewport.scroll_y / tile_height) as usize;
    let end_grid_row = ((viewport.scroll_y + viewport.height) / tile_height) as usize;

    let start_grid_row = start_grid_row.saturating_sub(buffer_rows);
    let end_grid_row = end_grid_row + buffer_rows;

    let first = (start_grid_row * columns).min(total - 1);
    let last = ((end_grid_row + 1) * columns - 1).min(total - 1);
    Some(WindowRange { first, last })
}
