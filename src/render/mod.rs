//! Windowed rendering: visible-window math, the card pool and the grid
//! that wires them to catalog change notices

pub mod pool;
pub mod thumbs;
pub mod view;
pub mod window;

pub use pool::{Card, CardContent, CardId, CardPool, PoolStats, DEFAULT_CAPACITY};
pub use thumbs::{NoThumbnails, ThumbState, Thumbnail, ThumbnailProvider};
pub use view::{CardGrid, RowSource, DEFAULT_BUFFER_ROWS};
pub use window::{columns_per_row, compute_window, GridMetrics, ViewportState, WindowRange};
