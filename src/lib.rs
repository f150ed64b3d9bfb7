//! inkdex - virtualized catalog engine
//!
//! Core data and rendering logic for a comic catalog manager: a
//! slot-based record store with stable logical indices, a filtered and
//! sorted visible projection, duplicate tracking, and a fixed-capacity
//! card pool that materializes only the rows in the scroll window.
//!
//! Everything runs single-threaded and cooperative: debounced work is
//! driven by explicit `tick(now)` calls from the host's event loop.

pub mod catalog;
pub mod config;
pub mod config_paths;
pub mod debounce;
pub mod messages;
pub mod render;
pub mod tracing;

// Re-export commonly used types
pub use catalog::{CatalogStore, Column, Purpose, ReadStatus, Record};
pub use config::EngineConfig;
pub use messages::ChangeNotice;
pub use render::{CardGrid, CardPool, GridMetrics, ViewportState};
