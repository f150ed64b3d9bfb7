//! Virtualized catalog: record storage, filtering, sorting, display
//! caching and duplicate tracking

pub mod cache;
pub mod dupes;
pub mod filter;
pub mod io;
pub mod record;
pub mod sort;
pub mod store;

pub use cache::{CacheStats, DisplayCache};
pub use dupes::{BatchSessionId, BatchSessions, DuplicateChoice, DuplicateIndex};
pub use filter::{CombineLogic, CustomFilter, FilterSet, TextCondition, TextFilter};
pub use io::{load_catalog, save_catalog};
pub use record::{Column, Purpose, ReadStatus, Record};
pub use sort::{SortDirection, SortKey, SortState};
pub use store::{
    BatchAppendOutcome, BatchMutable, CatalogStore, Filterable, Sortable, StatusCounts,
    ValidationReport,
};
