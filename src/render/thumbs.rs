//! Thumbnail plumbing
//!
//! Cards display a cover thumbnail keyed by the record's file path.
//! Loading is the host's concern; the engine only tracks per-card state
//! and pulls from whatever `ThumbnailProvider` the grid was built with.

/// Opaque handle to a decoded cover image held by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub key: String,
    pub width: u32,
    pub height: u32,
}

/// Per-card thumbnail state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ThumbState {
    /// Card unbound or not yet requested
    #[default]
    Empty,
    /// Requested, host still loading
    Pending,
    Ready(Thumbnail),
    /// No source available (record has no file path, or load failed)
    Missing,
}

/// Source of thumbnails, implemented by the host
pub trait ThumbnailProvider {
    /// Request the thumbnail for `key`. Pending responses are re-polled
    /// on the next window update for the same card.
    fn request(&mut self, key: &str) -> ThumbState;
}

/// Provider for hosts without cover art; everything is missing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoThumbnails;

impl ThumbnailProvider for NoThumbnails {
    fn request(&mut self, _key: &str) -> ThumbState {
        ThumbState::Missing
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;

    /// In-memory provider for tests: preloaded keys are ready, the rest
    /// stay pending until `complete` is called
    #[derive(Debug, Default)]
    pub struct MemoryThumbnails {
        ready: HashMap<String, Thumbnail>,
        pub requests: Vec<String>,
    }

    impl MemoryThumbnails {
        pub fn complete(&mut self, key: &str, width: u32, height: u32) {
            self.ready.insert(
                key.to_string(),
                Thumbnail {
                    key: key.to_string(),
                    width,
                    height,
                },
            );
        }
    }

    impl ThumbnailProvider for MemoryThumbnails {
        fn request(&mut self, key: &str) -> ThumbState {
            self.requests.push(key.to_string());
            match self.ready.get(key) {
                Some(thumb) => ThumbState::Ready(thumb.clone()),
                None => ThumbState::Pending,
            }
        }
    }
}
