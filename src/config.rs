//! Engine configuration persistence
//!
//! Tunables live in `~/.config/inkdex/config.yaml`; window geometry is
//! saved separately to `geometry.json` through a debounced writer so a
//! drag-resize burst produces a single disk write.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::debounce::Debouncer;
use crate::render::pool::DEFAULT_CAPACITY;
use crate::render::view::DEFAULT_BUFFER_ROWS;
use crate::render::window::GridMetrics;

/// Engine tunables that persist across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_tile_width")]
    pub tile_width: u32,
    #[serde(default = "default_tile_height")]
    pub tile_height: u32,
    /// Extra grid rows materialized above and below the viewport
    #[serde(default = "default_buffer_rows")]
    pub buffer_rows: usize,
    #[serde(default = "default_pool_capacity")]
    pub pool_capacity: usize,
    /// Debounce delay for duplicate-index rebuilds, in milliseconds
    #[serde(default = "default_rebuild_delay_ms")]
    pub rebuild_delay_ms: u64,
    /// Debounce delay for geometry persistence, in milliseconds
    #[serde(default = "default_geometry_save_delay_ms")]
    pub geometry_save_delay_ms: u64,
}

fn default_tile_width() -> u32 {
    155
}

fn default_tile_height() -> u32 {
    265
}

fn default_buffer_rows() -> usize {
    DEFAULT_BUFFER_ROWS
}

fn default_pool_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_rebuild_delay_ms() -> u64 {
    500
}

fn default_geometry_save_delay_ms() -> u64 {
    1000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tile_width: default_tile_width(),
            tile_height: default_tile_height(),
            buffer_rows: default_buffer_rows(),
            pool_capacity: default_pool_capacity(),
            rebuild_delay_ms: default_rebuild_delay_ms(),
            geometry_save_delay_ms: default_geometry_save_delay_ms(),
        }
    }
}

impl EngineConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn grid_metrics(&self) -> GridMetrics {
        GridMetrics {
            tile_width: self.tile_width,
            tile_height: self.tile_height,
        }
    }

    pub fn rebuild_delay(&self) -> Duration {
        Duration::from_millis(self.rebuild_delay_ms)
    }

    pub fn geometry_save_delay(&self) -> Duration {
        Duration::from_millis(self.geometry_save_delay_ms)
    }
}

/// Last known window placement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub maximized: bool,
}

impl WindowGeometry {
    pub fn load_from(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(geometry) => Some(geometry),
            Err(e) => {
                tracing::warn!("Failed to parse geometry at {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize geometry: {}", e))?;
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write geometry to {}: {}", path.display(), e))?;
        Ok(())
    }
}

/// Debounced geometry writer.
///
/// Every move/resize event calls `update`; the file is written once the
/// burst goes quiet, or immediately on `flush` at shutdown.
#[derive(Debug)]
pub struct GeometrySaver {
    path: PathBuf,
    pending: Option<WindowGeometry>,
    debouncer: Debouncer,
}

impl GeometrySaver {
    pub fn new(path: PathBuf, delay: Duration) -> Self {
        Self {
            path,
            pending: None,
            debouncer: Debouncer::new(delay),
        }
    }

    pub fn update(&mut self, geometry: WindowGeometry, now: Instant) {
        self.pending = Some(geometry);
        self.debouncer.schedule(now);
    }

    /// Write the pending geometry if the debounce deadline has passed
    pub fn tick(&mut self, now: Instant) -> Result<bool, String> {
        if !self.debouncer.poll(now) {
            return Ok(false);
        }
        self.write_pending()?;
        Ok(true)
    }

    /// Write immediately, regardless of the deadline (shutdown path)
    pub fn flush(&mut self) -> Result<(), String> {
        self.debouncer.cancel();
        self.write_pending()
    }

    fn write_pending(&mut self) -> Result<(), String> {
        if let Some(geometry) = self.pending.take() {
            geometry.save_to(&self.path)?;
            tracing::debug!("Saved window geometry to {}", self.path.display());
        }
        Ok(())
    }
}
