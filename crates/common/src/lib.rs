//! Shared types for the lifegrid workspace: cell coordinates, viewports, configuration.
//!
//! # Invariants
//! - Coordinates are never clipped or wrapped; arithmetic that leaves `i64` yields `None`.

mod config;
mod types;
mod viewport;

pub use config::{ConfigError, LifeConfig};
pub use types::{Direction, Pos};
pub use viewport::Viewport;
