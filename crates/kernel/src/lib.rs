//! World Kernel: authoritative live-cell set and generation stepping.
//!
//! # Invariants
//! - A coordinate is alive iff it is in the live set; the set holds no duplicates.
//! - `update` reads only the previous generation and commits the next one at once.
//! - Work per generation is proportional to the live-cell count, not to any grid extent.

pub mod rules;
pub mod world;

pub use rules::{NEIGHBOR_OFFSETS, next_state};
pub use world::{StepReport, World, WorldError};
