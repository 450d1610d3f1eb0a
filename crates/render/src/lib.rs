//! Rendering Adapter: renderer-agnostic viewport interface.
//!
//! # Invariants
//! - Renderer cannot mutate world truth; it only reads cell states.
//! - Output derives from world state and a caller-chosen viewport.
//!
//! The text renderer is the only backend. The trait is stable; a terminal
//! or GUI backend plugs in without changing consumers.

mod renderer;

pub use renderer::{Renderer, TextRenderer};

pub fn crate_info() -> &'static str {
    concat!("lifegrid-render v", env!("CARGO_PKG_VERSION"))
}
