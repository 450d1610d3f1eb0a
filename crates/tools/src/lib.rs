//! Developer Tooling: read-only world inspection.

mod inspector;

pub use inspector::{WorldInspector, WorldSummary};

pub fn crate_info() -> &'static str {
    concat!("lifegrid-tools v", env!("CARGO_PKG_VERSION"))
}
