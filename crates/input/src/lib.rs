//! Command dispatch: raw keys and typed lines mapped to world and viewport operations.
//!
//! # Invariants
//! - Panning moves only the viewport; the world never learns about it.
//! - Every world mutation goes through the kernel's explicit operations.

pub mod command;
pub mod session;

pub use command::{Command, ParseError};
pub use session::{Outcome, Session, SessionError};
