//! Domain model for the Quake log parser.
//!
//! Holds the per-game statistics and report types, the error enum shared by
//! every crate in the workspace, CLI settings and display formatting.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{QuakeError, Result};
