//! Log ingestion and analysis for the Quake log parser.
//!
//! Responsible for reading server logs, splitting them into game blocks,
//! computing per-game statistics, ranking players and running the top-level
//! analysis pipeline.

pub mod aggregator;
pub mod analysis;
pub mod analyzer;
pub mod reader;
pub mod segmenter;

pub use quake_core as core;
