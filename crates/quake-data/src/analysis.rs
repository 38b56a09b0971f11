//! Main analysis pipeline for the Quake log parser.
//!
//! Orchestrates segmentation, per-game analysis and ranking, returning an
//! [`AnalysisResult`] ready to be written out.

use std::collections::BTreeMap;
use std::path::Path;

use quake_core::error::Result;
use quake_core::models::{GameId, Report};
use tracing::info;

use crate::aggregator::RankingAggregator;
use crate::analyzer::GameAnalyzer;
use crate::reader::{read_log, split_lines};
use crate::segmenter::segment_games;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the report. Never part of the JSON output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisMetadata {
    /// Number of lines in the input, pre-game noise included.
    pub lines_read: usize,
    /// Number of game blocks found.
    pub games_found: usize,
    /// Games without any kill.
    pub aborted_games: usize,
    /// Rows in the ranking.
    pub players_ranked: usize,
    /// Wall-clock seconds spent segmenting, analysing and ranking.
    pub parse_time_seconds: f64,
}

/// The complete output of [`analyze_log`].
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub report: Report,
    pub metadata: AnalysisMetadata,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full pipeline over in-memory log content.
///
/// 1. Split into lines and segment into game blocks.
/// 2. Analyse each block, numbering games `game_1`, `game_2`, ... in order.
/// 3. Rank players over the completed games.
pub fn analyze_log(content: &str) -> AnalysisResult {
    let start = std::time::Instant::now();

    let lines = split_lines(content);
    let lines_read = lines.len();
    let blocks = segment_games(lines);

    let analyzer = GameAnalyzer::new();
    let games: BTreeMap<_, _> = blocks
        .iter()
        .enumerate()
        .map(|(i, block)| (GameId(i + 1), analyzer.analyze(block)))
        .collect();

    let ranking = RankingAggregator::ranking_lines(&games);

    let metadata = AnalysisMetadata {
        lines_read,
        games_found: games.len(),
        aborted_games: games.values().filter(|g| g.is_aborted()).count(),
        players_ranked: ranking.len(),
        parse_time_seconds: start.elapsed().as_secs_f64(),
    };

    info!(
        "Analysed {} lines: {} games ({} aborted), {} ranked players",
        metadata.lines_read, metadata.games_found, metadata.aborted_games, metadata.players_ranked
    );

    AnalysisResult {
        report: Report { games, ranking },
        metadata,
    }
}

/// Read the log at `path` and run [`analyze_log`] over it.
///
/// The only failure is an unreadable input; nothing inside the log can make
/// the analysis fail.
pub fn analyze_log_file(path: &Path) -> Result<AnalysisResult> {
    let content = read_log(path)?;
    Ok(analyze_log(&content))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
