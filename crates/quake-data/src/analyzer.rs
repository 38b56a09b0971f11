//! Per-game analyser for the Quake log parser.
//!
//! Turns one [`GameBlock`] into [`GameStats`]: kill totals, per-player scores,
//! kills by means of death, the game clock bounds and the completion status.

use std::collections::{BTreeMap, BTreeSet};

use quake_core::formatting::parse_game_clock;
use quake_core::models::{Actor, GameStats, GameStatus, KillEvent};
use regex::Regex;
use tracing::{debug, trace};

use crate::segmenter::{GameBlock, GAME_START_MARKER};

/// Substring of the line the server writes when a game shuts down.
pub const GAME_SHUTDOWN_MARKER: &str = "ShutdownGame:";

/// Substring of the line the server writes when a limit ends the match.
pub const GAME_EXIT_MARKER: &str = "Exit:";

/// `Kill: <killer id> <victim id> <means id>: <killer> killed <victim> by <means>`
const KILL_PATTERN: &str = r"Kill: \d+ \d+ \d+: (.+?) killed (.+?) by (.+)";

// ── KillTally ─────────────────────────────────────────────────────────────────

/// Running totals for one block. Lives only for the duration of one
/// [`GameAnalyzer::analyze`] call.
#[derive(Debug, Default)]
struct KillTally {
    total_kills: u64,
    players: BTreeSet<String>,
    kills: BTreeMap<String, i64>,
    kills_by_means: BTreeMap<String, u64>,
}

impl KillTally {
    /// Apply one kill event.
    ///
    /// A player killer is credited +1, even when they killed themselves.
    /// A world killer costs the victim 1 instead. Victims are registered
    /// with a score of 0 before either adjustment.
    fn record(&mut self, event: &KillEvent) {
        self.total_kills += 1;
        *self.kills_by_means.entry(event.means.clone()).or_insert(0) += 1;

        if let Some(victim) = event.victim.player_name() {
            self.players.insert(victim.to_string());
            self.kills.entry(victim.to_string()).or_insert(0);
        }

        match &event.killer {
            Actor::Player(killer) => {
                self.players.insert(killer.clone());
                *self.kills.entry(killer.clone()).or_insert(0) += 1;
            }
            Actor::World => {
                // The world killing the world has nobody to charge.
                if let Some(victim) = event.victim.player_name() {
                    *self.kills.entry(victim.to_string()).or_insert(0) -= 1;
                }
            }
        }
    }
}

// ── GameAnalyzer ──────────────────────────────────────────────────────────────

/// Extracts kill events and statistics from game blocks.
pub struct GameAnalyzer {
    kill_re: Regex,
}

impl Default for GameAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameAnalyzer {
    pub fn new() -> Self {
        Self {
            kill_re: Regex::new(KILL_PATTERN).expect("kill pattern is valid"),
        }
    }

    /// Parse a single log line as a kill event.
    ///
    /// The pattern may appear anywhere in the line, so the leading game clock
    /// is tolerated. Killer and victim are matched lazily up to the first
    /// ` killed ` and ` by ` respectively; the means of death runs to the end
    /// of the line. Returns `None` for any other line.
    pub fn parse_kill(&self, line: &str) -> Option<KillEvent> {
        let cap = self.kill_re.captures(line)?;
        Some(KillEvent {
            killer: Actor::parse(&cap[1]),
            victim: Actor::parse(&cap[2]),
            means: cap[3].to_string(),
        })
    }

    /// Build the [`GameStats`] for one block.
    ///
    /// Lines that are neither markers nor kills are ignored. The game is
    /// [`GameStatus::Aborted`] when it contains no kill at all; whether a
    /// `ShutdownGame:` line was seen is recorded but does not change the
    /// status.
    pub fn analyze(&self, block: &GameBlock<'_>) -> GameStats {
        let mut tally = KillTally::default();
        let mut start_time = None;
        let mut end_time = None;
        let mut ended_cleanly = false;

        for line in &block.lines {
            if line.contains(GAME_START_MARKER) {
                if let Some(t) = parse_game_clock(line) {
                    start_time = Some(t);
                }
            }

            let is_shutdown = line.contains(GAME_SHUTDOWN_MARKER);
            if is_shutdown {
                ended_cleanly = true;
            }
            if is_shutdown || line.contains(GAME_EXIT_MARKER) {
                if let Some(t) = parse_game_clock(line) {
                    end_time = Some(t);
                }
            }

            if let Some(event) = self.parse_kill(line) {
                trace!("{} killed {} by {}", event.killer, event.victim, event.means);
                tally.record(&event);
            }
        }

        let status = if tally.total_kills == 0 {
            GameStatus::Aborted
        } else {
            GameStatus::Completed
        };

        debug!(
            "GameAnalyzer: {} lines, {} kills, {} players, status {}, clean shutdown: {}",
            block.len(),
            tally.total_kills,
            tally.players.len(),
            status,
            ended_cleanly
        );

        GameStats {
            total_kills: tally.total_kills,
            players: tally.players.into_iter().collect(),
            kills: tally.kills,
            kills_by_means: tally.kills_by_means,
            status,
            start_time,
            end_time,
            ended_cleanly,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
