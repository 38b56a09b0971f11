use chrono::NaiveTime;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::Result;
use crate::formatting::{format_game_clock, format_ranking_line};

/// Literal token the server writes when the environment, not a player,
/// is on one side of a kill.
pub const WORLD_SENTINEL: &str = "<world>";

/// One side of a kill event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Actor {
    /// A human player, identified by display name.
    Player(String),
    /// The map itself: falls, lava, crushers and similar hazards.
    World,
}

impl Actor {
    /// Classify a raw name captured from a kill line.
    pub fn parse(raw: &str) -> Self {
        if raw == WORLD_SENTINEL {
            Actor::World
        } else {
            Actor::Player(raw.to_string())
        }
    }

    /// The player name, or `None` for the world.
    pub fn player_name(&self) -> Option<&str> {
        match self {
            Actor::Player(name) => Some(name),
            Actor::World => None,
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Player(name) => f.write_str(name),
            Actor::World => f.write_str(WORLD_SENTINEL),
        }
    }
}

/// A single `Kill:` line, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillEvent {
    pub killer: Actor,
    pub victim: Actor,
    /// Weapon or cause token, e.g. `MOD_RAILGUN`.
    pub means: String,
}

/// Whether a game produced any kills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Completed,
    /// No kill event was seen; excluded from the ranking.
    Aborted,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Completed => f.write_str("completed"),
            GameStatus::Aborted => f.write_str("aborted"),
        }
    }
}

/// Synthetic 1-based game identifier, assigned in parse order.
///
/// Orders numerically and serializes as `"game_<n>"`, so a map keyed by
/// `GameId` lists `game_10` after `game_9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameId(pub usize);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game_{}", self.0)
    }
}

impl Serialize for GameId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Statistics for one game block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameStats {
    /// Every kill event in the block, world-caused ones included.
    pub total_kills: u64,
    /// Distinct player names, sorted.
    pub players: Vec<String>,
    /// Net kill score per player; world deaths count against the victim.
    pub kills: BTreeMap<String, i64>,
    pub kills_by_means: BTreeMap<String, u64>,
    pub status: GameStatus,
    #[serde(serialize_with = "serialize_clock")]
    pub start_time: Option<NaiveTime>,
    #[serde(serialize_with = "serialize_clock")]
    pub end_time: Option<NaiveTime>,
    /// A `ShutdownGame:` line was seen. Does not affect `status`.
    #[serde(skip)]
    pub ended_cleanly: bool,
}

impl GameStats {
    pub fn is_aborted(&self) -> bool {
        self.status == GameStatus::Aborted
    }
}

fn serialize_clock<S: Serializer>(
    time: &Option<NaiveTime>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match time {
        Some(t) => serializer.serialize_str(&format_game_clock(*t)),
        None => serializer.serialize_none(),
    }
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    /// 1-based position.
    pub rank: usize,
    pub player: String,
    pub kills: i64,
}

impl fmt::Display for RankingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_ranking_line(self.rank, &self.player, self.kills))
    }
}

/// The final output: per-game statistics plus the cross-game leaderboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub games: BTreeMap<GameId, GameStats>,
    pub ranking: Vec<String>,
}

impl Report {
    /// Serialize as JSON indented by `indent` spaces per level.
    ///
    /// An indent of `0` produces compact single-line JSON.
    pub fn to_json(&self, indent: usize) -> Result<String> {
        if indent == 0 {
            return Ok(serde_json::to_string(self)?);
        }

        let indent_bytes = vec![b' '; indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;

        let json = String::from_utf8(buf).map_err(std::io::Error::other)?;
        Ok(json)
    }
}
