//! Cross-game kill ranking.

use std::collections::{BTreeMap, HashMap};

use quake_core::models::{GameId, GameStats, RankingEntry};

/// Stateless helper that folds per-game kill scores into a leaderboard.
pub struct RankingAggregator;

impl RankingAggregator {
    /// Sum every completed game's `kills` per player and rank the totals.
    ///
    /// Aborted games are skipped. Players are ordered by total descending.
    /// Ties are broken by game order first: a player appearing in an earlier
    /// game ranks ahead. Within one game the kill table is walked
    /// alphabetically, so tied players first seen in the same game are listed
    /// by name, not by the order they appeared in the log.
    pub fn rank(games: &BTreeMap<GameId, GameStats>) -> Vec<RankingEntry> {
        let mut totals: Vec<(String, i64)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for stats in games.values().filter(|g| !g.is_aborted()) {
            for (player, count) in &stats.kills {
                match index.get(player) {
                    Some(&i) => totals[i].1 += count,
                    None => {
                        index.insert(player.clone(), totals.len());
                        totals.push((player.clone(), *count));
                    }
                }
            }
        }

        // Stable, so equal totals keep their game-then-name order.
        totals.sort_by(|a, b| b.1.cmp(&a.1));

        totals
            .into_iter()
            .enumerate()
            .map(|(i, (player, kills))| RankingEntry {
                rank: i + 1,
                player,
                kills,
            })
            .collect()
    }

    /// [`RankingAggregator::rank`], rendered as display lines.
    pub fn ranking_lines(games: &BTreeMap<GameId, GameStats>) -> Vec<String> {
        Self::rank(games).iter().map(ToString::to_string).collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
