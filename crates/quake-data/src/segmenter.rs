//! Splits a raw server log into per-game line blocks.
//!
//! A game starts at every line containing [`GAME_START_MARKER`] and runs up to
//! (but not including) the next one. Lines before the first marker belong to
//! no game and are dropped.

use tracing::debug;

/// Substring that marks the first line of a new game.
pub const GAME_START_MARKER: &str = "InitGame:";

// ── GameBlock ─────────────────────────────────────────────────────────────────

/// The lines of one game, starting with its `InitGame:` line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameBlock<'a> {
    pub lines: Vec<&'a str>,
}

impl<'a> GameBlock<'a> {
    fn open(marker_line: &'a str) -> Self {
        Self {
            lines: vec![marker_line],
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// ── Segmentation ──────────────────────────────────────────────────────────────

/// Group `lines` into [`GameBlock`]s, in log order.
///
/// The algorithm:
/// 1. A marker line seals the open block (if any) and opens a new one
///    containing only the marker.
/// 2. Any other line joins the open block, or is discarded when no block has
///    been opened yet.
/// 3. The block still open at end of input is sealed as the last game.
///
/// An empty log, or one without any marker, produces no blocks.
pub fn segment_games<'a, I>(lines: I) -> Vec<GameBlock<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut blocks: Vec<GameBlock<'a>> = Vec::new();
    let mut current_block: Option<GameBlock<'a>> = None;
    let mut discarded = 0usize;

    for line in lines {
        if line.contains(GAME_START_MARKER) {
            if let Some(block) = current_block.take() {
                seal_block(&mut blocks, block);
            }
            current_block = Some(GameBlock::open(line));
            continue;
        }

        match current_block.as_mut() {
            Some(block) => block.lines.push(line),
            None => discarded += 1,
        }
    }

    if let Some(block) = current_block {
        seal_block(&mut blocks, block);
    }

    if discarded > 0 {
        debug!("Discarded {} line(s) before the first game", discarded);
    }
    debug!("Segmenter: found {} game block(s)", blocks.len());

    blocks
}

fn seal_block<'a>(blocks: &mut Vec<GameBlock<'a>>, block: GameBlock<'a>) {
    if !block.is_empty() {
        blocks.push(block);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
