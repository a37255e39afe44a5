//! Core types shared by search and evaluation.
//!
//! Scores are centipawns from the perspective of the side to move, the
//! orientation negamax expects. Mate scores occupy a reserved band near
//! `MATE_SCORE` so they always outrank positional scores, and the distance
//! to mate stays recoverable from the magnitude.

use shakmaty::Move;

/// Centipawn score from the side to move's perspective.
pub type Score = i32;

/// Base magnitude for forced-mate scores.
///
/// A mate delivered `n` plies from the root scores `MATE_SCORE - n`, so a
/// nearer mate compares strictly higher than a farther one and any mate
/// outranks any positional score.
pub const MATE_SCORE: Score = 30_000;

/// Score for drawn positions (stalemate, insufficient material, fifty-move).
pub const DRAW_SCORE: Score = 0;

/// Window bound strictly above every reachable score.
pub const INF: Score = 999_999;

/// Longest mating line the mate band accounts for, in plies.
const MAX_MATE_PLIES: Score = 100;

/// Outcome of a completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best move found; `None` only when the searched position is terminal.
    pub best_move: Option<Move>,
    /// Score of the root position from the side to move's perspective.
    pub score: Score,
    /// Requested search depth in plies.
    pub depth: u8,
    /// Positions visited, root inclusive.
    pub nodes: u64,
}

/// Whether `score` encodes a forced mate for either side.
pub fn is_mate_score(score: Score) -> bool {
    score.abs() >= MATE_SCORE - MAX_MATE_PLIES
}

/// Signed plies until mate, when `score` is a mate score.
///
/// Positive means the side to move delivers the mate, negative means it is
/// on the receiving end.
pub fn mate_in(score: Score) -> Option<i32> {
    if !is_mate_score(score) {
        return None;
    }
    let plies = MATE_SCORE - score.abs();
    Some(if score > 0 { plies } else { -plies })
}
