//! Depth-bounded negamax search.
//!
//! ## Module Organization
//!
//! - `negamax` - recursive alpha-beta core
//! - `ordering` - MVV-LVA move ordering
//!
//! The search is pure: position in, result out, nothing kept between
//! calls. Depth is the only cutoff; with no clock and no randomness, equal
//! inputs always produce equal results.

mod negamax;
mod ordering;

pub use ordering::ordered_moves;

use shakmaty::{Chess, Position};

use crate::types::{Score, SearchResult, DRAW_SCORE, INF, MATE_SCORE};

/// Find the best move in `position`, searching `depth` plies (clamped to
/// at least 1).
///
/// The score is from the side to move's perspective. Equal root scores go
/// to the move ordered first, which together with the deterministic
/// ordering makes the result a pure function of `(position, depth)`.
///
/// A terminal root yields `best_move: None` with the matching terminal
/// score. Callers driving a live game are expected to check for game end
/// before asking for a move; this path only keeps the contract total.
pub fn search(position: &Chess, depth: u8) -> SearchResult {
    let depth = depth.max(1);
    let mut nodes: u64 = 1;

    let moves = position.legal_moves();
    if moves.is_empty() {
        let score = if position.is_check() {
            -MATE_SCORE
        } else {
            DRAW_SCORE
        };
        return SearchResult {
            best_move: None,
            score,
            depth,
            nodes,
        };
    }

    let mut best_move = None;
    let mut best = -INF;
    let mut alpha = -INF;

    for m in &ordering::order(position, moves) {
        let mut child = position.clone();
        child.play_unchecked(m);
        let score = -negamax::negamax(&child, depth - 1, 1, -INF, -alpha, &mut nodes);
        if score > best {
            best = score;
            best_move = Some(m.clone());
        }
        if best > alpha {
            alpha = best;
        }
    }

    SearchResult {
        best_move,
        score: best,
        depth,
        nodes,
    }
}
