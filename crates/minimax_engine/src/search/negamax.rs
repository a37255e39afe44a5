//! Recursive negamax with alpha-beta pruning.

use shakmaty::{Chess, Position};

use crate::evaluation::evaluate;
use crate::search::ordering;
use crate::types::{Score, DRAW_SCORE, INF, MATE_SCORE};

/// Halfmove clock value at which the fifty-move rule makes the position
/// claimable as a draw regardless of what is played next.
const FIFTY_MOVE_PLIES: u32 = 100;

/// Score `position` from the side to move's perspective, `depth` plies deep.
///
/// `ply` is the distance from the search root; mate scores are biased by it
/// so a mate found sooner compares strictly higher. Cutoffs never change the
/// returned score, only how much of the tree is visited.
pub(crate) fn negamax(
    position: &Chess,
    depth: u8,
    ply: u8,
    mut alpha: Score,
    beta: Score,
    nodes: &mut u64,
) -> Score {
    *nodes += 1;

    if position.is_insufficient_material() || position.halfmoves() >= FIFTY_MOVE_PLIES {
        return DRAW_SCORE;
    }

    let moves = position.legal_moves();
    if moves.is_empty() {
        return if position.is_check() {
            -(MATE_SCORE - Score::from(ply))
        } else {
            DRAW_SCORE
        };
    }

    if depth == 0 {
        return evaluate(position);
    }

    let mut best = -INF;
    for m in &ordering::order(position, moves) {
        let mut child = position.clone();
        child.play_unchecked(m);
        let score = -negamax(&child, depth - 1, ply + 1, -beta, -alpha, nodes);
        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            // The opponent already has a better option earlier in the tree.
            break;
        }
    }
    best
}
