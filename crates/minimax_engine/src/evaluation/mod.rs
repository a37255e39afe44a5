//! Static position evaluation.
//!
//! Classical midgame evaluation: material dominates, refined by piece
//! placement, mobility for the side to move, retained castling rights, and
//! a small check term. Terminal positions (checkmate, stalemate) are the
//! search's concern; the evaluator only scores positions where play goes on,
//! though it tolerates terminal input without panicking.
//!
//! ## Module Organization
//!
//! - `material` - centipawn piece values and material balance
//! - `pst` - piece-square tables

mod material;
mod pst;

pub use material::piece_value;

use shakmaty::{CastlingSide, Chess, Color, Position};

use crate::types::Score;

const MOBILITY_WEIGHT: Score = 2;
const KINGSIDE_RIGHT_BONUS: Score = 15;
const QUEENSIDE_RIGHT_BONUS: Score = 10;
const CHECK_BONUS: Score = 20;

/// Evaluate `position` from the side to move's perspective.
///
/// The score is assembled White-relative and negated when Black is to
/// move, which is the orientation negamax expects: positive always means
/// the mover stands better.
pub fn evaluate(position: &Chess) -> Score {
    let board = position.board();
    let mut score = material::balance(board) + pst::balance(board);

    // Mobility for the side to move.
    let mobility = position.legal_moves().len() as Score * MOBILITY_WEIGHT;
    score += match position.turn() {
        Color::White => mobility,
        Color::Black => -mobility,
    };

    let castles = position.castles();
    if castles.has(Color::White, CastlingSide::KingSide) {
        score += KINGSIDE_RIGHT_BONUS;
    }
    if castles.has(Color::White, CastlingSide::QueenSide) {
        score += QUEENSIDE_RIGHT_BONUS;
    }
    if castles.has(Color::Black, CastlingSide::KingSide) {
        score -= KINGSIDE_RIGHT_BONUS;
    }
    if castles.has(Color::Black, CastlingSide::QueenSide) {
        score -= QUEENSIDE_RIGHT_BONUS;
    }

    if position.is_check() {
        score += match position.turn() {
            Color::White => -CHECK_BONUS,
            Color::Black => CHECK_BONUS,
        };
    }

    match position.turn() {
        Color::White => score,
        Color::Black => -score,
    }
}
