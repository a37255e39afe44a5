//! Move ordering for alpha-beta pruning.
//!
//! Captures come first by MVV-LVA, boosted further for promotions and
//! checking moves; quiet moves keep generation order. Ordering decides
//! which of several equally scored moves a search settles on, so the sort
//! is stable and the whole pipeline is deterministic.

use shakmaty::{Chess, Move, MoveList, Position};

use crate::evaluation::piece_value;
use crate::types::Score;

const CHECK_ORDER_BONUS: Score = 50;

/// Legal moves of `position`, most promising first.
pub fn ordered_moves(position: &Chess) -> MoveList {
    order(position, position.legal_moves())
}

/// Sort an already generated move list, most promising first.
pub(crate) fn order(position: &Chess, moves: MoveList) -> MoveList {
    let mut scored: Vec<(Score, Move)> = moves
        .iter()
        .map(|m| (heuristic(position, m), m.clone()))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, m)| m).collect()
}

fn heuristic(position: &Chess, m: &Move) -> Score {
    let mut score = 0;

    // MVV-LVA: biggest victim first, cheapest attacker breaking the tie.
    // En passant reports a pawn victim like any other capture.
    if let Some(victim) = m.capture() {
        score += piece_value(victim) * 10 - piece_value(m.role());
    }

    if let Some(promotion) = m.promotion() {
        score += piece_value(promotion);
    }

    let mut probe = position.clone();
    probe.play_unchecked(m);
    if probe.is_check() {
        score += CHECK_ORDER_BONUS;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::{fen::Fen, CastlingMode, Role, Square};

    fn position_from(fen: &str) -> Chess {
        fen.parse::<Fen>()
            .expect("valid FEN")
            .into_position(CastlingMode::Standard)
            .expect("legal position")
    }

    #[test]
    fn captures_come_before_quiet_moves() {
        // White pawn e4 can take the d5 queen among many quiet moves.
        let position = position_from("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
        let moves = ordered_moves(&position);
        assert!(moves[0].is_capture(), "capture should be ordered first");
        assert_eq!(moves[0].to(), Square::D5);
    }

    #[test]
    fn pawn_takes_queen_before_queen_takes_pawn() {
        // Both captures available: exd5 (PxQ) and Qxa5 (QxP).
        let position = position_from("4k3/8/8/p2q4/4P3/8/3Q4/4K3 w - - 0 1");
        let moves = ordered_moves(&position);
        assert_eq!(moves[0].role(), Role::Pawn, "PxQ should outrank QxP");
        assert_eq!(moves[0].to(), Square::D5);
    }

    #[test]
    fn queen_promotion_leads_quiet_promotions() {
        let position = position_from("8/4P3/8/8/8/8/2k5/4K3 w - - 0 1");
        let moves = ordered_moves(&position);
        assert_eq!(moves[0].promotion(), Some(Role::Queen));
    }

    #[test]
    fn ordering_is_stable_and_complete() {
        let position = Chess::default();
        let legal = position.legal_moves();
        let first = ordered_moves(&position);
        let second = ordered_moves(&position);

        assert_eq!(first.len(), legal.len());
        assert_eq!(first, second, "ordering must be deterministic");
        for m in &first {
            assert!(legal.contains(m), "ordered move {m:?} must stay legal");
        }
    }

    #[test]
    fn checking_move_outranks_quiet_move() {
        // Rook can give check on e2 or play a quiet move; no captures around.
        let position = position_from("4k3/8/8/8/8/8/8/KR6 w - - 0 1");
        let moves = ordered_moves(&position);
        let mut probe = position.clone();
        probe.play_unchecked(&moves[0]);
        assert!(probe.is_check(), "a checking move should be ordered first");
    }
}
