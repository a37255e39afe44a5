//! Piece-square tables.
//!
//! Midgame tables written from White's perspective with rank 8 first, the
//! conventional published layout. White pieces therefore read through a
//! vertical flip and black pieces read the table directly; the caller
//! applies the sign.

use shakmaty::{Board, Color, Role, Square};

use crate::types::Score;

#[rustfmt::skip]
const PAWN: [Score; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT: [Score; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP: [Score; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK: [Score; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN: [Score; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_MIDGAME: [Score; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

fn table(role: Role) -> &'static [Score; 64] {
    match role {
        Role::Pawn => &PAWN,
        Role::Knight => &KNIGHT,
        Role::Bishop => &BISHOP,
        Role::Rook => &ROOK,
        Role::Queen => &QUEEN,
        Role::King => &KING_MIDGAME,
    }
}

/// Table value for a piece of `color` on `square`, unsigned.
pub(crate) fn bonus(role: Role, square: Square, color: Color) -> Score {
    let index = match color {
        Color::White => usize::from(square.flip_vertical()),
        Color::Black => usize::from(square),
    };
    table(role)[index]
}

/// Piece-square balance from White's perspective.
pub(crate) fn balance(board: &Board) -> Score {
    let mut score = 0;
    for square in board.occupied() {
        if let Some(piece) = board.piece_at(square) {
            match piece.color {
                Color::White => score += bonus(piece.role, square, piece.color),
                Color::Black => score -= bonus(piece.role, square, piece.color),
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::{Chess, Position};

    #[test]
    fn tables_are_mirrored_between_colors() {
        // A white piece and its vertical mirror image read the same entry.
        assert_eq!(
            bonus(Role::Pawn, Square::E4, Color::White),
            bonus(Role::Pawn, Square::E5, Color::Black)
        );
        assert_eq!(
            bonus(Role::Knight, Square::F3, Color::White),
            bonus(Role::Knight, Square::F6, Color::Black)
        );
        assert_eq!(
            bonus(Role::King, Square::G1, Color::White),
            bonus(Role::King, Square::G8, Color::Black)
        );
    }

    #[test]
    fn central_pawns_outscore_home_pawns() {
        let center = bonus(Role::Pawn, Square::D4, Color::White);
        let home = bonus(Role::Pawn, Square::D2, Color::White);
        assert_eq!(center, 20);
        assert_eq!(home, -20);
    }

    #[test]
    fn castled_king_is_rewarded() {
        assert_eq!(bonus(Role::King, Square::G1, Color::White), 30);
        assert!(bonus(Role::King, Square::E4, Color::White) < 0);
    }

    #[test]
    fn starting_position_balances_to_zero() {
        let position = Chess::default();
        assert_eq!(balance(position.board()), 0);
    }

    #[test]
    fn rim_knights_are_penalized() {
        assert_eq!(bonus(Role::Knight, Square::A1, Color::White), -50);
        assert_eq!(bonus(Role::Knight, Square::E4, Color::White), 20);
    }
}
