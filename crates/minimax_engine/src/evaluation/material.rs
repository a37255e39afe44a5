//! Piece values and material balance.

use shakmaty::{Board, Color, Role};

use crate::types::Score;

/// Classic centipawn piece values.
///
/// Kings carry no material value; losing one is expressed through mate
/// scores in the search, never through material.
pub fn piece_value(role: Role) -> Score {
    match role {
        Role::Pawn => 100,
        Role::Knight => 320,
        Role::Bishop => 330,
        Role::Rook => 500,
        Role::Queen => 900,
        Role::King => 0,
    }
}

/// Material balance from White's perspective.
pub(crate) fn balance(board: &Board) -> Score {
    let mut score = 0;
    for square in board.occupied() {
        if let Some(piece) = board.piece_at(square) {
            match piece.color {
                Color::White => score += piece_value(piece.role),
                Color::Black => score -= piece_value(piece.role),
            }
        }
    }
    score
}
