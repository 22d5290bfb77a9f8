// This file is part of the rulechess library.
// Copyright (C) 2026 The rulechess developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Attack detection by walking outward from the attacked square.
//!
//! Instead of generating the moves of every enemy piece, each movement
//! pattern is cast in reverse from the target square: the first piece met
//! along a rook ray attacks the square if it is a rook or queen, along a
//! bishop ray if it is a bishop or queen, and so on.
//!
//! # Examples
//!
//! ```
//! use rulechess::{attacks, Board, Color, Square};
//!
//! let board = Board::new();
//! assert!(attacks::is_attacked(&board, Square::F3, Color::White));
//! assert!(!attacks::is_attacked(&board, Square::E4, Color::White));
//! assert!(attacks::is_attacked(&board, Square::F6, Color::Black));
//! ```

use crate::{
    board::Board,
    color::Color,
    role::{Direction, Role, BISHOP_DIRECTIONS, KNIGHT_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS},
    square::Square,
    types::Piece,
};

// Where an attacking pawn stands relative to the square it attacks.
const WHITE_PAWN_ORIGINS: [Direction; 2] = [(-1, -1), (1, -1)];
const BLACK_PAWN_ORIGINS: [Direction; 2] = [(-1, 1), (1, 1)];

type Pattern = (&'static [Direction], bool, &'static [Role]);

fn patterns(by: Color) -> [Pattern; 5] {
    [
        (&ROOK_DIRECTIONS, true, &[Role::Rook, Role::Queen]),
        (&BISHOP_DIRECTIONS, true, &[Role::Bishop, Role::Queen]),
        (&KNIGHT_DIRECTIONS, false, &[Role::Knight]),
        (&QUEEN_DIRECTIONS, false, &[Role::King]),
        (
            by.fold::<&'static [Direction]>(&WHITE_PAWN_ORIGINS, &BLACK_PAWN_ORIGINS),
            false,
            &[Role::Pawn],
        ),
    ]
}

/// Finds the first piece in the given direction. Stepping pieces look at
/// the adjacent square only.
pub(crate) fn first_piece(
    board: &Board,
    sq: Square,
    direction: Direction,
    slides: bool,
) -> Option<(Square, Piece)> {
    let mut current = sq.offset(direction);
    while let Some(target) = current {
        if let Some(piece) = board.piece_at(target) {
            return Some((target, piece));
        }
        if !slides {
            break;
        }
        current = target.offset(direction);
    }
    None
}

/// Squares of pieces of color `by` that attack `sq`.
///
/// The piece on `sq` itself, if any, does not matter.
pub fn attackers(board: &Board, sq: Square, by: Color) -> impl Iterator<Item = Square> + '_ {
    patterns(by)
        .into_iter()
        .flat_map(move |(directions, slides, roles)| {
            directions.iter().filter_map(move |&direction| {
                first_piece(board, sq, direction, slides)
                    .filter(|&(_, piece)| piece.color == by && roles.contains(&piece.role))
                    .map(|(from, _)| from)
            })
        })
}

/// Tests if `sq` is attacked by any piece of color `by`.
pub fn is_attacked(board: &Board, sq: Square, by: Color) -> bool {
    attackers(board, sq, by).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: &[(Square, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(sq, piece) in pieces {
            board.set_piece_at(sq, piece);
        }
        board
    }

    #[test]
    fn test_slider_blocked() {
        let board = board_with(&[
            (Square::A1, Color::Black.rook()),
            (Square::A4, Color::White.pawn()),
        ]);
        assert!(is_attacked(&board, Square::A3, Color::Black));
        assert!(is_attacked(&board, Square::A4, Color::Black));
        assert!(!is_attacked(&board, Square::A5, Color::Black));
        assert!(is_attacked(&board, Square::H1, Color::Black));
        assert!(!is_attacked(&board, Square::B2, Color::Black));
    }

    #[test]
    fn test_bishop_and_queen_rays() {
        let board = board_with(&[
            (Square::C1, Color::White.bishop()),
            (Square::D8, Color::White.queen()),
        ]);
        assert!(is_attacked(&board, Square::H6, Color::White));
        assert!(is_attacked(&board, Square::A3, Color::White));
        assert!(!is_attacked(&board, Square::C2, Color::White));
        assert!(is_attacked(&board, Square::D1, Color::White));
        assert!(is_attacked(&board, Square::H4, Color::White));
        assert!(!is_attacked(&board, Square::H4, Color::Black));
    }

    #[test]
    fn test_knight_and_king() {
        let board = board_with(&[
            (Square::G1, Color::White.knight()),
            (Square::E8, Color::Black.king()),
        ]);
        assert!(is_attacked(&board, Square::F3, Color::White));
        assert!(is_attacked(&board, Square::E2, Color::White));
        assert!(!is_attacked(&board, Square::G3, Color::White));
        assert!(is_attacked(&board, Square::D7, Color::Black));
        assert!(!is_attacked(&board, Square::E6, Color::Black));
    }

    #[test]
    fn test_pawn_attacks_forward_only() {
        let board = board_with(&[
            (Square::E4, Color::White.pawn()),
            (Square::D5, Color::Black.pawn()),
        ]);
        assert!(is_attacked(&board, Square::D5, Color::White));
        assert!(is_attacked(&board, Square::F5, Color::White));
        assert!(!is_attacked(&board, Square::E5, Color::White));
        assert!(!is_attacked(&board, Square::D3, Color::White));
        assert!(is_attacked(&board, Square::E4, Color::Black));
        assert!(is_attacked(&board, Square::C4, Color::Black));
        assert!(!is_attacked(&board, Square::C6, Color::Black));
    }

    #[test]
    fn test_attackers() {
        let board = board_with(&[
            (Square::E1, Color::White.rook()),
            (Square::A4, Color::White.queen()),
            (Square::F6, Color::White.knight()),
            (Square::E8, Color::Black.king()),
        ]);
        let mut found: Vec<Square> = attackers(&board, Square::E8, Color::White).collect();
        found.sort();
        assert_eq!(found, [Square::E1, Square::A4, Square::F6]);
    }
}
