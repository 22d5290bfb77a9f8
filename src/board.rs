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

use std::fmt::{self, Write as _};

use crate::{
    color::Color,
    role::Role,
    square::Square,
    types::Piece,
};

const BACKRANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// [`Piece`] positions on a board.
///
/// The board is the sole owner of placement state. It knows nothing about
/// whose turn it is or which moves are legal.
///
/// # Examples
///
/// ```
/// use rulechess::{Board, Color, Square};
///
/// let board = Board::new();
/// assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
///
/// assert_eq!(board.to_string(), concat!(
///     "  a  b  c  d  e  f  g  h\n",
///     "8 BR BN BB BQ BK BB BN BR\n",
///     "7 BP BP BP BP BP BP BP BP\n",
///     "6 .. .. .. .. .. .. .. ..\n",
///     "5 .. .. .. .. .. .. .. ..\n",
///     "4 .. .. .. .. .. .. .. ..\n",
///     "3 .. .. .. .. .. .. .. ..\n",
///     "2 WP WP WP WP WP WP WP WP\n",
///     "1 WR WN WB WQ WK WB WN WR\n",
/// ));
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            let backrank = color.backrank();
            let pawn_rank = (backrank as i8 + color.forward()) as u8;
            for file in 0..8 {
                if let Some(sq) = Square::from_coords(file, backrank) {
                    board.set_piece_at(sq, BACKRANK[usize::from(file)].of(color));
                }
                if let Some(sq) = Square::from_coords(file, pawn_rank) {
                    board.set_piece_at(sq, color.pawn());
                }
            }
        }
        board
    }

    pub const fn empty() -> Board {
        Board {
            squares: [None; 64],
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        self.piece_at(sq).map(|piece| piece.role)
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Puts a piece on the square, replacing whatever stood there.
    #[inline]
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    #[inline]
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Occupied squares with their pieces, `A1` first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Squares holding the given piece.
    pub fn squares_of(&self, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |&(_, p)| p == piece)
            .map(|(sq, _)| sq)
    }

    /// The square of the king of the given color. If there is more than
    /// one, the lowest square is returned.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.squares_of(color.king()).next()
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for file in 'a'..='h' {
            f.write_str("  ")?;
            f.write_char(file)?;
        }
        f.write_char('\n')?;

        for rank in (0..8).rev() {
            write!(f, "{}", rank + 1)?;
            for file in 0..8 {
                f.write_char(' ')?;
                match Square::from_coords(file, rank).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => f.write_str("..")?,
                }
            }
            f.write_char('\n')?;
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\n')?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_at() {
        let board = Board::new();
        assert_eq!(board.piece_at(Square::A2), Some(Color::White.pawn()));
        assert_eq!(board.piece_at(Square::B1), Some(Color::White.knight()));
        assert_eq!(board.piece_at(Square::D8), Some(Color::Black.queen()));
        assert_eq!(board.piece_at(Square::E4), None);
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn test_set_piece_at() {
        let mut board = Board::new();
        board.set_piece_at(Square::A3, Color::White.pawn());
        assert_eq!(board.piece_at(Square::A3), Some(Color::White.pawn()));
        assert_eq!(board.remove_piece_at(Square::A3), Some(Color::White.pawn()));
        assert!(!board.is_occupied(Square::A3));
    }

    #[test]
    fn test_king_of() {
        let board = Board::new();
        assert_eq!(board.king_of(Color::White), Some(Square::E1));
        assert_eq!(board.king_of(Color::Black), Some(Square::E8));
        assert_eq!(Board::empty().king_of(Color::White), None);
    }
}
