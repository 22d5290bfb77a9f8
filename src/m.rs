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

use arrayvec::ArrayVec;

use crate::{role::Role, square::Square};

/// A move from one square to another.
///
/// Moves carry no context: whether a move is a capture, en passant or
/// castling follows from the position it is played in. Castling is encoded
/// as the king (or rook) moving onto the square of its own partner.
///
/// A move with `promotion: Some(_)` is a promotion move. `Some(Role::Queen)`
/// and `None` are distinct values, even for the same squares.
///
/// # Display
///
/// `e2-e4`, and `e7-e8=N` for promotions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: Role) -> Move {
        Move {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// Checks if the move is a promotion.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Checks if this move is what a caller asking for `from`-`to` with the
    /// given promotion choice means. Moves without a promotion accept any
    /// choice, promotion moves only their own role.
    pub fn matches(self, from: Square, to: Square, promotion: Role) -> bool {
        self.from == from
            && self.to == to
            && self.promotion.map_or(true, |role| role == promotion)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            f.write_char('=')?;
            f.write_char(role.upper_char())?;
        }
        Ok(())
    }
}

/// A container for the legal moves of a whole position, stored inline.
///
/// With at most 16 pieces per color, 15 queens and a king with both castles
/// bound the count at 415 moves.
///
/// # Example
///
/// ```
/// use rulechess::{Chess, Role};
///
/// let pos = Chess::new();
/// let mut moves = pos.legal_moves();
/// moves.retain(|m| pos.board().role_at(m.from) == Some(Role::Pawn));
/// assert_eq!(moves.len(), 16);
/// ```
pub type MoveList = ArrayVec<Move, 512>;

/// The moves originating on one square.
///
/// A queen reaches at most 27 squares and a pawn at most 3, each with 4
/// promotion choices.
pub type SquareMoves = ArrayVec<Move, 32>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Move::new(Square::E2, Square::E4).to_string(), "e2-e4");
        assert_eq!(
            Move::with_promotion(Square::E7, Square::E8, Role::Knight).to_string(),
            "e7-e8=N"
        );
    }

    #[test]
    fn test_matches() {
        let plain = Move::new(Square::E2, Square::E4);
        assert!(plain.matches(Square::E2, Square::E4, Role::Queen));
        assert!(plain.matches(Square::E2, Square::E4, Role::Knight));
        assert!(!plain.matches(Square::E2, Square::E3, Role::Queen));

        let promotion = Move::with_promotion(Square::B7, Square::B8, Role::Rook);
        assert!(promotion.matches(Square::B7, Square::B8, Role::Rook));
        assert!(!promotion.matches(Square::B7, Square::B8, Role::Queen));
        assert_ne!(
            Move::new(Square::B7, Square::B8),
            Move::with_promotion(Square::B7, Square::B8, Role::Queen)
        );
    }
}
