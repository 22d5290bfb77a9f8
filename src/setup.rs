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

use crate::{
    board::Board,
    castling_side::{ByCastlingSide, CastlingSide},
    color::{ByColor, Color},
    m::Move,
    role::Role,
    square::Square,
};

/// A not necessarily legal position.
///
/// This is plain data: nothing is cached and nothing is validated. Use
/// [`Chess::from_setup()`](crate::Chess::from_setup()) to obtain a
/// position that answers move queries.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Setup {
    /// Piece positions on the board.
    pub board: Board,

    /// Side to move.
    pub turn: Color,

    /// Castling rights per color and wing. A right is lost for good once
    /// the king or the rook of that wing leaves or is captured on its home
    /// square.
    pub castles: ByColor<ByCastlingSide<bool>>,

    /// File of a pawn that has just been pushed two squares and stands next
    /// to an enemy pawn. Valid for one ply only.
    pub ep_file: Option<u8>,
}

impl Setup {
    /// An empty board, white to move, no castling rights.
    pub fn empty() -> Setup {
        Setup {
            board: Board::empty(),
            turn: Color::White,
            castles: ByColor::new_with(|_| ByCastlingSide::NONE),
            ep_file: None,
        }
    }

    /// The rank a pawn of the side to move lands on when capturing en
    /// passant.
    pub const fn ep_rank(turn: Color) -> u8 {
        match turn {
            Color::White => 5,
            Color::Black => 2,
        }
    }

    /// The square a pawn of the side to move would move to when capturing
    /// en passant, if any.
    pub fn ep_square(&self) -> Option<Square> {
        self.ep_file
            .and_then(|file| Square::from_coords(file, Setup::ep_rank(self.turn)))
    }

    /// Detects the castling encoding: a move onto a square occupied by a
    /// piece of the mover's own color.
    pub fn castling_side(&self, m: Move) -> Option<CastlingSide> {
        if self.board.color_at(m.to) == Some(self.turn) {
            Some(CastlingSide::from_queen_side(
                m.from.file() == 0 || m.to.file() == 0,
            ))
        } else {
            None
        }
    }

    /// Plays a move without checking that it is legal, or even that there
    /// is a piece of the side to move on the origin square.
    ///
    /// Afterwards the turn has passed to the other side, castling rights
    /// of both colors are updated and the en passant file is set if and only
    /// if this was a double pawn push next to an enemy pawn.
    pub fn play_unchecked(&mut self, m: Move) {
        let color = self.turn;

        if let Some(side) = self.castling_side(m) {
            self.board.remove_piece_at(m.from);
            self.board.remove_piece_at(m.to);
            self.board.set_piece_at(side.king_to(color), color.king());
            self.board.set_piece_at(side.rook_to(color), color.rook());
            self.ep_file = None;
        } else if let Some(moved) = self.board.remove_piece_at(m.from) {
            let is_pawn = moved.role == Role::Pawn;

            // A pawn moving diagonally onto an empty square is capturing en
            // passant. The captured pawn stands beside the origin.
            if is_pawn && m.from.file() != m.to.file() && !self.board.is_occupied(m.to) {
                if let Some(captured) = m.to.with_rank(m.from.rank()) {
                    self.board.remove_piece_at(captured);
                }
            }

            let placed = if is_pawn && (m.to.rank() == 0 || m.to.rank() == 7) {
                m.promotion.unwrap_or(Role::Queen).of(color)
            } else {
                moved
            };
            self.board.set_piece_at(m.to, placed);

            self.ep_file = if is_pawn && m.from.rank().abs_diff(m.to.rank()) == 2 {
                let them = (!color).pawn();
                let beside = [-1, 1]
                    .into_iter()
                    .filter_map(|df| m.to.offset((df, 0)))
                    .any(|sq| self.board.piece_at(sq) == Some(them));
                beside.then_some(m.to.file())
            } else {
                None
            };
        }

        self.turn = !color;

        for owner in Color::ALL {
            let king = CastlingSide::king_from(owner);
            for side in CastlingSide::ALL {
                let rook = side.rook_from(owner);
                if [king, rook].into_iter().any(|sq| sq == m.from || sq == m.to) {
                    self.castles[owner][side] = false;
                }
            }
        }
    }
}

impl Default for Setup {
    /// The standard starting position.
    fn default() -> Setup {
        Setup {
            board: Board::new(),
            castles: ByColor::new_with(|_| ByCastlingSide::BOTH),
            ..Setup::empty()
        }
    }
}
