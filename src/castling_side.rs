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

use std::ops;

use crate::{color::Color, square::Square};

/// File of both kings at the start of the game.
pub const KING_FILE: u8 = 4;

/// `KingSide` (O-O) or `QueenSide` (O-O-O).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    #[inline]
    pub const fn from_queen_side(queen_side: bool) -> CastlingSide {
        if queen_side {
            CastlingSide::QueenSide
        } else {
            CastlingSide::KingSide
        }
    }

    /// The home file of the rook on this wing: `a` or `h`.
    pub const fn rook_from_file(self) -> u8 {
        match self {
            CastlingSide::KingSide => 7,
            CastlingSide::QueenSide => 0,
        }
    }

    pub const fn king_to_file(self) -> u8 {
        match self {
            CastlingSide::KingSide => 6,
            CastlingSide::QueenSide => 2,
        }
    }

    pub const fn rook_to_file(self) -> u8 {
        match self {
            CastlingSide::KingSide => 5,
            CastlingSide::QueenSide => 3,
        }
    }

    pub const fn king_from(color: Color) -> Square {
        backrank_square(KING_FILE, color)
    }

    pub const fn rook_from(self, color: Color) -> Square {
        backrank_square(self.rook_from_file(), color)
    }

    pub const fn king_to(self, color: Color) -> Square {
        backrank_square(self.king_to_file(), color)
    }

    pub const fn rook_to(self, color: Color) -> Square {
        backrank_square(self.rook_to_file(), color)
    }

    /// Files strictly between king and rook, which must be empty.
    pub const fn between_files(self) -> &'static [u8] {
        match self {
            CastlingSide::KingSide => &[5, 6],
            CastlingSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Files the king stands on while castling: start, pass-through and
    /// landing. None of them may be attacked.
    pub const fn king_transit_files(self) -> [u8; 3] {
        match self {
            CastlingSide::KingSide => [4, 5, 6],
            CastlingSide::QueenSide => [2, 3, 4],
        }
    }

    /// `QueenSide` and `KingSide`, in this order.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::QueenSide, CastlingSide::KingSide];
}

const fn backrank_square(file: u8, color: Color) -> Square {
    // Both coordinates are below 8.
    match Square::from_coords(file, color.backrank()) {
        Some(sq) => sq,
        None => Square::A1,
    }
}

/// Container with values for each [`CastlingSide`].
///
/// Castling rights of one color are a `ByCastlingSide<bool>`.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct ByCastlingSide<T> {
    pub queen_side: T,
    pub king_side: T,
}

impl<T> ByCastlingSide<T> {
    #[inline]
    pub fn new_with<F>(mut init: F) -> ByCastlingSide<T>
    where
        F: FnMut(CastlingSide) -> T,
    {
        ByCastlingSide {
            queen_side: init(CastlingSide::QueenSide),
            king_side: init(CastlingSide::KingSide),
        }
    }

    #[inline]
    pub const fn get(&self, side: CastlingSide) -> &T {
        match side {
            CastlingSide::KingSide => &self.king_side,
            CastlingSide::QueenSide => &self.queen_side,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, side: CastlingSide) -> &mut T {
        match side {
            CastlingSide::KingSide => &mut self.king_side,
            CastlingSide::QueenSide => &mut self.queen_side,
        }
    }

    #[inline]
    pub fn map<U, F>(self, mut f: F) -> ByCastlingSide<U>
    where
        F: FnMut(T) -> U,
    {
        ByCastlingSide {
            queen_side: f(self.queen_side),
            king_side: f(self.king_side),
        }
    }
}

impl ByCastlingSide<bool> {
    /// Both wings available.
    pub const BOTH: ByCastlingSide<bool> = ByCastlingSide {
        queen_side: true,
        king_side: true,
    };

    /// Neither wing available.
    pub const NONE: ByCastlingSide<bool> = ByCastlingSide {
        queen_side: false,
        king_side: false,
    };

    pub const fn any(self) -> bool {
        self.queen_side || self.king_side
    }
}

impl<T> ops::Index<CastlingSide> for ByCastlingSide<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: CastlingSide) -> &T {
        self.get(index)
    }
}

impl<T> ops::IndexMut<CastlingSide> for ByCastlingSide<T> {
    #[inline]
    fn index_mut(&mut self, index: CastlingSide) -> &mut T {
        self.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_castle_squares() {
        assert_eq!(CastlingSide::king_from(Color::White), Square::E1);
        assert_eq!(CastlingSide::king_from(Color::Black), Square::E8);
        assert_eq!(CastlingSide::KingSide.rook_from(Color::White), Square::H1);
        assert_eq!(CastlingSide::QueenSide.rook_from(Color::Black), Square::A8);
        assert_eq!(CastlingSide::KingSide.king_to(Color::White), Square::G1);
        assert_eq!(CastlingSide::KingSide.rook_to(Color::White), Square::F1);
        assert_eq!(CastlingSide::QueenSide.king_to(Color::Black), Square::C8);
        assert_eq!(CastlingSide::QueenSide.rook_to(Color::Black), Square::D8);
    }

    #[test]
    fn test_by_castling_side() {
        let mut rights = ByCastlingSide::BOTH;
        rights[CastlingSide::QueenSide] = false;
        assert!(!rights.queen_side);
        assert!(rights.any());
        assert!(!ByCastlingSide::NONE.any());
    }
}
