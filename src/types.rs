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
    role::{Direction, Role},
};

/// A piece with [`Color`] and [`Role`].
///
/// Pieces are plain values compared by color and role. The twelve that can
/// exist are listed in [`Piece::ALL`].
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    #[inline]
    pub const fn directions(self) -> &'static [Direction] {
        self.role.directions()
    }

    #[inline]
    pub const fn slides(self) -> bool {
        self.role.slides()
    }

    /// Two character code, e.g. `WN` for a white knight.
    pub fn code(self) -> [char; 2] {
        [self.color.initial(), self.role.upper_char()]
    }

    /// Every piece, white first, each color in [`Role::ALL`] order.
    pub const ALL: [Piece; 12] = [
        Role::Pawn.of(Color::White),
        Role::Knight.of(Color::White),
        Role::Bishop.of(Color::White),
        Role::Rook.of(Color::White),
        Role::Queen.of(Color::White),
        Role::King.of(Color::White),
        Role::Pawn.of(Color::Black),
        Role::Knight.of(Color::Black),
        Role::Bishop.of(Color::Black),
        Role::Rook.of(Color::Black),
        Role::Queen.of(Color::Black),
        Role::King.of(Color::Black),
    ];
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [color, role] = self.code();
        f.write_char(color)?;
        f.write_char(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog() {
        for (i, a) in Piece::ALL.iter().enumerate() {
            for b in &Piece::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(Piece::ALL[5], Color::White.king());
        assert_eq!(Piece::ALL[7].to_string(), "BN");
    }
}
