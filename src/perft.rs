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

//! Count legal move paths.
//!
//! # Examples
//!
//! ```
//! use rulechess::{perft, Chess};
//!
//! let pos = Chess::default();
//! assert_eq!(perft(&pos, 1), 20);
//! assert_eq!(perft(&pos, 2), 400);
//! ```

use crate::{m::Move, position::Chess};

/// Counts legal move paths of a given length.
///
/// Paths with mate or stalemate are not counted unless it occurs in the final
/// position. Castling is counted once per wing. Useful for comparing, testing
/// and debugging move generation correctness.
pub fn perft(pos: &Chess, depth: u32) -> u64 {
    if depth < 1 {
        1
    } else {
        let moves = pos.legal_moves();

        if depth == 1 {
            moves.len() as u64
        } else {
            moves
                .iter()
                .map(|&m| {
                    let mut child = pos.clone();
                    child.play_unchecked(m);
                    perft(&child, depth - 1)
                })
                .sum()
        }
    }
}

/// Like [`perft()`], but returns the node count below each legal move.
pub fn split_perft(pos: &Chess, depth: u32) -> Vec<(Move, u64)> {
    if depth < 1 {
        return Vec::new();
    }

    pos.legal_moves()
        .iter()
        .map(|&m| {
            let mut child = pos.clone();
            child.play_unchecked(m);
            (m, perft(&child, depth - 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn test_depth_zero() {
        assert_eq!(perft(&Chess::new(), 0), 1);
        assert!(split_perft(&Chess::new(), 0).is_empty());
    }

    #[test]
    fn test_split_sums_to_total() {
        let pos = Chess::new();
        let split = split_perft(&pos, 2);
        assert_eq!(split.len(), 20);
        assert!(split.iter().all(|&(_, nodes)| nodes == 20));
        assert_eq!(
            split.iter().map(|&(_, nodes)| nodes).sum::<u64>(),
            perft(&pos, 2)
        );
        assert!(split.contains(&(Move::new(Square::G1, Square::F3), 20)));
    }
}
