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

//! Pseudo-legal move generation: moves that respect how pieces move and
//! which squares are occupied, but may still leave the own king in check.

use crate::{
    attacks,
    castling_side::{ByCastlingSide, CastlingSide},
    m::{Move, SquareMoves},
    role::Role,
    setup::Setup,
    square::Square,
    types::Piece,
};

/// Generates the pseudo-legal moves of the piece on `from`.
///
/// Empty if the square is empty or holds a piece of the side not to move.
pub fn pseudo_moves(setup: &Setup, from: Square) -> SquareMoves {
    let mut moves = SquareMoves::new();

    match setup.board.piece_at(from) {
        Some(piece) if piece.color == setup.turn => {
            if piece.role == Role::Pawn {
                gen_pawn_moves(setup, from, &mut moves);
            } else {
                gen_castling_moves(setup, from, piece, &mut moves);
                gen_piece_moves(setup, from, piece, &mut moves);
            }
        }
        _ => (),
    }

    moves
}

/// Which wings the side to move may castle on right now: the right is
/// still held, the squares between king and rook are empty and none of the
/// squares the king stands on while castling is attacked.
pub fn can_castle(setup: &Setup) -> ByCastlingSide<bool> {
    let us = setup.turn;
    let backrank = us.backrank();
    let board = &setup.board;

    ByCastlingSide::new_with(|side| {
        setup.castles[us][side]
            && side.between_files().iter().all(|&file| {
                Square::from_coords(file, backrank).is_some_and(|sq| !board.is_occupied(sq))
            })
            && side.king_transit_files().iter().all(|&file| {
                Square::from_coords(file, backrank)
                    .is_some_and(|sq| !attacks::is_attacked(board, sq, !us))
            })
    })
}

fn gen_castling_moves(setup: &Setup, from: Square, piece: Piece, moves: &mut SquareMoves) {
    if !matches!(piece.role, Role::King | Role::Rook) {
        return;
    }

    let king = CastlingSide::king_from(piece.color);
    let rights = can_castle(setup);

    for side in CastlingSide::ALL {
        if !rights[side] {
            continue;
        }

        let rook = side.rook_from(piece.color);
        if piece.role == Role::King && from == king {
            moves.push(Move::new(king, rook));
        } else if piece.role == Role::Rook && from == rook {
            moves.push(Move::new(rook, king));
        }
    }
}

fn gen_piece_moves(setup: &Setup, from: Square, piece: Piece, moves: &mut SquareMoves) {
    for &direction in piece.directions() {
        let mut current = from.offset(direction);
        while let Some(to) = current {
            match setup.board.color_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(color) => {
                    if color != piece.color {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }

            if !piece.slides() {
                break;
            }
            current = to.offset(direction);
        }
    }
}

fn gen_pawn_moves(setup: &Setup, from: Square, moves: &mut SquareMoves) {
    let us = setup.turn;
    let forward = us.forward();
    let start_rank = (us.backrank() as i8 + forward) as u8;

    if let Some(to) = from.offset((0, forward)) {
        if !setup.board.is_occupied(to) {
            push_pawn_moves(moves, from, to);

            if from.rank() == start_rank {
                if let Some(double) = to.offset((0, forward)) {
                    if !setup.board.is_occupied(double) {
                        moves.push(Move::new(from, double));
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        let Some(to) = from.offset((df, forward)) else {
            continue;
        };

        match setup.board.color_at(to) {
            Some(color) if color != us => push_pawn_moves(moves, from, to),
            Some(_) => (),
            None => {
                if setup.ep_file == Some(to.file()) && to.rank() == Setup::ep_rank(us) {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }
}

fn push_pawn_moves(moves: &mut SquareMoves, from: Square, to: Square) {
    if to.rank() == 0 || to.rank() == 7 {
        for role in Role::PROMOTIONS {
            moves.push(Move::with_promotion(from, to, role));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}
