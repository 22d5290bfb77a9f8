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

//! A library for the rules of standard chess: board state, legal moves and
//! game end detection.
//!
//! # Examples
//!
//! Query legal moves in the starting position:
//!
//! ```
//! use rulechess::{Chess, Square};
//!
//! let pos = Chess::default();
//! assert_eq!(pos.legal_moves().len(), 20);
//! assert_eq!(pos.legal_moves_from(Square::G1).len(), 2);
//! ```
//!
//! Play moves:
//!
//! ```
//! use rulechess::{Chess, Color, Role, Square};
//!
//! let mut pos = Chess::default();
//!
//! // 1. e4
//! pos.make_move(Square::E2, Square::E4, None)?;
//! assert_eq!(pos.turn(), Color::Black);
//!
//! // Illegal moves are rejected and leave the position as it was.
//! assert!(pos.make_move(Square::E4, Square::E5, Some(Role::Queen)).is_err());
//! assert_eq!(pos.turn(), Color::Black);
//! # Ok::<_, rulechess::PlayError>(())
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! # use rulechess::Chess;
//! # let pos = Chess::default();
//! assert!(!pos.is_checkmate());
//! assert!(!pos.is_stalemate());
//! assert_eq!(pos.outcome(), None); // no winner yet
//! ```
//!
//! Castling is a move of the king onto its own rook (or of the rook onto
//! its own king). Positions other than the starting position are built from
//! a [`Setup`] and validated by [`Chess::from_setup()`].
//!
//! # Feature flags
//!
//! * `cli`: Builds the `rulechess` binary. Enabled by default.
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   plain value types.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod castling_side;
mod color;
mod m;
mod perft;
mod position;
mod role;
mod setup;
mod square;
mod types;

pub mod attacks;
pub mod board;
pub mod movegen;

pub use board::Board;
pub use castling_side::{ByCastlingSide, CastlingSide};
pub use color::{ByColor, Color, ParseColorError};
pub use m::{Move, MoveList, SquareMoves};
pub use perft::{perft, split_perft};
pub use position::{Chess, Outcome, PlayError, PositionError, PositionErrorKinds};
pub use role::{Direction, Role};
pub use setup::Setup;
pub use square::{ParseSquareError, Square};
pub use types::Piece;

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}
