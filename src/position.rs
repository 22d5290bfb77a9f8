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

use std::{array, error::Error, fmt};

use bitflags::bitflags;
use log::{debug, trace};

use crate::{
    attacks,
    board::Board,
    castling_side::{ByCastlingSide, CastlingSide},
    color::{ByColor, Color},
    m::{Move, MoveList, SquareMoves},
    movegen,
    role::Role,
    setup::Setup,
    square::Square,
};

/// Outcome of a game.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The side to move is checkmated.
    Decisive { winner: Color },
    /// The side to move has no legal moves but is not in check.
    Draw,
}

impl Outcome {
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Decisive { winner } => Some(winner),
            Outcome::Draw => None,
        }
    }

    pub const fn is_decisive(self) -> bool {
        matches!(self, Outcome::Decisive { .. })
    }

    pub const fn is_draw(self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Outcome::Decisive {
                winner: Color::White,
            } => "1-0",
            Outcome::Decisive {
                winner: Color::Black,
            } => "0-1",
            Outcome::Draw => "1/2-1/2",
        })
    }
}

/// Error when trying to play an illegal move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlayError {
    m: Move,
}

impl PlayError {
    /// The rejected move, as requested.
    pub fn rejected(&self) -> Move {
        self.m
    }
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move {}", self.m)
    }
}

impl Error for PlayError {}

bitflags! {
    /// Reasons for a [`Setup`] not being a legal [`Chess`] position.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct PositionErrorKinds: u32 {
        /// A side has no king.
        const MISSING_KING = 1 << 0;

        /// A side has more than one king.
        const TOO_MANY_KINGS = 1 << 1;

        /// A side has more than 16 pieces.
        const TOO_MANY_PIECES = 1 << 2;

        /// A side has more than 8 pawns.
        const TOO_MANY_PAWNS = 1 << 3;

        /// There are pawns on the first or last rank.
        const PAWNS_ON_BACKRANK = 1 << 4;

        /// A castling right is held without the king and the rook of that
        /// wing on their home squares.
        const INVALID_CASTLING_RIGHTS = 1 << 5;

        /// The en passant file does not belong to a pawn that has just been
        /// pushed two squares next to a pawn that could capture it.
        const INVALID_EP_FILE = 1 << 6;

        /// The player not to move is in check.
        const OPPOSITE_CHECK = 1 << 7;
    }
}

const ERROR_DESCRIPTIONS: [(PositionErrorKinds, &str); 8] = [
    (PositionErrorKinds::MISSING_KING, "missing king"),
    (PositionErrorKinds::TOO_MANY_KINGS, "too many kings"),
    (PositionErrorKinds::TOO_MANY_PIECES, "too many pieces"),
    (PositionErrorKinds::TOO_MANY_PAWNS, "too many pawns"),
    (PositionErrorKinds::PAWNS_ON_BACKRANK, "pawns on backrank"),
    (
        PositionErrorKinds::INVALID_CASTLING_RIGHTS,
        "invalid castling rights",
    ),
    (PositionErrorKinds::INVALID_EP_FILE, "invalid en passant file"),
    (PositionErrorKinds::OPPOSITE_CHECK, "opposite check"),
];

/// Error when trying to create a [`Chess`] position from an illegal
/// [`Setup`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionError {
    errors: PositionErrorKinds,
}

impl PositionError {
    pub fn kinds(&self) -> PositionErrorKinds {
        self.errors
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("illegal position: ")?;

        let mut first = true;
        for (kind, description) in ERROR_DESCRIPTIONS {
            if self.errors.contains(kind) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(description)?;
                first = false;
            }
        }

        Ok(())
    }
}

impl Error for PositionError {}

/// A standard chess position with its legal moves.
///
/// Every way of obtaining a `Chess` value computes the legal moves of
/// every square, and every move played recomputes them, so that move queries
/// are always answered from an up to date cache.
///
/// # Examples
///
/// ```
/// use rulechess::{Chess, Color, Square};
///
/// let mut pos = Chess::new();
/// assert_eq!(pos.legal_moves().len(), 20);
///
/// pos.make_move(Square::F2, Square::F3, None)?;
/// pos.make_move(Square::E7, Square::E5, None)?;
/// pos.make_move(Square::G2, Square::G4, None)?;
/// pos.make_move(Square::D8, Square::H4, None)?;
///
/// assert!(pos.is_checkmate());
/// assert_eq!(pos.winner(), Some(Color::Black));
/// # Ok::<_, rulechess::PlayError>(())
/// ```
#[derive(Clone)]
pub struct Chess {
    setup: Setup,
    legals: [SquareMoves; 64],
    outcome: Option<Outcome>,
}

impl Chess {
    /// The standard starting position, white to move.
    pub fn new() -> Chess {
        Chess::from_setup_unchecked(Setup::default())
    }

    /// Validates a [`Setup`] and computes its legal moves.
    ///
    /// # Errors
    ///
    /// Errors if the setup violates any of the [`PositionErrorKinds`].
    pub fn from_setup(setup: Setup) -> Result<Chess, PositionError> {
        let errors = validate(&setup);
        if errors.is_empty() {
            Ok(Chess::from_setup_unchecked(setup))
        } else {
            debug!("rejected setup: {errors:?}");
            Err(PositionError { errors })
        }
    }

    fn from_setup_unchecked(setup: Setup) -> Chess {
        let mut pos = Chess {
            setup,
            legals: array::from_fn(|_| SquareMoves::new()),
            outcome: None,
        };
        pos.recompute();
        pos
    }

    pub fn board(&self) -> &Board {
        &self.setup.board
    }

    pub fn turn(&self) -> Color {
        self.setup.turn
    }

    pub fn castles(&self) -> &ByColor<ByCastlingSide<bool>> {
        &self.setup.castles
    }

    pub fn ep_file(&self) -> Option<u8> {
        self.setup.ep_file
    }

    pub fn setup(&self) -> &Setup {
        &self.setup
    }

    pub fn into_setup(self) -> Setup {
        self.setup
    }

    /// Legal moves of the piece on `sq`.
    ///
    /// For the king and a castling rook this includes the castling move,
    /// encoded as king to rook or rook to king respectively.
    pub fn legal_moves_from(&self, sq: Square) -> &[Move] {
        &self.legals[sq.index()]
    }

    /// All legal moves, each castle listed once (king to rook).
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for sq in Square::all() {
            let from_rook = self.setup.board.role_at(sq) == Some(Role::Rook);
            moves.extend(
                self.legal_moves_from(sq)
                    .iter()
                    .copied()
                    .filter(|&m| !(from_rook && self.castling_side(m).is_some())),
            );
        }
        moves
    }

    /// Tests if this exact move is legal, including its promotion field.
    pub fn is_legal(&self, m: Move) -> bool {
        self.legal_moves_from(m.from).contains(&m)
    }

    /// Gets the castling side if `m` is castling in this position.
    pub fn castling_side(&self, m: Move) -> Option<CastlingSide> {
        self.setup.castling_side(m)
    }

    /// Validates and plays a move given by its squares.
    ///
    /// The promotion choice defaults to a queen and is ignored for moves
    /// that do not promote.
    ///
    /// # Errors
    ///
    /// Errors if no legal move of the piece on `from` matches. The
    /// position is left unchanged.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<Move, PlayError> {
        let choice = promotion.unwrap_or(Role::Queen);
        let found = self
            .legal_moves_from(from)
            .iter()
            .copied()
            .find(|m| m.matches(from, to, choice));

        match found {
            Some(m) => {
                self.play_unchecked(m);
                Ok(m)
            }
            None => {
                let m = Move { from, to, promotion };
                debug!("rejected {m}");
                Err(PlayError { m })
            }
        }
    }

    /// Validates and plays an exact move, returning the new position.
    ///
    /// # Errors
    ///
    /// Errors if the move is not legal.
    pub fn play(mut self, m: Move) -> Result<Chess, PlayError> {
        if self.is_legal(m) {
            self.play_unchecked(m);
            Ok(self)
        } else {
            debug!("rejected {m}");
            Err(PlayError { m })
        }
    }

    /// Plays a move without validating it, then recomputes legal moves.
    ///
    /// Playing an illegal move leads to an inconsistent but memory safe
    /// position.
    pub fn play_unchecked(&mut self, m: Move) {
        debug!("{} plays {m}", self.setup.turn);
        self.setup.play_unchecked(m);
        self.recompute();
    }

    /// Whether the side to move is in check.
    pub fn is_check(&self) -> bool {
        let us = self.setup.turn;
        self.setup
            .board
            .king_of(us)
            .is_some_and(|king| attacks::is_attacked(&self.setup.board, king, !us))
    }

    /// Castling wings available to the side to move: the right is held,
    /// the squares between king and rook are empty, and the king's start,
    /// pass-through and landing squares are not attacked.
    pub fn can_castle(&self) -> ByCastlingSide<bool> {
        movegen::can_castle(&self.setup)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The side that checkmated the side to move, if any.
    ///
    /// Stalemate is a draw and has no winner.
    pub fn winner(&self) -> Option<Color> {
        self.outcome.and_then(Outcome::winner)
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_checkmate(&self) -> bool {
        self.outcome.is_some_and(Outcome::is_decisive)
    }

    pub fn is_stalemate(&self) -> bool {
        self.outcome.is_some_and(Outcome::is_draw)
    }

    fn recompute(&mut self) {
        let mut total = 0;

        for sq in Square::all() {
            let mut moves = movegen::pseudo_moves(&self.setup, sq);
            moves.retain(|m| is_safe(&self.setup, *m));
            total += moves.len();
            self.legals[sq.index()] = moves;
        }

        trace!("{} has {total} legal moves", self.setup.turn);

        self.outcome = if total > 0 {
            None
        } else if self.is_check() {
            Some(Outcome::Decisive {
                winner: !self.setup.turn,
            })
        } else {
            Some(Outcome::Draw)
        };

        if let Some(outcome) = self.outcome {
            debug!("game over: {outcome}");
        }
    }
}

impl Default for Chess {
    fn default() -> Chess {
        Chess::new()
    }
}

impl fmt::Debug for Chess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chess")
            .field("setup", &self.setup)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Chess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} to move", self.setup.board, self.setup.turn)
    }
}

/// Plays the move on a copy and tests that the mover's king is not left
/// attacked.
fn is_safe(setup: &Setup, m: Move) -> bool {
    let us = setup.turn;
    let mut after = setup.clone();
    after.play_unchecked(m);

    match after.board.king_of(us) {
        Some(king) => !attacks::is_attacked(&after.board, king, !us),
        None => true,
    }
}

fn validate(setup: &Setup) -> PositionErrorKinds {
    let board = &setup.board;
    let mut errors = PositionErrorKinds::empty();

    for color in Color::ALL {
        match board.squares_of(color.king()).count() {
            0 => errors |= PositionErrorKinds::MISSING_KING,
            1 => (),
            _ => errors |= PositionErrorKinds::TOO_MANY_KINGS,
        }

        if board.pieces().filter(|&(_, piece)| piece.color == color).count() > 16 {
            errors |= PositionErrorKinds::TOO_MANY_PIECES;
        }
        if board.squares_of(color.pawn()).count() > 8 {
            errors |= PositionErrorKinds::TOO_MANY_PAWNS;
        }

        for side in CastlingSide::ALL {
            if setup.castles[color][side]
                && (board.piece_at(CastlingSide::king_from(color)) != Some(color.king())
                    || board.piece_at(side.rook_from(color)) != Some(color.rook()))
            {
                errors |= PositionErrorKinds::INVALID_CASTLING_RIGHTS;
            }
        }
    }

    if board
        .pieces()
        .any(|(sq, piece)| piece.role == Role::Pawn && (sq.rank() == 0 || sq.rank() == 7))
    {
        errors |= PositionErrorKinds::PAWNS_ON_BACKRANK;
    }

    if setup.ep_file.is_some() && !is_valid_ep_file(setup) {
        errors |= PositionErrorKinds::INVALID_EP_FILE;
    }

    let them = !setup.turn;
    if board
        .king_of(them)
        .is_some_and(|king| attacks::is_attacked(board, king, setup.turn))
    {
        errors |= PositionErrorKinds::OPPOSITE_CHECK;
    }

    errors
}

fn is_valid_ep_file(setup: &Setup) -> bool {
    let us = setup.turn;
    let Some(target) = setup.ep_square() else {
        return false;
    };
    let (Some(pushed), Some(origin)) = (
        target.offset((0, -us.forward())),
        target.offset((0, us.forward())),
    ) else {
        return false;
    };

    let board = &setup.board;
    board.piece_at(pushed) == Some((!us).pawn())
        && !board.is_occupied(target)
        && !board.is_occupied(origin)
        && [-1, 1]
            .into_iter()
            .filter_map(|df| pushed.offset((df, 0)))
            .any(|sq| board.piece_at(sq) == Some(us.pawn()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_with(turn: Color, pieces: &[(Square, crate::Piece)]) -> Setup {
        let mut setup = Setup::empty();
        setup.turn = turn;
        for &(sq, piece) in pieces {
            setup.board.set_piece_at(sq, piece);
        }
        setup
    }

    #[test]
    fn test_initial_legal_moves() {
        let pos = Chess::new();
        assert_eq!(pos.legal_moves().len(), 20);
        assert_eq!(pos.legal_moves_from(Square::B1).len(), 2);
        assert!(pos.legal_moves_from(Square::E1).is_empty());
        assert!(pos.legal_moves_from(Square::E7).is_empty());
        assert_eq!(pos.outcome(), None);
        assert!(!pos.is_check());
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        let setup = setup_with(
            Color::White,
            &[
                (Square::E1, Color::White.king()),
                (Square::E2, Color::White.knight()),
                (Square::E8, Color::Black.rook()),
                (Square::A8, Color::Black.king()),
            ],
        );
        let pos = Chess::from_setup(setup).expect("legal position");
        assert!(pos.legal_moves_from(Square::E2).is_empty());
        assert!(!pos.legal_moves_from(Square::E1).is_empty());
    }

    #[test]
    fn test_illegal_move_leaves_position() {
        let mut pos = Chess::new();
        let err = pos
            .make_move(Square::E2, Square::E5, None)
            .expect_err("too far");
        assert_eq!(err.rejected(), Move::new(Square::E2, Square::E5));
        assert_eq!(err.to_string(), "illegal move e2-e5");
        assert_eq!(pos.turn(), Color::White);
        assert_eq!(pos.board(), &Board::new());

        assert!(pos.clone().play(Move::new(Square::E7, Square::E5)).is_err());
        let pos = pos.play(Move::new(Square::E2, Square::E4)).expect("legal");
        assert_eq!(pos.turn(), Color::Black);
    }

    #[test]
    fn test_validate() {
        let err = Chess::from_setup(Setup::empty()).expect_err("no kings");
        assert_eq!(err.kinds(), PositionErrorKinds::MISSING_KING);

        let mut setup = setup_with(
            Color::White,
            &[
                (Square::E1, Color::White.king()),
                (Square::E8, Color::Black.king()),
                (Square::A1, Color::Black.pawn()),
                (Square::E2, Color::White.rook()),
            ],
        );
        setup.castles.white = ByCastlingSide::BOTH;
        let err = Chess::from_setup(setup).expect_err("illegal");
        assert_eq!(
            err.kinds(),
            PositionErrorKinds::PAWNS_ON_BACKRANK
                | PositionErrorKinds::INVALID_CASTLING_RIGHTS
                | PositionErrorKinds::OPPOSITE_CHECK
        );
        assert_eq!(
            err.to_string(),
            "illegal position: pawns on backrank, invalid castling rights, opposite check"
        );
    }

    #[test]
    fn test_validate_material() {
        let mut setup = setup_with(
            Color::White,
            &[
                (Square::A1, Color::White.king()),
                (Square::H8, Color::Black.king()),
            ],
        );
        for sq in Square::all().filter(|sq| (1..4).contains(&sq.rank())) {
            setup.board.set_piece_at(sq, Color::White.queen());
        }
        let err = Chess::from_setup(setup).expect_err("too many pieces");
        assert!(err.kinds().contains(PositionErrorKinds::TOO_MANY_PIECES));
        assert!(!err.kinds().contains(PositionErrorKinds::TOO_MANY_PAWNS));

        let mut setup = setup_with(
            Color::White,
            &[
                (Square::E1, Color::White.king()),
                (Square::E8, Color::Black.king()),
                (Square::A3, Color::White.pawn()),
            ],
        );
        for sq in Square::all().filter(|sq| sq.rank() == 1) {
            setup.board.set_piece_at(sq, Color::White.pawn());
        }
        assert_eq!(
            Chess::from_setup(setup).expect_err("nine pawns").kinds(),
            PositionErrorKinds::TOO_MANY_PAWNS
        );
    }

    #[test]
    fn test_full_material_move_count() {
        let mut setup = setup_with(
            Color::White,
            &[
                (Square::A1, Color::White.king()),
                (Square::H8, Color::Black.king()),
                (Square::G8, Color::Black.knight()),
                (Square::G7, Color::Black.pawn()),
                (Square::H7, Color::Black.pawn()),
            ],
        );
        for sq in Square::all().skip(1).take(15) {
            setup.board.set_piece_at(sq, Color::White.queen());
        }
        let pos = Chess::from_setup(setup).expect("sixteen white pieces");
        let per_square: usize = Square::all().map(|sq| pos.legal_moves_from(sq).len()).sum();
        assert!(per_square > 0);
        assert_eq!(pos.legal_moves().len(), per_square);
    }

    #[test]
    fn test_validate_ep_file() {
        let mut setup = setup_with(
            Color::White,
            &[
                (Square::E1, Color::White.king()),
                (Square::E8, Color::Black.king()),
                (Square::D5, Color::Black.pawn()),
                (Square::E5, Color::White.pawn()),
            ],
        );
        setup.ep_file = Some(3);
        let pos = Chess::from_setup(setup.clone()).expect("valid en passant file");
        assert!(pos.is_legal(Move::new(Square::E5, Square::D6)));

        setup.ep_file = Some(4);
        assert_eq!(
            Chess::from_setup(setup).expect_err("no pawn pushed").kinds(),
            PositionErrorKinds::INVALID_EP_FILE
        );
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(
            Outcome::Decisive {
                winner: Color::White
            }
            .to_string(),
            "1-0"
        );
        assert_eq!(Outcome::Draw.to_string(), "1/2-1/2");
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
