use rulechess::{ByCastlingSide, Chess, Color, Role, Setup, Square};

/// Builds a position from eight rows of piece letters, rank 8 first.
/// Uppercase letters are white, lowercase black, `.` is empty.
///
/// `castles` uses `K`, `Q`, `k`, `q` for the rights that are held.
pub fn position(rows: [&str; 8], turn: Color, castles: &str) -> Chess {
    let mut setup = Setup::empty();
    setup.turn = turn;

    for (i, row) in rows.iter().enumerate() {
        let rank = 7 - i as u8;
        assert_eq!(row.len(), 8, "row {row:?} must have 8 squares");
        for (file, ch) in row.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let role = Role::from_char(ch).expect("piece letter");
            let color = Color::from_white(ch.is_ascii_uppercase());
            let sq = Square::from_coords(file as u8, rank).expect("on board");
            setup.board.set_piece_at(sq, role.of(color));
        }
    }

    setup.castles.white = ByCastlingSide {
        king_side: castles.contains('K'),
        queen_side: castles.contains('Q'),
    };
    setup.castles.black = ByCastlingSide {
        king_side: castles.contains('k'),
        queen_side: castles.contains('q'),
    };

    Chess::from_setup(setup).expect("legal position")
}
