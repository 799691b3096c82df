//! Conversions between algebraic square names (e.g. `e4`) and coordinates.
//!
//! Also splits the move strings typed at the command line (`e2e4`, `e2 e4`)
//! into their two squares.

use crate::chess_errors::ChessErrors;
use crate::game_state::coordinate::Coordinate;

/// Convert algebraic notation (for example `"e4"`) to a coordinate.
///
/// Exactly two characters are accepted: a file `a`-`h` then a rank `1`-`8`.
#[inline]
pub fn algebraic_to_coordinate(square: &str) -> Result<Coordinate, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::MalformedNotation(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::MalformedNotation(square.to_owned()));
    }

    Ok(Coordinate::new((file - b'a') as i8, (rank - b'1') as i8))
}

/// Convert an on-board coordinate to algebraic notation (for example `"e4"`).
#[inline]
pub fn coordinate_to_algebraic(coordinate: Coordinate) -> Option<String> {
    if !coordinate.is_on_board() {
        return None;
    }

    let file_char = char::from(b'a' + coordinate.file() as u8);
    let rank_char = char::from(b'1' + coordinate.rank() as u8);
    Some(format!("{file_char}{rank_char}"))
}

/// Split a typed move into its origin and destination squares.
///
/// Accepts the compact form `e2e4` and whitespace separated `e2 e4`.
pub fn parse_square_pair(text: &str) -> Result<(Coordinate, Coordinate), ChessErrors> {
    let text = text.trim();
    let mut parts = text.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(from), Some(to), None) => Ok((
            algebraic_to_coordinate(from)?,
            algebraic_to_coordinate(to)?,
        )),
        (Some(compact), None, None) if compact.len() == 4 && compact.is_ascii() => Ok((
            algebraic_to_coordinate(&compact[..2])?,
            algebraic_to_coordinate(&compact[2..])?,
        )),
        _ => Err(ChessErrors::MalformedNotation(text.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_coordinate, coordinate_to_algebraic, parse_square_pair};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::coordinate::Coordinate;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(
            algebraic_to_coordinate("a1").expect("a1 should parse"),
            Coordinate::new(0, 0)
        );
        assert_eq!(
            algebraic_to_coordinate("h8").expect("h8 should parse"),
            Coordinate::new(7, 7)
        );
        assert_eq!(coordinate_to_algebraic(Coordinate::new(4, 3)).as_deref(), Some("e4"));
        assert_eq!(coordinate_to_algebraic(Coordinate::new(8, 0)), None);
    }

    #[test]
    fn rejects_anything_but_two_valid_characters() {
        for bad in ["", "e", "e44", "i1", "a0", "a9", "E4", " e4", "4e", "éa"] {
            assert!(
                matches!(algebraic_to_coordinate(bad), Err(ChessErrors::MalformedNotation(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn square_pairs_accept_compact_and_spaced_forms() {
        let e2 = Coordinate::new(4, 1);
        let e4 = Coordinate::new(4, 3);
        assert_eq!(parse_square_pair("e2e4").expect("compact form"), (e2, e4));
        assert_eq!(parse_square_pair("  e2   e4 ").expect("spaced form"), (e2, e4));
        assert!(parse_square_pair("e2e").is_err());
        assert!(parse_square_pair("e2 e4 e5").is_err());
        assert!(parse_square_pair("e2x4").is_err());
    }
}
