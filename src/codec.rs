//! Packing of a room's four walls into one hex symbol
//!
//! Each closed wall sets one bit of the symbol: East is worth 8, West 4,
//! South 2 and North 1. A room walled on every side is `f`, a room open
//! in every direction is `0`.

use crate::error::MazeError;
use crate::grid::{Direction, Wall};

/// Largest valid symbol
pub const MAX_SYMBOL: u32 = 15;

/// Bit set in the symbol when the wall in `dir` is closed
pub const fn weight(dir: Direction) -> u8 {
    match dir {
        Direction::East => 8,
        Direction::West => 4,
        Direction::South => 2,
        Direction::North => 1,
    }
}

/// Pack wall states into a symbol in `0..=15`
///
/// # Examples
/// ```
/// use hexmaze::codec::encode;
/// use hexmaze::grid::Wall::{Closed, Open};
///
/// // North, South, West closed; East open
/// assert_eq!(encode(&[Closed, Closed, Closed, Open]), 7);
/// ```
pub fn encode(connections: &[Wall; 4]) -> u8 {
    Direction::ALL
        .into_iter()
        .filter(|dir| connections[dir.index()] == Wall::Closed)
        .map(weight)
        .sum()
}

/// Unpack a symbol into wall states
///
/// Returns error, if the symbol does not fit in four bits.
pub fn decode(symbol: u32) -> Result<[Wall; 4], MazeError> {
    if symbol > MAX_SYMBOL {
        return Err(MazeError::SymbolOutOfRange(symbol));
    }
    Ok(Direction::ALL.map(|dir| {
        if symbol & u32::from(weight(dir)) != 0 {
            Wall::Closed
        } else {
            Wall::Open
        }
    }))
}

/// Lowercase hex digit of a symbol
pub fn to_hex_digit(symbol: u8) -> Result<char, MazeError> {
    char::from_digit(u32::from(symbol), MAX_SYMBOL + 1)
        .ok_or(MazeError::SymbolOutOfRange(u32::from(symbol)))
}

/// Symbol of a hex digit, either case
pub fn from_hex_digit(ch: char) -> Option<u32> {
    ch.to_digit(MAX_SYMBOL + 1)
}

#[cfg(test)]
mod tests {
    use crate::codec::{decode, encode, from_hex_digit, to_hex_digit, weight};
    use crate::error::MazeError;
    use crate::grid::Direction;
    use crate::grid::Wall::{Closed, Open};

    #[test]
    fn weights_are_distinct_bits() {
        let total: u8 = Direction::ALL.into_iter().map(weight).sum();
        assert_eq!(total, 15);
        for dir in Direction::ALL {
            assert_eq!(weight(dir).count_ones(), 1);
        }
    }

    #[test]
    fn encode_known_rooms() {
        assert_eq!(encode(&[Closed; 4]), 15);
        assert_eq!(encode(&[Open; 4]), 0);
        // West open
        assert_eq!(encode(&[Closed, Closed, Open, Closed]), 11);
        // North and South open
        assert_eq!(encode(&[Open, Open, Closed, Closed]), 12);
    }

    #[test]
    fn decode_checks_bits_from_east_down() {
        assert_eq!(decode(8).unwrap(), [Open, Open, Open, Closed]);
        assert_eq!(decode(5).unwrap(), [Closed, Open, Closed, Open]);
        assert_eq!(decode(0xb).unwrap(), [Closed, Closed, Open, Closed]);
    }

    #[test]
    fn every_symbol_survives_decode_then_encode() {
        for symbol in 0..=15u32 {
            let walls = decode(symbol).unwrap();
            assert_eq!(u32::from(encode(&walls)), symbol);
            assert_eq!(decode(u32::from(encode(&walls))).unwrap(), walls);
        }
    }

    #[test]
    fn out_of_range_symbol_is_rejected() {
        assert_eq!(decode(16), Err(MazeError::SymbolOutOfRange(16)));
        assert!(decode(u32::MAX).is_err());
        assert!(to_hex_digit(16).is_err());
    }

    #[test]
    fn hex_digits() {
        assert_eq!(to_hex_digit(11).unwrap(), 'b');
        assert_eq!(to_hex_digit(7).unwrap(), '7');
        assert_eq!(from_hex_digit('F'), Some(15));
        assert_eq!(from_hex_digit('a'), Some(10));
        assert_eq!(from_hex_digit('g'), None);
    }
}
