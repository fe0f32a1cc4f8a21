//! Decoding of fingerprint bytes into the bishop's moves.

use core::iter::FusedIterator;

/// Diagonal move of the bishop.
///
/// The low bit of a bit pair selects the horizontal component (`0` is west,
/// `1` is east) and the high bit selects the vertical one (`0` is north,
/// `1` is south).
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// `00`: up and to the left.
    NorthWest,

    /// `01`: up and to the right.
    NorthEast,

    /// `10`: down and to the left.
    SouthWest,

    /// `11`: down and to the right.
    SouthEast,
}

impl Direction {
    /// Decode a direction from the two least significant bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::NorthWest,
            0b01 => Self::NorthEast,
            0b10 => Self::SouthWest,
            _ => Self::SouthEast,
        }
    }

    /// Decode the four moves encoded in a single byte.
    ///
    /// Bit pairs are consumed starting from the least significant one, i.e.
    /// bits 1-0 first and bits 7-6 last.
    pub const fn from_byte(byte: u8) -> [Self; 4] {
        [
            Self::from_bits(byte),
            Self::from_bits(byte >> 2),
            Self::from_bits(byte >> 4),
            Self::from_bits(byte >> 6),
        ]
    }

    /// Get the two-bit code for this direction.
    pub const fn bits(self) -> u8 {
        match self {
            Self::NorthWest => 0b00,
            Self::NorthEast => 0b01,
            Self::SouthWest => 0b10,
            Self::SouthEast => 0b11,
        }
    }

    /// Get the `(dx, dy)` offset of this move.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::NorthWest => (-1, -1),
            Self::NorthEast => (1, -1),
            Self::SouthWest => (-1, 1),
            Self::SouthEast => (1, 1),
        }
    }

    /// Does this move go east (increasing `x`)?
    pub const fn is_east(self) -> bool {
        self.bits() & 0b01 != 0
    }

    /// Does this move go south (increasing `y`)?
    pub const fn is_south(self) -> bool {
        self.bits() & 0b10 != 0
    }
}

/// Single decoded move.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Move {
    /// Direction of the move.
    pub direction: Direction,

    /// Is this the last move derived from the last octet of the fingerprint?
    pub is_final: bool,
}

/// Iterator over the moves encoded in a byte string.
///
/// Bytes are visited in order, and the bit pairs of each byte from least
/// to most significant. The walk is one continuous path: the only byte
/// boundary it observes is the end of the input, which marks the last
/// [`Move`] as final.
#[derive(Clone, Debug)]
pub struct Directions<'a> {
    bytes: &'a [u8],
    pending: [Direction; 4],
    offset: usize,
}

impl<'a> Directions<'a> {
    /// Create an iterator over the moves encoded in `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pending: [Direction::NorthWest; 4],
            offset: 4,
        }
    }
}

impl Iterator for Directions<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        if self.offset == self.pending.len() {
            let (byte, rest) = self.bytes.split_first()?;
            self.pending = Direction::from_byte(*byte);
            self.bytes = rest;
            self.offset = 0;
        }

        let direction = *self.pending.get(self.offset)?;
        self.offset = self.offset.saturating_add(1);

        Some(Move {
            direction,
            is_final: self.bytes.is_empty() && self.offset == self.pending.len(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self
            .bytes
            .len()
            .saturating_mul(4)
            .saturating_add(self.pending.len().saturating_sub(self.offset));

        (len, Some(len))
    }
}

impl ExactSizeIterator for Directions<'_> {}

impl FusedIterator for Directions<'_> {}
