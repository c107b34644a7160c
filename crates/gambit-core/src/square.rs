//! Board squares addressed by (row, file), row 0 being rank 8.

use std::fmt;

/// A square on the board.
///
/// Stored as `row * 8 + file`, where row 0 is rank 8 (Black's back rank)
/// and file 0 is the a-file, so A8 = 0, H8 = 7, ..., H1 = 63. Ordering
/// follows that index, i.e. row-major scan order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a row and file, returning `None` if either is out of range.
    #[inline]
    pub const fn new(row: u8, file: u8) -> Option<Square> {
        if row < 8 && file < 8 {
            Some(Square(row * 8 + file))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Create a square from an index known to be in range.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse algebraic coordinates such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file_byte, rank_byte) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }
        Square::new(b'8' - rank_byte, file_byte - b'a')
    }

    /// Zero-based index (0..64).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row (0 = rank 8, 7 = rank 1).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// File (0 = a-file, 7 = h-file).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// The square shifted by the given row and file deltas, if still on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_file: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let file = self.file() as i8 + d_file;
        if row < 0 || row >= 8 || file < 0 || file >= 8 {
            None
        } else {
            Some(Square((row * 8 + file) as u8))
        }
    }

    /// The same file seen from the other side of the board.
    #[inline]
    pub const fn mirror(self) -> Square {
        Square((7 - self.row()) * 8 + self.file())
    }

    /// Iterate over all 64 squares in row-major order (A8, B8, ..., H1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    // Named square constants
    pub const A8: Square = Square(0);
    pub const B8: Square = Square(1);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
    pub const A7: Square = Square(8);
    pub const B7: Square = Square(9);
    pub const C7: Square = Square(10);
    pub const D7: Square = Square(11);
    pub const E7: Square = Square(12);
    pub const F7: Square = Square(13);
    pub const G7: Square = Square(14);
    pub const H7: Square = Square(15);
    pub const A6: Square = Square(16);
    pub const B6: Square = Square(17);
    pub const C6: Square = Square(18);
    pub const D6: Square = Square(19);
    pub const E6: Square = Square(20);
    pub const F6: Square = Square(21);
    pub const G6: Square = Square(22);
    pub const H6: Square = Square(23);
    pub const A5: Square = Square(24);
    pub const B5: Square = Square(25);
    pub const C5: Square = Square(26);
    pub const D5: Square = Square(27);
    pub const E5: Square = Square(28);
    pub const F5: Square = Square(29);
    pub const G5: Square = Square(30);
    pub const H5: Square = Square(31);
    pub const A4: Square = Square(32);
    pub const B4: Square = Square(33);
    pub const C4: Square = Square(34);
    pub const D4: Square = Square(35);
    pub const E4: Square = Square(36);
    pub const F4: Square = Square(37);
    pub const G4: Square = Square(38);
    pub const H4: Square = Square(39);
    pub const A3: Square = Square(40);
    pub const B3: Square = Square(41);
    pub const C3: Square = Square(42);
    pub const D3: Square = Square(43);
    pub const E3: Square = Square(44);
    pub const F3: Square = Square(45);
    pub const G3: Square = Square(46);
    pub const H3: Square = Square(47);
    pub const A2: Square = Square(48);
    pub const B2: Square = Square(49);
    pub const C2: Square = Square(50);
    pub const D2: Square = Square(51);
    pub const E2: Square = Square(52);
    pub const F2: Square = Square(53);
    pub const G2: Square = Square(54);
    pub const H2: Square = Square(55);
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'8' - self.row()) as char;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}
