//! The vocabulary of a 3x3x3 cube: faces, sticker colors, and the 20 movable
//! pieces.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A face of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    U,
    L,
    F,
    R,
    B,
    D,
}

impl Face {
    /// Faces in facelet order. This is the order of the 2D net: U on top,
    /// then L F R B from left to right, then D at the bottom.
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, L, F, R, B, D];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The color of this face on a solved cube.
    pub const fn color(self) -> Color {
        match self {
            Face::U => Color::U,
            Face::L => Color::L,
            Face::F => Color::F,
            Face::R => Color::R,
            Face::B => Color::B,
            Face::D => Color::D,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::L => 'L',
            Face::F => 'F',
            Face::R => 'R',
            Face::B => 'B',
            Face::D => 'D',
        }
    }
}

/// The color of a single sticker. Colors are named after the face they belong
/// to on a solved cube. `Blank` marks a sticker of an empty slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    U,
    L,
    F,
    R,
    B,
    D,
    Blank,
}

impl Color {
    pub const COUNT: usize = 7;

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn letter(self) -> char {
        match self {
            Color::U => 'U',
            Color::L => 'L',
            Color::F => 'F',
            Color::R => 'R',
            Color::B => 'B',
            Color::D => 'D',
            Color::Blank => 'X',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The two piece orbits of a 3x3x3 cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orbit {
    Edges,
    Corners,
}

impl Orbit {
    /// How many orientations a piece of this orbit has. This is also the
    /// length of its label.
    pub const fn orientation_count(self) -> u8 {
        match self {
            Orbit::Edges => 2,
            Orbit::Corners => 3,
        }
    }
}

pub const EDGE_COUNT: usize = 12;
pub const CORNER_COUNT: usize = 8;
pub const SLOT_COUNT: usize = EDGE_COUNT + CORNER_COUNT;

/// A movable piece of the cube. The same names identify the slots: piece `p`
/// sits in slot `p` when the cube is solved.
///
/// Corner labels start with the U or D sticker and then list the remaining
/// two stickers counterclockwise when looking at that sticker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Cubie {
    UF,
    UR,
    UB,
    UL,
    DF,
    DR,
    DB,
    DL,
    FR,
    FL,
    BR,
    BL,
    UFR,
    URB,
    UBL,
    ULF,
    DRF,
    DFL,
    DLB,
    DBR,
}

impl Cubie {
    /// Every piece in slot order: the 12 edges followed by the 8 corners.
    pub const ALL: [Self; SLOT_COUNT] = {
        use Cubie::*;
        let v = [
            UF, UR, UB, UL, DF, DR, DB, DL, FR, FL, BR, BL, UFR, URB, UBL, ULF, DRF, DFL, DLB,
            DBR,
        ];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < SLOT_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    pub const fn orbit(self) -> Orbit {
        if self.index() < EDGE_COUNT {
            Orbit::Edges
        } else {
            Orbit::Corners
        }
    }

    /// The faces this piece shows, in its canonical reading order.
    pub const fn label(self) -> &'static [Face] {
        use Face::*;
        match self {
            Cubie::UF => &[U, F],
            Cubie::UR => &[U, R],
            Cubie::UB => &[U, B],
            Cubie::UL => &[U, L],
            Cubie::DF => &[D, F],
            Cubie::DR => &[D, R],
            Cubie::DB => &[D, B],
            Cubie::DL => &[D, L],
            Cubie::FR => &[F, R],
            Cubie::FL => &[F, L],
            Cubie::BR => &[B, R],
            Cubie::BL => &[B, L],
            Cubie::UFR => &[U, F, R],
            Cubie::URB => &[U, R, B],
            Cubie::UBL => &[U, B, L],
            Cubie::ULF => &[U, L, F],
            Cubie::DRF => &[D, R, F],
            Cubie::DFL => &[D, F, L],
            Cubie::DLB => &[D, L, B],
            Cubie::DBR => &[D, B, R],
        }
    }

    pub fn name(self) -> String {
        self.label().iter().map(|face| face.letter()).collect()
    }
}

impl fmt::Display for Cubie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in self.label() {
            write!(f, "{}", face.letter())?;
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown piece {0:?}, expected a label such as UF or UFR")]
pub struct UnknownCubie(pub String);

impl FromStr for Cubie {
    type Err = UnknownCubie;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Cubie::ALL
            .into_iter()
            .find(|cubie| cubie.name() == wanted)
            .ok_or_else(|| UnknownCubie(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_orbits() {
        for cubie in Cubie::ALL {
            assert_eq!(
                cubie.label().len(),
                cubie.orbit().orientation_count() as usize,
                "{cubie}"
            );
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("ufr".parse::<Cubie>(), Ok(Cubie::UFR));
        assert_eq!(" BL ".parse::<Cubie>(), Ok(Cubie::BL));
        assert!("RFU".parse::<Cubie>().is_err());
        assert!("".parse::<Cubie>().is_err());
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Cubie::from_index(12), Some(Cubie::UFR));
        assert_eq!(Cubie::from_index(20), None);
    }
}
