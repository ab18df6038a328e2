use std::fmt;

use crate::cubie::CubieCube;
use crate::error::Error;

/// Names the colors of the cube facelets: up, left, front, right, back, down.
#[rustfmt::skip]
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, Eq, Hash)]
pub enum Color {
    U, L, F, R, B, D,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TryFrom<char> for Color {
    type Error = Error;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'U' => Ok(Color::U),
            'L' => Ok(Color::L),
            'F' => Ok(Color::F),
            'R' => Ok(Color::R),
            'B' => Ok(Color::B),
            'D' => Ok(Color::D),
            _ => Err(Error::InvalidColor),
        }
    }
}

/// Cube on the facelet level.
///
/// The facelet representation follows the ordering: U-L-F-R-B-D.
///
/// A solved facelet is `UUUUUUUUULLLLLLLLLFFFFFFFFFRRRRRRRRRBBBBBBBBBDDDDDDDDD`.
#[derive(Debug, PartialEq)]
pub struct FaceCube {
    pub f: [Color; 54],
}

/// Solved cube on the facelet level.
#[rustfmt::skip]
pub const SOLVED_FACE_CUBE: FaceCube = FaceCube {
    f: [
        Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U,
        Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L,
        Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F,
        Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R,
        Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B,
        Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D,
    ],
};

impl Default for FaceCube {
    fn default() -> Self {
        SOLVED_FACE_CUBE
    }
}

/// Gives the facelet representation of a cubie cube. Corner and edge stickers
/// are written through the `CORNER_FACELET`/`EDGE_FACELET` tables, rotated by
/// the slot's orientation; centers are fixed.
impl TryFrom<&CubieCube> for FaceCube {
    type Error = Error;
    fn try_from(value: &CubieCube) -> Result<Self, Self::Error> {
        if !value.is_solvable() {
            return Err(Error::InvalidCubieValue);
        }

        let mut face = FaceCube::default();

        for (i, corner_faces) in CORNER_FACELET.iter().enumerate() {
            let corner = value.cp[i] as usize;

            for (j, f) in corner_faces.iter().enumerate() {
                face.f[*f as usize] = CORNER_COLOR[corner][(j + (3 - value.co[i] as usize)) % 3];
            }
        }

        for (i, edge_faces) in EDGE_FACELET.iter().enumerate() {
            let edge = value.ep[i] as usize;

            for (j, f) in edge_faces.iter().enumerate() {
                face.f[*f as usize] = EDGE_COLOR[edge][(j + value.eo[i] as usize) % 2];
            }
        }

        Ok(face)
    }
}

impl TryFrom<&str> for FaceCube {
    type Error = Error;
    fn try_from(cube_string: &str) -> Result<Self, Self::Error> {
        if cube_string.len() != 54 {
            return Err(Error::InvalidFaceletString);
        }

        let mut face_cube = FaceCube::default();
        let mut count = [0; 6];

        for (i, c) in cube_string.chars().enumerate() {
            face_cube.f[i] = Color::try_from(c)?;
            count[face_cube.f[i] as usize] += 1;
        }
        if count != [9; 6] {
            return Err(Error::InvalidFaceletString);
        }

        Ok(face_cube)
    }
}

impl fmt::Display for FaceCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let acc = String::new();
        let s = self.f.iter().fold(acc, |acc, f| format!("{acc}{f}"));

        write!(f, "{s}")
    }
}

/// The names of the facelet positions of the cube.
///
/// ```text
///             |************|
///             |*U1**U2**U3*|
///             |************|
///             |*U4**U5**U6*|
///             |************|
///             |*U7**U8**U9*|
///             |************|
/// ************|************|************|************|
/// *L1**L2**L3*|*F1**F2**F3*|*R1**R2**R3*|*B1**B2**B3*|
/// ************|************|************|************|
/// *L4**L5**L6*|*F4**F5**F6*|*R4**R5**R6*|*B4**B5**B6*|
/// ************|************|************|************|
/// *L7**L8**L9*|*F7**F8**F9*|*R7**R8**R9*|*B7**B8**B9*|
/// ************|************|************|************|
///             |************|
///             |*D1**D2**D3*|
///             |************|
///             |*D4**D5**D6*|
///             |************|
///             |*D7**D8**D9*|
///             |************|
/// ```
/// The 54 facelets are indexed face by face in the order U, L, F, R, B, D,
/// each face read left-to-right, top-to-bottom. Centers (`_U5` and friends)
/// never move under face turns.
#[rustfmt::skip]
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub enum Facelet {
    U1, U2, U3, U4, _U5, U6, U7, U8, U9,
    L1, L2, L3, L4, _L5, L6, L7, L8, L9,
    F1, F2, F3, F4, _F5, F6, F7, F8, F9,
    R1, R2, R3, R4, _R5, R6, R7, R8, R9,
    B1, B2, B3, B4, _B5, B6, B7, B8, B9,
    D1, D2, D3, D4, _D5, D6, D7, D8, D9,
}

/// Map the corner positions to facelet positions, U/D sticker first, then
/// clockwise around the corner.
pub const CORNER_FACELET: [[Facelet; 3]; 8] = [
    [Facelet::U9, Facelet::R1, Facelet::F3], //URF
    [Facelet::U7, Facelet::F1, Facelet::L3], //UFL
    [Facelet::U1, Facelet::L1, Facelet::B3], //ULB
    [Facelet::U3, Facelet::B1, Facelet::R3], //UBR
    [Facelet::D3, Facelet::F9, Facelet::R7], //DFR
    [Facelet::D1, Facelet::L9, Facelet::F7], //DLF
    [Facelet::D7, Facelet::B9, Facelet::L7], //DBL
    [Facelet::D9, Facelet::R9, Facelet::B7], //DRB
];

/// Map the edge positions to facelet positions.
pub const EDGE_FACELET: [[Facelet; 2]; 12] = [
    [Facelet::U6, Facelet::R2], //UR
    [Facelet::U8, Facelet::F2], //UF
    [Facelet::U4, Facelet::L2], //UL
    [Facelet::U2, Facelet::B2], //UB
    [Facelet::D6, Facelet::R8], //DR
    [Facelet::D2, Facelet::F8], //DF
    [Facelet::D4, Facelet::L8], //DL
    [Facelet::D8, Facelet::B8], //DB
    [Facelet::F6, Facelet::R4], //FR
    [Facelet::F4, Facelet::L6], //FL
    [Facelet::B6, Facelet::L4], //BL
    [Facelet::B4, Facelet::R6], //BR
];

/// Map the corner cubies to facelet colors.
pub const CORNER_COLOR: [[Color; 3]; 8] = [
    [Color::U, Color::R, Color::F],
    [Color::U, Color::F, Color::L],
    [Color::U, Color::L, Color::B],
    [Color::U, Color::B, Color::R],
    [Color::D, Color::F, Color::R],
    [Color::D, Color::L, Color::F],
    [Color::D, Color::B, Color::L],
    [Color::D, Color::R, Color::B],
];

/// Map the edge cubies to facelet colors.
pub const EDGE_COLOR: [[Color; 2]; 12] = [
    [Color::U, Color::R],
    [Color::U, Color::F],
    [Color::U, Color::L],
    [Color::U, Color::B],
    [Color::D, Color::R],
    [Color::D, Color::F],
    [Color::D, Color::L],
    [Color::D, Color::B],
    [Color::F, Color::R],
    [Color::F, Color::L],
    [Color::B, Color::L],
    [Color::B, Color::R],
];
