//! Expansion of a cube state into its 54 visible stickers.
//!
//! Facelets are grouped by face in `Face::ALL` order and read row by row as
//! each face appears on the unfolded net (U with B at the top, L F R B with U
//! at the top, D with F at the top).

use crate::{
    cube_state::CubeState,
    cubie::{Color, Cubie, Face, Orbit},
};

pub const FACELETS_PER_FACE: usize = 9;
pub const FACELET_COUNT: usize = 6 * FACELETS_PER_FACE;

/// What is drawn at one facelet position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Facelet {
    /// Centers never move.
    Center(Face),
    /// The sticker at index `offset` of the label of whatever piece is in
    /// `slot`, before orientation is applied.
    Sticker { slot: Cubie, offset: u8 },
}

const fn sticker(slot: Cubie, offset: u8) -> Facelet {
    Facelet::Sticker { slot, offset }
}

pub static FACELET_TABLE: [Facelet; FACELET_COUNT] = {
    use Cubie::*;
    use Facelet::Center;

    #[rustfmt::skip]
    let table = [
        // U
        sticker(UBL, 0), sticker(UB, 0), sticker(URB, 0),
        sticker(UL, 0), Center(Face::U), sticker(UR, 0),
        sticker(ULF, 0), sticker(UF, 0), sticker(UFR, 0),
        // L
        sticker(UBL, 2), sticker(UL, 1), sticker(ULF, 1),
        sticker(BL, 1), Center(Face::L), sticker(FL, 1),
        sticker(DLB, 1), sticker(DL, 1), sticker(DFL, 2),
        // F
        sticker(ULF, 2), sticker(UF, 1), sticker(UFR, 1),
        sticker(FL, 0), Center(Face::F), sticker(FR, 0),
        sticker(DFL, 1), sticker(DF, 1), sticker(DRF, 2),
        // R
        sticker(UFR, 2), sticker(UR, 1), sticker(URB, 1),
        sticker(FR, 1), Center(Face::R), sticker(BR, 1),
        sticker(DRF, 1), sticker(DR, 1), sticker(DBR, 2),
        // B
        sticker(URB, 2), sticker(UB, 1), sticker(UBL, 1),
        sticker(BR, 0), Center(Face::B), sticker(BL, 0),
        sticker(DBR, 1), sticker(DB, 1), sticker(DLB, 2),
        // D
        sticker(DFL, 0), sticker(DF, 0), sticker(DRF, 0),
        sticker(DL, 0), Center(Face::D), sticker(DR, 0),
        sticker(DLB, 0), sticker(DB, 0), sticker(DBR, 0),
    ];

    table
};

/// Label rotation for an edge: the flip counter and the label turn the same
/// way.
const fn edge_rotation(orientation: u8) -> usize {
    orientation as usize
}

/// Label rotation for a corner: the twist counter runs opposite to the label
/// reading order, so the rotation is negated.
const fn corner_rotation(orientation: u8) -> usize {
    let len = Orbit::Corners.orientation_count() as usize;
    (len - orientation as usize % len) % len
}

fn sticker_color(piece: Cubie, offset: u8, orientation: u8) -> Color {
    let label = piece.label();
    let rotation = match piece.orbit() {
        Orbit::Edges => edge_rotation(orientation),
        Orbit::Corners => corner_rotation(orientation),
    };
    label[(offset as usize + rotation) % label.len()].color()
}

/// The color shown at every facelet of `state`. Empty slots show
/// `Color::Blank`; any other state, legal or not, maps without panicking.
pub fn to_facelets(state: &CubeState) -> [Color; FACELET_COUNT] {
    std::array::from_fn(|index| match FACELET_TABLE[index] {
        Facelet::Center(face) => face.color(),
        Facelet::Sticker { slot, offset } => match state.piece(slot) {
            Some(piece) => sticker_color(piece, offset, state.orientation(slot)),
            None => Color::Blank,
        },
    })
}
