//! Checks whether a cube state could come from a physically assembled cube.
//!
//! A state is reachable exactly when every slot holds a piece of its own
//! orbit with no piece repeated, the permutation of all 20 pieces is even,
//! the edge orientations sum to zero mod 2 and the corner orientations sum to
//! zero mod 3.

use thiserror::Error;

use crate::{
    cube_state::CubeState,
    cubie::{Cubie, EDGE_COUNT, Orbit, SLOT_COUNT},
};

/// The first broken invariant of an illegal state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Illegality {
    #[error("Slot {0} is empty")]
    EmptySlot(Cubie),
    #[error("Piece {piece} cannot occupy slot {slot}")]
    WrongOrbit { slot: Cubie, piece: Cubie },
    #[error("Piece {0} is placed more than once")]
    DuplicatePiece(Cubie),
    #[error("The permutation is odd, two pieces are swapped")]
    OddPermutation,
    #[error("The edge orientations do not sum to zero, an edge is flipped")]
    FlippedEdge,
    #[error("The corner orientations sum to {0} mod 3, a corner is twisted")]
    TwistedCorner(u8),
}

pub fn is_legal(state: &CubeState) -> bool {
    check(state).is_ok()
}

/// Find the first invariant `state` breaks. Never panics, whatever the
/// state.
///
/// # Errors
///
/// The violated invariant, checked in the order completeness, bijection,
/// parity, edge orientation, corner orientation.
pub fn check(state: &CubeState) -> Result<(), Illegality> {
    let permutation = check_bijection(state)?;

    if is_odd(&permutation) {
        return Err(Illegality::OddPermutation);
    }

    let (edges, corners) = state.orientations().split_at(EDGE_COUNT);

    if orientation_sum(edges, Orbit::Edges) != 0 {
        return Err(Illegality::FlippedEdge);
    }

    let corner_sum = orientation_sum(corners, Orbit::Corners);
    if corner_sum != 0 {
        return Err(Illegality::TwistedCorner(corner_sum));
    }

    Ok(())
}

/// Every slot is filled with a piece of the same orbit and no piece repeats.
/// Returns the permutation as plain indices.
fn check_bijection(state: &CubeState) -> Result<[usize; SLOT_COUNT], Illegality> {
    let mut seen = [false; SLOT_COUNT];
    let mut permutation = [0; SLOT_COUNT];

    for slot in Cubie::ALL {
        let piece = state.piece(slot).ok_or(Illegality::EmptySlot(slot))?;
        if piece.orbit() != slot.orbit() {
            return Err(Illegality::WrongOrbit { slot, piece });
        }
        if std::mem::replace(&mut seen[piece.index()], true) {
            return Err(Illegality::DuplicatePiece(piece));
        }
        permutation[slot.index()] = piece.index();
    }

    Ok(permutation)
}

/// Parity by cycle decomposition: a permutation of `n` symbols with `c`
/// cycles is a product of `n - c` transpositions.
fn is_odd(permutation: &[usize; SLOT_COUNT]) -> bool {
    let mut visited = [false; SLOT_COUNT];
    let mut cycles = 0;

    for start in 0..SLOT_COUNT {
        if visited[start] {
            continue;
        }
        cycles += 1;
        let mut i = start;
        while !visited[i] {
            visited[i] = true;
            i = permutation[i];
        }
    }

    (SLOT_COUNT - cycles) % 2 == 1
}

fn orientation_sum(orientations: &[u8], orbit: Orbit) -> u8 {
    let modulus = orbit.orientation_count();
    orientations
        .iter()
        .fold(0, |sum, &orientation| (sum + orientation % modulus) % modulus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity() {
        let mut permutation = std::array::from_fn(|i| i);
        assert!(!is_odd(&permutation));
        permutation.swap(0, 1);
        assert!(is_odd(&permutation));
        // A three-cycle is even
        permutation.swap(0, 1);
        permutation.swap(12, 13);
        permutation.swap(13, 14);
        assert!(!is_odd(&permutation));
    }

    #[test]
    fn test_orientation_sum() {
        assert_eq!(orientation_sum(&[1, 1, 0], Orbit::Edges), 0);
        assert_eq!(orientation_sum(&[1, 0, 0], Orbit::Edges), 1);
        assert_eq!(orientation_sum(&[2, 2, 2], Orbit::Corners), 0);
        assert_eq!(orientation_sum(&[2, 2, 0], Orbit::Corners), 1);
    }
}
