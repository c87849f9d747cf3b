use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cubie::{Cubie, SLOT_COUNT};

/// The largest orientation count of any orbit. Orientation values at or above
/// this are never meaningful.
const MAX_ORIENTATION_COUNT: u8 = 3;

/// A cube described by which piece occupies each slot and how it is
/// oriented. Slots may be empty while the player is still building a guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    permutation: [Option<Cubie>; SLOT_COUNT],
    orientation: [u8; SLOT_COUNT],
}

/// A plain copy of a `CubeState` for persistence. Piece indices follow slot
/// order, `None` marks an empty slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub permutation: Vec<Option<u8>>,
    pub orientation: Vec<u8>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Invalid permutation length, expected {expected} slots but got {actual}")]
    PermutationLength { expected: usize, actual: usize },
    #[error("Invalid orientation length, expected {expected} slots but got {actual}")]
    OrientationLength { expected: usize, actual: usize },
    #[error("Piece out of range, expected a value below {expected} but got {actual}")]
    PieceOutOfRange { expected: usize, actual: u8 },
    #[error(
        "Orientation out of range in slot {slot}, expected a value below {expected} but got {actual}"
    )]
    OrientationOutOfRange { slot: Cubie, expected: u8, actual: u8 },
}

impl CubeState {
    pub fn solved() -> Self {
        CubeState {
            permutation: Cubie::ALL.map(Some),
            orientation: [0; SLOT_COUNT],
        }
    }

    /// A cube with every slot empty.
    pub fn empty() -> Self {
        CubeState {
            permutation: [None; SLOT_COUNT],
            orientation: [0; SLOT_COUNT],
        }
    }

    /// Build a cube from raw parts. No legality check is performed.
    pub fn from_parts(
        permutation: [Option<Cubie>; SLOT_COUNT],
        orientation: [u8; SLOT_COUNT],
    ) -> Self {
        CubeState {
            permutation,
            orientation,
        }
    }

    pub fn piece(&self, slot: Cubie) -> Option<Cubie> {
        self.permutation[slot.index()]
    }

    pub fn orientation(&self, slot: Cubie) -> u8 {
        self.orientation[slot.index()]
    }

    pub fn orientations(&self) -> &[u8; SLOT_COUNT] {
        &self.orientation
    }

    /// The slot currently holding `piece`, if any.
    pub fn slot_of(&self, piece: Cubie) -> Option<Cubie> {
        Cubie::ALL
            .into_iter()
            .find(|&slot| self.piece(slot) == Some(piece))
    }

    pub fn is_complete(&self) -> bool {
        self.permutation.iter().all(Option::is_some)
    }

    /// Put `piece` into `slot` with zero orientation. Whether the result makes
    /// sense is left to the validator.
    pub fn assign(&mut self, slot: Cubie, piece: Cubie) {
        self.permutation[slot.index()] = Some(piece);
        self.orientation[slot.index()] = 0;
    }

    pub fn erase(&mut self, slot: Cubie) {
        self.permutation[slot.index()] = None;
        self.orientation[slot.index()] = 0;
    }

    /// Advance the orientation of the piece in `slot`. The cycle length comes
    /// from the occupying piece, not from the slot. Empty slots are left
    /// alone.
    pub fn twist(&mut self, slot: Cubie) {
        let Some(piece) = self.piece(slot) else {
            return;
        };
        let orientation = &mut self.orientation[slot.index()];
        *orientation = (*orientation + 1) % piece.orbit().orientation_count();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            permutation: self
                .permutation
                .iter()
                .map(|piece| piece.map(|piece| piece as u8))
                .collect(),
            orientation: self.orientation.to_vec(),
        }
    }

    /// Rebuild a cube from a snapshot.
    ///
    /// # Errors
    ///
    /// If either sequence does not hold exactly one entry per slot, or holds
    /// values no cube can represent. See `SnapshotError`.
    pub fn restore(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        if snapshot.permutation.len() != SLOT_COUNT {
            return Err(SnapshotError::PermutationLength {
                expected: SLOT_COUNT,
                actual: snapshot.permutation.len(),
            });
        }
        if snapshot.orientation.len() != SLOT_COUNT {
            return Err(SnapshotError::OrientationLength {
                expected: SLOT_COUNT,
                actual: snapshot.orientation.len(),
            });
        }

        let mut state = CubeState::empty();
        for ((slot, &piece), &orientation) in Cubie::ALL
            .into_iter()
            .zip(&snapshot.permutation)
            .zip(&snapshot.orientation)
        {
            if let Some(piece) = piece {
                let cubie = Cubie::from_index(piece as usize).ok_or(
                    SnapshotError::PieceOutOfRange {
                        expected: SLOT_COUNT,
                        actual: piece,
                    },
                )?;
                state.permutation[slot.index()] = Some(cubie);
            }
            if orientation >= MAX_ORIENTATION_COUNT {
                return Err(SnapshotError::OrientationOutOfRange {
                    slot,
                    expected: MAX_ORIENTATION_COUNT,
                    actual: orientation,
                });
            }
            state.orientation[slot.index()] = orientation;
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_then_erase() {
        for slot in Cubie::ALL {
            let mut state = CubeState::solved();
            state.assign(slot, Cubie::UF);
            assert_eq!(state.piece(slot), Some(Cubie::UF));
            state.erase(slot);
            assert_eq!(state.piece(slot), None);
            assert_eq!(state.orientation(slot), 0);
            assert!(!state.is_complete());
        }
    }

    #[test]
    fn test_twist_cycles() {
        for slot in Cubie::ALL {
            let mut state = CubeState::solved();
            let cycle = slot.orbit().orientation_count();
            for _ in 0..cycle {
                state.twist(slot);
            }
            assert_eq!(state, CubeState::solved());
        }
    }

    #[test]
    fn test_twist_uses_occupying_piece() {
        let mut state = CubeState::solved();
        // A corner in an edge slot cycles through three orientations
        state.assign(Cubie::UF, Cubie::UFR);
        state.twist(Cubie::UF);
        state.twist(Cubie::UF);
        assert_eq!(state.orientation(Cubie::UF), 2);
        state.twist(Cubie::UF);
        assert_eq!(state.orientation(Cubie::UF), 0);
    }

    #[test]
    fn test_twist_empty_slot() {
        let mut state = CubeState::empty();
        state.twist(Cubie::DBR);
        assert_eq!(state, CubeState::empty());
    }

    #[test]
    fn test_assign_resets_orientation() {
        let mut state = CubeState::solved();
        state.twist(Cubie::URB);
        state.assign(Cubie::URB, Cubie::URB);
        assert_eq!(state.orientation(Cubie::URB), 0);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut state = CubeState::empty();
        state.assign(Cubie::UF, Cubie::BR);
        state.twist(Cubie::UF);
        state.assign(Cubie::DLB, Cubie::UBL);
        state.twist(Cubie::DLB);
        state.twist(Cubie::DLB);
        assert_eq!(CubeState::restore(&state.snapshot()), Ok(state));

        let solved = CubeState::solved();
        assert_eq!(CubeState::restore(&solved.snapshot()), Ok(solved));
    }

    #[test]
    fn test_restore_rejects_lengths() {
        let mut snapshot = CubeState::solved().snapshot();
        snapshot.permutation.pop();
        assert_eq!(
            CubeState::restore(&snapshot),
            Err(SnapshotError::PermutationLength {
                expected: 20,
                actual: 19
            })
        );

        let mut snapshot = CubeState::solved().snapshot();
        snapshot.orientation.push(0);
        assert_eq!(
            CubeState::restore(&snapshot),
            Err(SnapshotError::OrientationLength {
                expected: 20,
                actual: 21
            })
        );
    }

    #[test]
    fn test_restore_rejects_values() {
        let mut snapshot = CubeState::solved().snapshot();
        snapshot.permutation[3] = Some(20);
        assert!(matches!(
            CubeState::restore(&snapshot),
            Err(SnapshotError::PieceOutOfRange { actual: 20, .. })
        ));

        let mut snapshot = CubeState::solved().snapshot();
        snapshot.orientation[15] = 3;
        assert!(matches!(
            CubeState::restore(&snapshot),
            Err(SnapshotError::OrientationOutOfRange {
                slot: Cubie::ULF,
                ..
            })
        ));
    }
}
