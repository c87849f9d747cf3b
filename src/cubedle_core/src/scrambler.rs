//! Seeded generation of the day's hidden cube.

use std::hash::Hasher;

use fastrand::Rng;
use fxhash::FxHasher64;
use log::{debug, trace};

use crate::{
    cube_state::CubeState,
    cubie::{Cubie, EDGE_COUNT, Orbit, SLOT_COUNT},
    validator,
};

/// Turn a seed string into a generator seed. The bytes are fed to the hasher
/// as little-endian words so every target computes the same value.
pub fn seed_from_str(seed: &str) -> u64 {
    let bytes = seed.as_bytes();
    let mut hasher = FxHasher64::default();
    hasher.write_u64(bytes.len() as u64);

    let mut words = bytes.chunks_exact(8);
    for word in &mut words {
        hasher.write_u64(u64::from_le_bytes(std::array::from_fn(|i| word[i])));
    }
    for &byte in words.remainder() {
        hasher.write_u8(byte);
    }

    hasher.finish()
}

/// Fisher-Yates over `items`. Indices are drawn as `u32` so the random stream
/// is consumed identically on 32 and 64 bit targets.
fn shuffle<T>(rng: &mut Rng, items: &mut [T]) {
    for (i, bound) in (1..items.len()).zip(1_u32..) {
        items.swap(i, rng.u32(..=bound) as usize);
    }
}

/// The legal cube for `seed`. The same seed always gives the same cube.
pub fn generate(seed: &str) -> CubeState {
    let mut rng = Rng::with_seed(seed_from_str(seed));
    let state = generate_with(&mut rng);
    debug!("Scrambled cube for seed {seed:?}");
    state
}

/// Draw random states from `rng` until one is legal. About one draw in twelve
/// is legal: half fail parity, half of the rest fail edge orientation and two
/// thirds of the rest fail corner orientation.
pub fn generate_with(rng: &mut Rng) -> CubeState {
    let mut attempts = 1_u32;
    loop {
        let candidate = random_state(rng);
        if validator::is_legal(&candidate) {
            debug!("Found a legal cube after {attempts} attempts");
            return candidate;
        }
        trace!("Rejected candidate {attempts}");
        attempts += 1;
    }
}

/// A uniformly random state that keeps edges in edge slots and corners in
/// corner slots, without regard for parity or orientation sums. The draw order
/// is fixed: edge shuffle, corner shuffle, edge orientations, corner
/// orientations.
fn random_state(rng: &mut Rng) -> CubeState {
    let mut pieces = Cubie::ALL;
    let (edges, corners) = pieces.split_at_mut(EDGE_COUNT);
    shuffle(rng, edges);
    shuffle(rng, corners);

    let mut orientation = [0; SLOT_COUNT];
    let (edge_orientation, corner_orientation) = orientation.split_at_mut(EDGE_COUNT);
    for value in edge_orientation {
        *value = rng.u8(..Orbit::Edges.orientation_count());
    }
    for value in corner_orientation {
        *value = rng.u8(..Orbit::Corners.orientation_count());
    }

    CubeState::from_parts(pieces.map(Some), orientation)
}
