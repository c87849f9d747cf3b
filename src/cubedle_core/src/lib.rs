//! The core of a daily cube-guessing puzzle: a hidden legal cube is generated
//! from the date, the player assembles a cube piece by piece, and each guess
//! is scored sticker by sticker.

pub mod cube_state;
pub mod cubie;
pub mod facelets;
pub mod feedback;
pub mod scrambler;
pub mod session;
pub mod validator;

pub use cube_state::{CubeState, Snapshot, SnapshotError};
pub use cubie::{Color, Cubie, Face, Orbit};
pub use facelets::{FACELET_COUNT, to_facelets};
pub use feedback::{Feedback, compare};
pub use session::{DailyGame, DailyRecord, GameError, GuessOutcome};
pub use validator::{Illegality, is_legal};
