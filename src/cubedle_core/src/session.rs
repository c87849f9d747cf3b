//! The daily game: one hidden cube per date, a player cube built one slot at
//! a time, and the record that is persisted between runs.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cube_state::{CubeState, Snapshot},
    cubie::{Color, Cubie, SLOT_COUNT},
    facelets::{FACELET_COUNT, to_facelets},
    feedback::{Feedback, compare, is_solved},
    scrambler,
    validator::{self, Illegality},
};

/// Solves in more guesses than this share the overflow bucket.
pub const MAX_TRACKED_GUESSES: usize = 20;
/// Bucket `n` counts days solved in `n` guesses; bucket 0 is never used and
/// the last bucket is the overflow.
pub const HISTOGRAM_LEN: usize = MAX_TRACKED_GUESSES + 2;

/// Everything persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// The seed date this record belongs to.
    pub date: String,
    pub player: Snapshot,
    pub guesses: u32,
    /// The guess in which each slot first matched the target.
    pub first_correct: [Option<u32>; SLOT_COUNT],
    /// Carried over from day to day.
    pub histogram: Vec<u32>,
    pub completed: bool,
}

impl DailyRecord {
    pub fn new(date: &str) -> Self {
        DailyRecord {
            date: date.to_owned(),
            player: CubeState::empty().snapshot(),
            guesses: 0,
            first_correct: [None; SLOT_COUNT],
            histogram: vec![0; HISTOGRAM_LEN],
            completed: false,
        }
    }

    /// The record to play `date` with. A previous record for the same date is
    /// resumed; a record from any other date only contributes its histogram.
    pub fn for_date(previous: Option<DailyRecord>, date: &str) -> Self {
        let mut record = match previous {
            Some(record) if record.date == date => record,
            Some(mut record) => {
                info!("Starting a new day: {} -> {date}", record.date);
                record.date = date.to_owned();
                record.reset_day();
                record
            }
            None => DailyRecord::new(date),
        };

        if record.histogram.len() != HISTOGRAM_LEN {
            warn!(
                "Resetting histogram with {} buckets, expected {HISTOGRAM_LEN}",
                record.histogram.len()
            );
            record.histogram = vec![0; HISTOGRAM_LEN];
        }

        record
    }

    /// Clear everything except the date and the histogram.
    pub fn reset_day(&mut self) {
        self.player = CubeState::empty().snapshot();
        self.guesses = 0;
        self.first_correct = [None; SLOT_COUNT];
        self.completed = false;
    }

    pub fn histogram_bucket(guesses: u32) -> usize {
        usize::try_from(guesses).map_or(HISTOGRAM_LEN - 1, |guesses| {
            guesses.min(HISTOGRAM_LEN - 1)
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Today's cube is already solved")]
    AlreadySolved,
    #[error("Piece {piece} does not fit in slot {slot}")]
    WrongOrbit { slot: Cubie, piece: Cubie },
    #[error("Piece {piece} is already placed in slot {slot}")]
    AlreadyPlaced { piece: Cubie, slot: Cubie },
    #[error("Slot {0} is empty")]
    EmptySlot(Cubie),
    #[error("This guess is not a real cube: {0}")]
    Illegal(#[from] Illegality),
}

/// The result of a counted guess.
#[derive(Debug, Clone)]
pub struct GuessOutcome {
    pub guess_number: u32,
    pub facelets: [Color; FACELET_COUNT],
    pub feedback: [Feedback; FACELET_COUNT],
    pub solved: bool,
}

#[derive(Debug, Clone)]
pub struct DailyGame {
    target: CubeState,
    target_facelets: [Color; FACELET_COUNT],
    player: CubeState,
    record: DailyRecord,
}

impl DailyGame {
    /// Set up the game for `date`, resuming `previous` when it belongs to the
    /// same date.
    pub fn new(date: &str, previous: Option<DailyRecord>) -> Self {
        let target = scrambler::generate(date);
        let target_facelets = to_facelets(&target);
        let mut record = DailyRecord::for_date(previous, date);

        let player = match CubeState::restore(&record.player) {
            Ok(player) => player,
            Err(e) if record.completed => {
                // The day already counts in the histogram, keep it solved.
                warn!("Replacing unreadable solved cube for {date}: {e}");
                record.player = target.snapshot();
                target.clone()
            }
            Err(e) => {
                warn!("Discarding saved progress for {date}: {e}");
                record.reset_day();
                CubeState::empty()
            }
        };

        DailyGame {
            target,
            target_facelets,
            player,
            record,
        }
    }

    pub fn date(&self) -> &str {
        &self.record.date
    }

    pub fn target(&self) -> &CubeState {
        &self.target
    }

    pub fn target_facelets(&self) -> &[Color; FACELET_COUNT] {
        &self.target_facelets
    }

    pub fn player(&self) -> &CubeState {
        &self.player
    }

    pub fn player_facelets(&self) -> [Color; FACELET_COUNT] {
        to_facelets(&self.player)
    }

    pub fn record(&self) -> &DailyRecord {
        &self.record
    }

    pub fn is_completed(&self) -> bool {
        self.record.completed
    }

    /// Place `piece` in `slot`. Only pieces of the slot's orbit that are not
    /// already placed elsewhere are accepted.
    ///
    /// # Errors
    ///
    /// If the day is already solved or the piece is not available for the
    /// slot.
    pub fn assign(&mut self, slot: Cubie, piece: Cubie) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        if slot.orbit() != piece.orbit() {
            return Err(GameError::WrongOrbit { slot, piece });
        }
        if let Some(other) = self.player.slot_of(piece) {
            if other != slot {
                return Err(GameError::AlreadyPlaced { piece, slot: other });
            }
        }
        self.player.assign(slot, piece);
        self.sync();
        Ok(())
    }

    /// # Errors
    ///
    /// If the day is already solved.
    pub fn erase(&mut self, slot: Cubie) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.player.erase(slot);
        self.sync();
        Ok(())
    }

    /// # Errors
    ///
    /// If the day is already solved.
    pub fn clear(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.player = CubeState::empty();
        self.sync();
        Ok(())
    }

    /// # Errors
    ///
    /// If the day is already solved or the slot is empty.
    pub fn twist(&mut self, slot: Cubie) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        if self.player.piece(slot).is_none() {
            return Err(GameError::EmptySlot(slot));
        }
        self.player.twist(slot);
        self.sync();
        Ok(())
    }

    /// Compare the player's cube with the target. Only legal cubes are
    /// compared and counted.
    ///
    /// # Errors
    ///
    /// If the day is already solved or the player's cube is illegal, in which
    /// case nothing is recorded.
    pub fn submit_guess(&mut self) -> Result<GuessOutcome, GameError> {
        self.ensure_in_progress()?;
        validator::check(&self.player)?;

        self.record.guesses += 1;
        let guess_number = self.record.guesses;

        let facelets = to_facelets(&self.player);
        let feedback = compare(&facelets, &self.target_facelets);

        for slot in Cubie::ALL {
            let first_correct = &mut self.record.first_correct[slot.index()];
            if first_correct.is_none()
                && self.player.piece(slot) == self.target.piece(slot)
                && self.player.orientation(slot) == self.target.orientation(slot)
            {
                *first_correct = Some(guess_number);
            }
        }

        let solved = is_solved(&feedback);
        if solved {
            self.record.completed = true;
            self.record.histogram[DailyRecord::histogram_bucket(guess_number)] += 1;
            info!("Solved {} in {guess_number} guesses", self.record.date);
        } else {
            info!("Guess {guess_number} for {}", self.record.date);
        }

        Ok(GuessOutcome {
            guess_number,
            facelets,
            feedback,
            solved,
        })
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.record.completed {
            Err(GameError::AlreadySolved)
        } else {
            Ok(())
        }
    }

    fn sync(&mut self) {
        self.record.player = self.player.snapshot();
    }
}
