//! Wordle style per-facelet feedback.
//!
//! Each face is scored on its own. Within a face, facelets at even positions
//! (corners and the center) and at odd positions (edges) keep separate color
//! budgets, so a color can only earn partial credit from a sticker of the same
//! kind that the guess missed.

use std::fmt;

use crate::{
    cubie::Color,
    facelets::{FACELET_COUNT, FACELETS_PER_FACE},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right color in the right place.
    Exact,
    /// The color is missing from another facelet of the same kind on this
    /// face.
    Partial,
    Absent,
}

impl Feedback {
    pub const fn glyph(self) -> char {
        match self {
            Feedback::Exact => '.',
            Feedback::Partial => '/',
            Feedback::Absent => 'X',
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Score `guess` against `target`.
pub fn compare(
    guess: &[Color; FACELET_COUNT],
    target: &[Color; FACELET_COUNT],
) -> [Feedback; FACELET_COUNT] {
    let mut feedback = [Feedback::Absent; FACELET_COUNT];

    for ((guess, target), feedback) in guess
        .chunks_exact(FACELETS_PER_FACE)
        .zip(target.chunks_exact(FACELETS_PER_FACE))
        .zip(feedback.chunks_exact_mut(FACELETS_PER_FACE))
    {
        compare_face(guess, target, feedback);
    }

    feedback
}

pub fn is_solved(feedback: &[Feedback]) -> bool {
    feedback.iter().all(|&feedback| feedback == Feedback::Exact)
}

fn compare_face(guess: &[Color], target: &[Color], feedback: &mut [Feedback]) {
    // Indexed by position parity, then color
    let mut available = [[0_u8; Color::COUNT]; 2];

    for (position, (guess, target)) in guess.iter().zip(target).enumerate() {
        if guess != target {
            available[position % 2][target.index()] += 1;
        }
    }

    for (position, ((guess, target), feedback)) in
        guess.iter().zip(target).zip(feedback).enumerate()
    {
        *feedback = if guess == target {
            Feedback::Exact
        } else {
            let budget = &mut available[position % 2][guess.index()];
            if *budget > 0 {
                *budget -= 1;
                Feedback::Partial
            } else {
                Feedback::Absent
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cube_state::CubeState, cubie::Cubie, facelets::to_facelets};

    use Color::*;
    use Feedback::*;

    fn score_face(guess: [Color; 9], target: [Color; 9]) -> [Feedback; 9] {
        let mut feedback = [Absent; 9];
        compare_face(&guess, &target, &mut feedback);
        feedback
    }

    #[test]
    fn test_identical_is_exact() {
        let mut state = CubeState::solved();
        state.twist(Cubie::UFR);
        state.twist(Cubie::DBR);
        let colors = to_facelets(&state);
        assert!(is_solved(&compare(&colors, &colors)));
    }

    #[test]
    fn test_budget_per_color() {
        // Corner positions 0 2 4 6 8 hold target A B C A D and guess B A A A D,
        // edge positions agree
        let target = [U, R, R, R, F, R, U, R, D];
        let guess = [R, R, U, R, U, R, U, R, D];
        let feedback = score_face(guess, target);
        assert_eq!(
            [feedback[0], feedback[2], feedback[4], feedback[6], feedback[8]],
            [Partial, Partial, Absent, Exact, Exact]
        );
        assert!([1, 3, 5, 7].iter().all(|&i| feedback[i] == Exact));
    }

    #[test]
    fn test_piece_kinds_do_not_share_budget() {
        // The missed edge-position B cannot credit a corner-position B
        let target = [U, B, U, U, U, U, U, U, U];
        let guess = [B, L, U, U, U, U, U, U, U];
        let feedback = score_face(guess, target);
        assert_eq!(feedback[0], Absent);
        assert_eq!(feedback[1], Absent);

        let guess = [U, F, U, B, U, U, U, U, U];
        let feedback = score_face(guess, target);
        assert_eq!(feedback[1], Absent);
        assert_eq!(feedback[3], Partial);
    }

    #[test]
    fn test_not_symmetric() {
        let a = [U, L, R, L, U, L, U, L, U];
        let b = [R, L, F, L, U, L, U, L, U];
        let forward = score_face(a, b);
        let backward = score_face(b, a);
        assert_eq!((forward[0], forward[2]), (Absent, Partial));
        assert_eq!((backward[0], backward[2]), (Partial, Absent));
    }

    #[test]
    fn test_faces_are_independent() {
        let target = to_facelets(&CubeState::solved());
        let mut guess = target;
        // An R sticker on the U face, while R is only missed on the R face
        guess[0] = R;
        guess[27] = U;
        let feedback = compare(&guess, &target);
        assert_eq!(feedback[0], Absent);
        assert_eq!(feedback[27], Absent);
        assert_eq!(feedback.iter().filter(|&&f| f == Exact).count(), 52);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(format!("{Exact}{Partial}{Absent}"), "./X");
    }
}
