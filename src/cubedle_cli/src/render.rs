//! Text rendering of cube nets, feedback and statistics.

use cubedle_core::{
    Color, Cubie, FACELET_COUNT, Feedback,
    facelets::FACELETS_PER_FACE,
    session::{DailyRecord, MAX_TRACKED_GUESSES},
};
use itertools::Itertools;
use owo_colors::OwoColorize;

/// Face indices laid out as the unfolded cube.
const NET: [[Option<usize>; 4]; 3] = [
    [None, Some(0), None, None],
    [Some(1), Some(2), Some(3), Some(4)],
    [None, Some(5), None, None],
];

const CELL_WIDTH: usize = 3;
const BAR_WIDTH: usize = 30;
/// Never hide buckets past this many guesses when trimming the histogram.
const HISTOGRAM_START_LIMIT: usize = 15;

fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::U => (0xFF, 0xFF, 0xFF),
        Color::R => (0xEA, 0x20, 0x03),
        Color::F => (0x4D, 0xE4, 0x32),
        Color::D => (0xF6, 0xED, 0x35),
        Color::L => (0xF5, 0x92, 0x1D),
        Color::B => (0x62, 0xB3, 0xE1),
        Color::Blank => (0x44, 0x44, 0x44),
    }
}

fn cell(color: Color, feedback: Option<Feedback>, paint: bool) -> String {
    let mark = feedback.map_or(' ', Feedback::glyph);
    let text = format!("{}{mark} ", color.letter());
    if paint {
        let (r, g, b) = rgb(color);
        text.black().on_truecolor(r, g, b).to_string()
    } else {
        text
    }
}

/// Draw the 54 facelets as a net, with the feedback glyph next to each
/// sticker when given.
pub fn net(
    colors: &[Color; FACELET_COUNT],
    feedback: Option<&[Feedback; FACELET_COUNT]>,
    paint: bool,
) -> String {
    let mut out = String::new();
    let blank = " ".repeat(CELL_WIDTH * 3);

    for net_row in NET {
        for row in 0..3 {
            let line = net_row
                .iter()
                .map(|face| match face {
                    Some(face) => (0..3)
                        .map(|col| {
                            let index = face * FACELETS_PER_FACE + row * 3 + col;
                            cell(colors[index], feedback.map(|f| f[index]), paint)
                        })
                        .join(""),
                    None => blank.clone(),
                })
                .join(" ");
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    out
}

/// Guess-count histogram with one bar per bucket. Leading empty buckets are
/// skipped.
pub fn histogram(record: &DailyRecord) -> String {
    let buckets = &record.histogram;
    let start = (1..buckets.len())
        .find(|&i| buckets[i] != 0 || i == HISTOGRAM_START_LIMIT)
        .unwrap_or(1);
    let max = buckets[start..].iter().copied().max().unwrap_or(0).max(1);

    let mut out = String::new();
    for (bucket, &count) in buckets.iter().enumerate().skip(start) {
        let label = if bucket > MAX_TRACKED_GUESSES {
            format!(">{MAX_TRACKED_GUESSES}")
        } else {
            bucket.to_string()
        };
        let width = (count as usize * BAR_WIDTH).div_ceil(max as usize);
        out.push_str(&format!(
            "{label:>3} {} {count}\n",
            "#".repeat(width.max(1))
        ));
    }
    out
}

/// The guess in which each slot was first right.
pub fn first_correct(record: &DailyRecord) -> String {
    Cubie::ALL
        .iter()
        .zip(&record.first_correct)
        .map(|(slot, first)| match first {
            Some(guess) => format!("{:>3}: {guess}", slot.to_string()),
            None => format!("{:>3}: -", slot.to_string()),
        })
        .chunks(4)
        .into_iter()
        .map(|mut row| row.join("   "))
        .join("\n")
}

#[cfg(test)]
mod tests {
    use cubedle_core::{CubeState, compare, to_facelets};

    use super::*;

    #[test]
    fn test_solved_net() {
        let colors = to_facelets(&CubeState::solved());
        let feedback = compare(&colors, &colors);
        let text = net(&colors, Some(&feedback), false);
        assert!(text.ends_with("D. D. D.\n"));
        let lines = text.lines().collect_vec();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "          U. U. U.");
        assert_eq!(lines[3], "L. L. L.  F. F. F.  R. R. R.  B. B. B.");
        assert_eq!(lines[8], "          D. D. D.");
    }

    #[test]
    fn test_blank_net() {
        let colors = to_facelets(&CubeState::empty());
        let text = net(&colors, None, false);
        assert_eq!(text.lines().nth(1), Some("          X  U  X"));
    }

    #[test]
    fn test_histogram() {
        let mut record = DailyRecord::new("2024-1-1");
        record.histogram[3] = 2;
        record.histogram[5] = 1;
        record.histogram[21] = 1;
        let text = histogram(&record);
        assert_eq!(text.matches('\n').count(), 19);
        let lines = text.lines().collect_vec();
        assert_eq!(lines.len(), 19);
        assert!(lines[0].starts_with("  3 "));
        assert!(lines[0].ends_with(" 2"));
        assert!(lines[18].starts_with(">20 "));
    }

    #[test]
    fn test_first_correct() {
        let mut record = DailyRecord::new("2024-1-1");
        record.first_correct[0] = Some(3);
        let text = first_correct(&record);
        assert_eq!(text.lines().count(), 5);
        assert!(text.starts_with(" UF: 3    UR: -"));
    }
}
