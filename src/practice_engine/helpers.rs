//! Shared builder functions used by every operation generator.
//!
//! Each generator does the same few things: draw operands from a range,
//! derive three distractors from the answer, put the options in display
//! order and wrap everything in a [`Question`]. These helpers keep the
//! operation files focused on the arithmetic.

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::practice_engine::models::*;

/// Placeholder substituted for the hidden operand in fill-blank prompts.
pub const BLANK: &str = "___";

/// Attempts spent redrawing one colliding distractor before stepping upward.
const REDRAW_LIMIT: usize = 8;

/// Uniform draw from an inclusive range. Inverted bounds are swapped.
pub fn draw<R: Rng>(rng: &mut R, range: NumberRange) -> i64 {
    let range = NumberRange::ordered(range.min, range.max);
    rng.gen_range(range.min..=range.max)
}

/// Offsets used to derive the three distractors: `answer + up`,
/// `answer - down` and `answer + far`.
#[derive(Debug, Clone)]
pub struct Spread {
    pub up: RangeInclusive<i64>,
    pub down: RangeInclusive<i64>,
    pub far: RangeInclusive<i64>,
}

pub const SUM_SPREAD: Spread = Spread { up: 1..=10, down: 1..=10, far: 5..=24 };
pub const DIFFERENCE_SPREAD: Spread = Spread { up: 1..=10, down: 1..=10, far: 3..=17 };
pub const PRODUCT_SPREAD: Spread = Spread { up: 1..=20, down: 1..=15, far: 5..=34 };
pub const SMALL_SPREAD: Spread = Spread { up: 1..=5, down: 1..=3, far: 2..=9 };
pub const PERCENT_SPREAD: Spread = Spread { up: 1..=10, down: 1..=5, far: 3..=17 };

impl Spread {
    /// Distractor for `slot` (0 = up, 1 = down, 2 = far), in units of `unit`.
    fn pick<R: Rng>(&self, rng: &mut R, slot: usize, answer: i64, unit: i64) -> i64 {
        match slot {
            0 => answer + rng.gen_range(self.up.clone()) * unit,
            1 => answer - rng.gen_range(self.down.clone()) * unit,
            _ => answer + rng.gen_range(self.far.clone()) * unit,
        }
    }
}

/// Three distractors around `answer`.
///
/// `unit` scales the offsets (1 for integers, 100 for values kept in
/// hundredths). With `distinct` off, collisions with the answer or between
/// distractors are left as drawn.
pub fn distractors<R: Rng>(
    rng: &mut R, answer: i64, spread: &Spread, unit: i64, distinct: bool,
) -> [i64; 3] {
    let mut picks = [0i64; 3];
    for slot in 0..3 {
        picks[slot] = spread.pick(rng, slot, answer, unit);
        if !distinct {
            continue;
        }
        let mut attempts = 0;
        while collides(answer, &picks[..slot], picks[slot]) && attempts < REDRAW_LIMIT {
            picks[slot] = spread.pick(rng, slot, answer, unit);
            attempts += 1;
        }
        if collides(answer, &picks[..slot], picks[slot]) {
            let mut step = 1;
            while collides(answer, &picks[..slot], answer + step * unit) {
                step += 1;
            }
            picks[slot] = answer + step * unit;
        }
    }
    picks
}

fn collides(answer: i64, earlier: &[i64], candidate: i64) -> bool {
    candidate == answer || earlier.contains(&candidate)
}

/// Root distractors: `r + 1`, `r + 2`, and `r - 1` unless that would not be
/// positive, in which case `r + 3`.
pub fn root_distractors(root: i64) -> [i64; 3] {
    let below = if root - 1 > 0 { root - 1 } else { root + 3 };
    [root + 1, root + 2, below]
}

/// Render a value stored in hundredths as the shortest decimal
/// (`70` → `"0.7"`, `1225` → `"12.25"`, `500` → `"5"`).
pub fn format_hundredths(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.abs();
    let (whole, frac) = (abs / 100, abs % 100);
    if frac == 0 {
        format!("{sign}{whole}")
    } else if frac % 10 == 0 {
        format!("{sign}{whole}.{}", frac / 10)
    } else {
        format!("{sign}{whole}.{frac:02}")
    }
}

/// Answer first, then the distractors. Shuffled only when `shuffle` is set.
pub fn options<R: Rng>(
    rng: &mut R, answer: String, others: impl IntoIterator<Item = String>, shuffle: bool,
) -> Vec<String> {
    let mut opts: Vec<String> = std::iter::once(answer).chain(others).collect();
    if shuffle {
        opts.shuffle(rng);
    }
    opts
}

/// Integer answer + distractors, formatted and ordered for display.
pub fn numeric_options<R: Rng>(
    rng: &mut R, answer: i64, spread: &Spread, distinct: bool, form: PresentationForm,
) -> Vec<String> {
    let others = distractors(rng, answer, spread, 1, distinct);
    options(
        rng,
        answer.to_string(),
        others.iter().map(|d| d.to_string()),
        form == PresentationForm::MultipleChoice,
    )
}

/// Assemble the final [`Question`].
pub fn question(
    id: String, operation: Operation, difficulty: Difficulty, form: PresentationForm,
    prompt: String, correct_answer: String, options: Vec<String>, pairs: Vec<MatchPair>,
) -> Question {
    Question {
        id,
        prompt,
        options,
        correct_answer,
        operation,
        difficulty,
        form,
        pairs,
    }
}
