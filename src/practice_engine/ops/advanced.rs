use rand::seq::SliceRandom;
use rand::Rng;

use crate::practice_engine::{
    config::GeneratorConfig,
    helpers::{
        distractors, draw, format_hundredths, numeric_options, options, question,
        root_distractors, PERCENT_SPREAD, SMALL_SPREAD,
    },
    models::{Difficulty, NumberRange, Operation, PresentationForm, Question},
};

pub const PERCENTS: [i64; 5] = [10, 20, 25, 50, 75];
pub const PERFECT_SQUARES: [i64; 10] = [1, 4, 9, 16, 25, 36, 49, 64, 81, 100];
pub const PERFECT_CUBES: [i64; 5] = [1, 8, 27, 64, 125];

/// `p% of base`. The result is kept exact in hundredths and never rounded,
/// so `10% of 7` is `0.7`.
pub fn percentage<R: Rng>(
    rng: &mut R, difficulty: Difficulty, config: &GeneratorConfig, id: String,
) -> Question {
    let base = draw(rng, difficulty.operand_range());
    let percent = *PERCENTS.choose(rng).unwrap_or(&PERCENTS[0]);
    let hundredths = base * percent;
    let others = distractors(rng, hundredths, &PERCENT_SPREAD, 100, config.distinct_options);
    let answer = format_hundredths(hundredths);
    let opts = options(rng, answer.clone(), others.map(format_hundredths), true);
    question(
        id, Operation::Percentage, difficulty, PresentationForm::MultipleChoice,
        format!("{percent}% of {base} = ?"), answer, opts, Vec::new(),
    )
}

fn root<R: Rng>(
    rng: &mut R, difficulty: Difficulty, id: String,
    operation: Operation, table: &[i64], sign: &str, degree: u32,
) -> Question {
    let operand = *table.choose(rng).unwrap_or(&1);
    let answer = (1..=operand).find(|r| r.pow(degree) == operand).unwrap_or(1);
    let opts = options(
        rng,
        answer.to_string(),
        root_distractors(answer).map(|d| d.to_string()),
        true,
    );
    question(
        id, operation, difficulty, PresentationForm::MultipleChoice,
        format!("{sign}{operand} = ?"), answer.to_string(), opts, Vec::new(),
    )
}

pub fn square_root<R: Rng>(
    rng: &mut R, difficulty: Difficulty, _config: &GeneratorConfig, id: String,
) -> Question {
    root(rng, difficulty, id, Operation::SquareRoot, &PERFECT_SQUARES, "√", 2)
}

pub fn cube_root<R: Rng>(
    rng: &mut R, difficulty: Difficulty, _config: &GeneratorConfig, id: String,
) -> Question {
    root(rng, difficulty, id, Operation::CubeRoot, &PERFECT_CUBES, "∛", 3)
}

/// `c·x + k = r`, solved for a positive integer `x`.
pub fn algebra<R: Rng>(
    rng: &mut R, difficulty: Difficulty, config: &GeneratorConfig, id: String,
) -> Question {
    let x = draw(rng, NumberRange { min: 1, max: 20 });
    let coefficient = draw(rng, NumberRange { min: 1, max: 10 });
    let constant = draw(rng, NumberRange { min: 1, max: 20 });
    let result = coefficient * x + constant;
    let form = PresentationForm::MultipleChoice;
    let opts = numeric_options(rng, x, &SMALL_SPREAD, config.distinct_options, form);
    question(
        id, Operation::Algebra, difficulty, form,
        format!("{coefficient}x + {constant} = {result}. Find x"),
        x.to_string(), opts, Vec::new(),
    )
}
