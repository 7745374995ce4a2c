use rand::Rng;

use crate::practice_engine::{
    config::GeneratorConfig,
    helpers::{
        draw, numeric_options, question, Spread, DIFFERENCE_SPREAD, PRODUCT_SPREAD,
        SMALL_SPREAD, SUM_SPREAD,
    },
    models::{Difficulty, NumberRange, Operation, PresentationForm, Question},
};

const MULTIPLIERS: NumberRange = NumberRange { min: 1, max: 10 };
const TABLE_MULTIPLIERS: NumberRange = NumberRange { min: 1, max: 12 };

fn multiple_choice<R: Rng>(
    rng: &mut R, id: String, operation: Operation, difficulty: Difficulty,
    config: &GeneratorConfig, prompt: String, answer: i64,
    spread: &Spread,
) -> Question {
    let form = PresentationForm::MultipleChoice;
    let opts = numeric_options(rng, answer, spread, config.distinct_options, form);
    question(id, operation, difficulty, form, prompt, answer.to_string(), opts, Vec::new())
}

pub fn addition<R: Rng>(
    rng: &mut R, difficulty: Difficulty, config: &GeneratorConfig, id: String,
) -> Question {
    let range = difficulty.operand_range();
    let a = draw(rng, range);
    let b = draw(rng, range);
    multiple_choice(
        rng, id, Operation::Addition, difficulty, config,
        format!("{a} + {b} = ?"), a + b, &SUM_SPREAD,
    )
}

pub fn subtraction<R: Rng>(
    rng: &mut R, difficulty: Difficulty, config: &GeneratorConfig, id: String,
) -> Question {
    let a = draw(rng, difficulty.operand_range());
    let b = rng.gen_range(1..=a);
    multiple_choice(
        rng, id, Operation::Subtraction, difficulty, config,
        format!("{a} - {b} = ?"), a - b, &DIFFERENCE_SPREAD,
    )
}

pub fn multiplication<R: Rng>(
    rng: &mut R, difficulty: Difficulty, config: &GeneratorConfig, id: String,
) -> Question {
    let factor = draw(rng, config.tables_for(Operation::Multiplication));
    let multiplier = draw(rng, MULTIPLIERS);
    multiple_choice(
        rng, id, Operation::Multiplication, difficulty, config,
        format!("{factor} × {multiplier} = ?"), factor * multiplier, &PRODUCT_SPREAD,
    )
}

/// Exact division by construction: the dividend is `divisor × quotient`.
pub fn division<R: Rng>(
    rng: &mut R, difficulty: Difficulty, config: &GeneratorConfig, id: String,
) -> Question {
    let divisor = draw(rng, config.tables_for(Operation::Division));
    let quotient = draw(rng, MULTIPLIERS);
    let dividend = divisor * quotient;
    multiple_choice(
        rng, id, Operation::Division, difficulty, config,
        format!("{dividend} ÷ {divisor} = ?"), quotient, &SMALL_SPREAD,
    )
}

pub fn tables<R: Rng>(
    rng: &mut R, difficulty: Difficulty, config: &GeneratorConfig, id: String,
) -> Question {
    let table = draw(rng, config.tables_for(Operation::Tables));
    let multiplier = draw(rng, TABLE_MULTIPLIERS);
    multiple_choice(
        rng, id, Operation::Tables, difficulty, config,
        format!("{table} × {multiplier} = ?"), table * multiplier, &SUM_SPREAD,
    )
}
