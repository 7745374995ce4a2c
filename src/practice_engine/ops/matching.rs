use std::collections::HashSet;

use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::practice_engine::{
    config::GeneratorConfig,
    helpers::{draw, question},
    models::{BasicOp, Difficulty, MatchPair, NumberRange, Operation, PresentationForm, Question},
};

pub const MATCH_PROMPT: &str = "Match the questions with their correct answers";
pub const PAIR_COUNT: usize = 4;
/// Draws allowed before the remaining slots are filled deterministically.
pub const MATCH_ATTEMPTS: usize = 64;

/// One `left = right` pair for the given operation.
fn draw_pair<R: Rng>(rng: &mut R, op: BasicOp, difficulty: Difficulty) -> (String, i64) {
    let range = difficulty.operand_range();
    let small = NumberRange { min: 1, max: range.max.min(difficulty.product_cap()) };
    let symbol = op.symbol();
    match op {
        BasicOp::Addition => {
            let (a, b) = (draw(rng, range), draw(rng, range));
            (format!("{a} {symbol} {b}"), a + b)
        }
        BasicOp::Subtraction => {
            let a = draw(rng, range);
            let b = rng.gen_range(1..=a);
            (format!("{a} {symbol} {b}"), a - b)
        }
        BasicOp::Multiplication => {
            let (a, b) = (draw(rng, small), draw(rng, small));
            (format!("{a} {symbol} {b}"), a * b)
        }
        BasicOp::Division => {
            let divisor = draw(rng, small);
            let quotient = draw(rng, small);
            (format!("{} {symbol} {divisor}", divisor * quotient), quotient)
        }
    }
}

/// Addition pairs walked in order until every slot has an unused result.
/// Sums over any operand range cover far more than four values.
fn fill_remaining(pairs: &mut Vec<MatchPair>, used: &mut HashSet<i64>, range: NumberRange) {
    'outer: for a in range.min..=range.max {
        for b in range.min..=range.max {
            if pairs.len() >= PAIR_COUNT {
                break 'outer;
            }
            if used.insert(a + b) {
                pairs.push(MatchPair { left: format!("{a} + {b}"), right: (a + b).to_string() });
            }
        }
    }
}

/// Four prompt/result pairs with pairwise-distinct results.
pub fn generate<R: Rng>(
    rng: &mut R, difficulty: Difficulty, config: &GeneratorConfig, id: String,
) -> Question {
    let pool = config.match_pool();
    let mut pairs: Vec<MatchPair> = Vec::with_capacity(PAIR_COUNT);
    let mut used: HashSet<i64> = HashSet::new();

    let mut attempts = 0;
    while pairs.len() < PAIR_COUNT && attempts < MATCH_ATTEMPTS {
        attempts += 1;
        let op = *pool.choose(rng).unwrap_or(&BasicOp::Addition);
        let (left, result) = draw_pair(rng, op, difficulty);
        if used.insert(result) {
            pairs.push(MatchPair { left, right: result.to_string() });
        }
    }

    if pairs.len() < PAIR_COUNT {
        warn!(
            "match generation used all {MATCH_ATTEMPTS} attempts with {} distinct results; \
             filling the rest with addition",
            pairs.len()
        );
        fill_remaining(&mut pairs, &mut used, difficulty.operand_range());
    }

    let correct_answer = serde_json::to_string(&pairs).unwrap_or_default();
    question(
        id, Operation::Match, difficulty, PresentationForm::Match,
        MATCH_PROMPT.to_string(), correct_answer, Vec::new(), pairs,
    )
}
