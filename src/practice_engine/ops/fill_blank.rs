use rand::seq::SliceRandom;
use rand::Rng;

use crate::practice_engine::{
    config::GeneratorConfig,
    helpers::{draw, numeric_options, question, BLANK, SMALL_SPREAD},
    models::{BasicOp, Difficulty, NumberRange, Operation, PresentationForm, Question},
};

/// Offset added to the minuend so fill-blank subtraction reads as a real
/// take-away even at the bottom of a range.
const MINUEND_LIFT: i64 = 10;

/// Operand range for products and quotients: the difficulty range capped at
/// the tier's product cap. When the cap sits below the range (hard), the
/// operands come from just above the cap up to the range minimum.
pub fn product_range(difficulty: Difficulty) -> NumberRange {
    let range = difficulty.operand_range();
    let cap = difficulty.product_cap();
    if cap < range.min {
        NumberRange { min: cap + 1, max: range.min }
    } else {
        NumberRange { min: range.min, max: range.max.min(cap) }
    }
}

/// `a op b = c` with either `a` or `b` replaced by the blank marker.
pub fn generate<R: Rng>(
    rng: &mut R, difficulty: Difficulty, config: &GeneratorConfig, id: String,
) -> Question {
    let op = *BasicOp::ALL.choose(rng).unwrap_or(&BasicOp::Addition);
    let range = difficulty.operand_range();

    let (a, b, result) = match op {
        BasicOp::Addition => {
            let a = draw(rng, range);
            let b = draw(rng, range);
            (a, b, a + b)
        }
        BasicOp::Subtraction => {
            let a = draw(rng, NumberRange { min: range.min + MINUEND_LIFT, max: range.max + MINUEND_LIFT });
            let b = rng.gen_range(1..=a);
            (a, b, a - b)
        }
        BasicOp::Multiplication => {
            let capped = product_range(difficulty);
            let a = draw(rng, capped);
            let b = draw(rng, capped);
            (a, b, a * b)
        }
        BasicOp::Division => {
            let capped = product_range(difficulty);
            let divisor = draw(rng, capped);
            let quotient = draw(rng, capped);
            (divisor * quotient, divisor, quotient)
        }
    };

    let symbol = op.symbol();
    let hide_first = rng.gen_bool(0.5);
    let (prompt, hidden) = if hide_first {
        (format!("{BLANK} {symbol} {b} = {result}"), a)
    } else {
        (format!("{a} {symbol} {BLANK} = {result}"), b)
    };

    let form = PresentationForm::FillBlank;
    let opts = numeric_options(rng, hidden, &SMALL_SPREAD, config.distinct_options, form);
    question(
        id, Operation::FillBlank, difficulty, form,
        prompt, hidden.to_string(), opts, Vec::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Put the answer back into the blank and check the statement holds.
    fn holds(prompt: &str, answer: &str) -> bool {
        let filled = prompt.replacen(BLANK, answer, 1);
        let (lhs, rhs) = filled.split_once(" = ").unwrap();
        let parts: Vec<&str> = lhs.split(' ').collect();
        let (a, op, b): (i64, &str, i64) = (parts[0].parse().unwrap(), parts[1], parts[2].parse().unwrap());
        let c: i64 = rhs.parse().unwrap();
        match op {
            "+" => a + b == c,
            "-" => a - b == c,
            "×" => a * b == c,
            "÷" => b != 0 && a % b == 0 && a / b == c,
            other => panic!("unexpected operator {other}"),
        }
    }

    #[test]
    fn filled_blank_reconstructs_a_true_statement() {
        let cfg = GeneratorConfig::default();
        for difficulty in Difficulty::ALL {
            let mut rng = StdRng::seed_from_u64(difficulty as u64 + 31);
            for _ in 0..400 {
                let q = generate(&mut rng, difficulty, &cfg, "t".into());
                assert_eq!(q.prompt.matches(BLANK).count(), 1, "{}", q.prompt);
                assert!(holds(&q.prompt, &q.correct_answer), "{} -> {}", q.prompt, q.correct_answer);
                assert_eq!(q.options[0], q.correct_answer);
                assert_eq!(q.form, PresentationForm::FillBlank);
            }
        }
    }

    #[test]
    fn product_range_is_capped_per_tier() {
        assert_eq!(product_range(Difficulty::Simple), NumberRange { min: 1, max: 10 });
        assert_eq!(product_range(Difficulty::Medium), NumberRange { min: 10, max: 20 });
        assert_eq!(product_range(Difficulty::Hard), NumberRange { min: 31, max: 50 });
    }

    #[test]
    fn hard_products_never_use_the_cap_itself() {
        let mut rng = StdRng::seed_from_u64(21);
        let cfg = GeneratorConfig::default();
        for _ in 0..300 {
            let q = generate(&mut rng, Difficulty::Hard, &cfg, "FIL-TEST".into());
            if let Some((lhs, _)) = q.prompt.split_once(" × ") {
                let a = if lhs == BLANK { &q.correct_answer } else { lhs };
                let a: i64 = a.parse().unwrap();
                assert!((31..=50).contains(&a), "{}", q.prompt);
            }
        }
    }

    #[test]
    fn hidden_divisor_is_the_answer() {
        let cfg = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(77);
        let mut seen = false;
        for _ in 0..500 {
            let q = generate(&mut rng, Difficulty::Simple, &cfg, "t".into());
            if q.prompt.contains(&format!("÷ {BLANK}")) {
                let lhs = q.prompt.split(" ÷ ").next().unwrap();
                let rhs = q.prompt.rsplit(" = ").next().unwrap();
                let (a, c): (i64, i64) = (lhs.parse().unwrap(), rhs.parse().unwrap());
                assert_eq!(q.correct_answer, (a / c).to_string());
                seen = true;
            }
        }
        assert!(seen, "expected at least one hidden divisor in 500 draws");
    }
}
