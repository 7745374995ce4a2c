//! Checking learner responses against a [`Question`].

use rand::seq::SliceRandom;
use rand::Rng;

use crate::practice_engine::models::{MatchPair, PresentationForm, Question};

/// A tapped option or a typed answer. Surrounding whitespace is ignored;
/// an empty answer is always wrong.
pub fn is_correct_choice(question: &Question, given: &str) -> bool {
    let given = given.trim();
    !given.is_empty() && question.form != PresentationForm::Match && given == question.correct_answer
}

/// A full pairing: every left-hand prompt must be linked to its own result.
/// Extra or missing links make the pairing wrong.
pub fn is_correct_pairing(question: &Question, matches: &[MatchPair]) -> bool {
    if question.form != PresentationForm::Match || matches.len() != question.pairs.len() {
        return false;
    }
    question.pairs.iter().all(|pair| {
        matches
            .iter()
            .any(|m| m.left == pair.left && m.right == pair.right)
    })
}

/// Right-hand values of a match question in display order.
pub fn right_column<R: Rng>(question: &Question, rng: &mut R) -> Vec<String> {
    let mut rights: Vec<String> = question.pairs.iter().map(|p| p.right.clone()).collect();
    rights.shuffle(rng);
    rights
}
