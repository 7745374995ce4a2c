use serde_json::{json, Value};

use crate::practice_engine::models::{MatchPair, PresentationForm, Question};

/// Build the `pairs` array; empty unless the question is a match.
fn client_pairs(pairs: &[MatchPair]) -> Value {
    Value::Array(
        pairs
            .iter()
            .map(|p| json!({ "left": p.left, "right": p.right }))
            .collect(),
    )
}

/// Client-side name of the presentation form.
fn client_type(form: PresentationForm) -> &'static str {
    match form {
        PresentationForm::MultipleChoice => "multiple-choice",
        PresentationForm::FillBlank      => "fill-blank",
        PresentationForm::Match          => "match",
    }
}

/// Map a [`Question`] to the camelCase record the web/mobile client renders.
pub fn to_client_json(question: &Question) -> Value {
    json!({
        "id": question.id,
        "question": question.prompt,
        "options": question.options,
        "correctAnswer": question.correct_answer,
        "operation": question.operation.label(),
        "difficulty": question.difficulty.label(),
        "type": client_type(question.form),
        "pairs": client_pairs(&question.pairs),
    })
}

/// A whole batch, in order.
pub fn batch_to_client_json(questions: &[Question]) -> Value {
    Value::Array(questions.iter().map(to_client_json).collect())
}
