use log::debug;
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

use crate::practice_engine::{
    config::GeneratorConfig,
    helpers::question,
    models::{BasicOp, Difficulty, Operation, PresentationForm, Question, QuestionRequest},
    ops,
};

/// Signature shared by every generator under `ops`.
type Builder<R> = fn(&mut R, Difficulty, &GeneratorConfig, String) -> Question;

/// Question id from an operation prefix + 32 random bits.
fn make_question_id(prefix: &str, rng: &mut impl RngCore) -> String {
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// The canonical question returned for an unrecognised operation label.
/// Options are fixed and never shuffled.
///
/// An unknown label has no [`Operation`], so the record reports
/// [`Operation::Addition`] (what `2 + 2` is) and the `DEF` id prefix marks
/// it as the fallback.
pub fn fallback_question<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Question {
    question(
        make_question_id("DEF", rng),
        Operation::Addition,
        difficulty,
        PresentationForm::MultipleChoice,
        "2 + 2 = ?".to_string(),
        "4".to_string(),
        ["4", "5", "3", "6"].map(String::from).to_vec(),
        Vec::new(),
    )
}

/// Generate one question using a caller-owned RNG.
///
/// Mixed picks one of the four basic operations and forwards the full
/// config, table range and match operations included.
pub fn generate_with<R: Rng>(
    rng: &mut R,
    operation: Operation,
    difficulty: Difficulty,
    config: &GeneratorConfig,
) -> Question {
    let (prefix, build): (&str, Builder<R>) = match operation {
        Operation::Mixed => {
            let picked = *BasicOp::ALL.choose(rng).unwrap_or(&BasicOp::Addition);
            debug!("mixed practice resolved to {}", picked);
            return generate_with(rng, picked.into(), difficulty, config);
        }
        Operation::Addition       => ("ADD", ops::basic::addition),
        Operation::Subtraction    => ("SUB", ops::basic::subtraction),
        Operation::Multiplication => ("MUL", ops::basic::multiplication),
        Operation::Division       => ("DIV", ops::basic::division),
        Operation::Tables         => ("TBL", ops::basic::tables),
        Operation::Percentage     => ("PCT", ops::advanced::percentage),
        Operation::SquareRoot     => ("SQR", ops::advanced::square_root),
        Operation::CubeRoot       => ("CBR", ops::advanced::cube_root),
        Operation::Algebra        => ("ALG", ops::advanced::algebra),
        Operation::FillBlank      => ("FIL", ops::fill_blank::generate),
        Operation::Match          => ("MAT", ops::matching::generate),
    };

    let id = make_question_id(prefix, rng);
    let q = build(rng, difficulty, config, id);

    debug!("generated {} [{}]: {}", q.id, q.difficulty.label(), q.prompt);
    q
}

/// Core entry point: seeds the RNG, resolves the operation and dispatches.
pub fn generate_question(request: QuestionRequest) -> Question {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    match request.operation.resolve() {
        Some(operation) => generate_with(&mut rng, operation, request.difficulty, &request.config),
        None => {
            debug!("unrecognised operation {:?}, using the canonical question", request.operation);
            fallback_question(&mut rng, request.difficulty)
        }
    }
}
