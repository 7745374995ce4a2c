//! # arith_drill_gen
//!
//! An offline, seedable arithmetic practice engine.
//!
//! The library generates randomised practice questions for twelve operation
//! types (addition through algebra, plus mixed, fill-in-the-blank and
//! matching). Each question carries its prompt, the correct answer and
//! either four candidate options or four pairs to connect.
//!
//! ## How it works
//!
//! 1. Build a [`QuestionRequest`] with an operation, a difficulty, an
//!    optional [`GeneratorConfig`] and an optional RNG seed.
//! 2. Call [`generate_question`]. The engine draws operands from the
//!    difficulty's range (or the configured table range), computes the
//!    answer and derives three distractors from it.
//! 3. The returned [`Question`] is ready to display in any UI. Turn it into
//!    the client's JSON shape with [`to_client_json`].
//!
//! Around the generator sit a [`PracticeSession`] (a batch answered in
//! order, with skips, reveals and pause/stop) and a [`Profile`] that keeps
//! XP, streaks and play history.
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces the same question.
//! - **Total**: generation never fails. Unknown operation labels produce the
//!   canonical `2 + 2 = ?` question.
//! - **Explicit defaults**: table ranges and match operations come from the
//!   config passed in, never from global state.
//!
//! ## Quick start
//!
//! ```rust
//! use arith_drill_gen::{generate_question, Difficulty, Operation, QuestionRequest, TableRange};
//!
//! // Minimal: simple difficulty, default config, entropy.
//! let q = generate_question(QuestionRequest::new(Operation::Addition));
//! println!("Q: {}", q.prompt);
//!
//! // Full control:
//! let q = generate_question(
//!     QuestionRequest::new(Operation::Multiplication)
//!         .difficulty(Difficulty::Medium)
//!         .table_range(TableRange::new(2, 12))
//!         .seed(42),
//! );
//! for opt in &q.options {
//!     let mark = if *opt == q.correct_answer { "+" } else { " " };
//!     println!("[{mark}] {opt}");
//! }
//!
//! // Labels from a menu work too; unknown ones fall back.
//! let q = generate_question(QuestionRequest::new("unknown-op"));
//! assert_eq!(q.prompt, "2 + 2 = ?");
//! ```

pub mod client_adapter;
pub mod error;
pub mod practice_engine;

// Convenience re-exports so callers can use `arith_drill_gen::generate_question`
// directly without reaching into `practice_engine::`.
pub use client_adapter::{batch_to_client_json, to_client_json};
pub use error::{PracticeError, PracticeResult};
pub use practice_engine::{
    generate_question, generate_with, AnswerOutcome, BasicOp, Difficulty, GeneratorConfig,
    MatchPair, NumberRange, Operation, OperationSelector, PlayRecord, PracticeMode,
    PracticePreset, PracticeSession, PracticeSettings, PresentationForm, Profile, Question,
    QuestionRequest, Response, SessionSummary, TableRange,
};
