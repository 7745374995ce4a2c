//! Core practice engine: question generation, answer checking and sessions.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: operations, difficulty, ranges, question/request structs |
//! | `config`    | Generator config, practice settings and per-difficulty presets |
//! | `helpers`   | Range draws, distractor spreads, option ordering, the question builder |
//! | `generator` | Entry points `generate_question()` / `generate_with()`, dispatches to ops |
//! | `ops`       | Per-operation generators (basic, advanced, fill-blank, matching) |
//! | `answer`    | Grading of choices, typed answers and match pairings |
//! | `session`   | A practice run over a batch of questions |
//! | `progress`  | XP, streak and play history |
//! | `tables`    | Multiplication charts for the learn-tables screen |

pub mod answer;
pub mod config;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod ops;
pub mod progress;
pub mod session;
pub mod tables;

// Re-export the public API surface so callers can use
// `practice_engine::generate_question` without reaching into sub-modules.
pub use config::{GeneratorConfig, PracticePreset, PracticeSettings};
pub use generator::{generate_question, generate_with};
pub use models::{
    BasicOp, Difficulty, MatchPair, NumberRange, Operation, OperationSelector,
    PresentationForm, Question, QuestionRequest, TableRange,
};
pub use progress::{PlayRecord, Profile};
pub use session::{AnswerOutcome, PracticeMode, PracticeSession, Response, SessionSummary};
