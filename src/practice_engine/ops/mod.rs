//! Operation generators grouped by family.
//!
//! Every public function follows the same signature:
//!
//! ```ignore
//! pub fn <name><R: Rng>(
//!     rng: &mut R,
//!     difficulty: Difficulty,
//!     config: &GeneratorConfig,
//!     id: String,
//! ) -> Question
//! ```
//!
//! The generator dispatches to these via `generator.rs`.

/// Addition, subtraction, multiplication, division, tables
pub mod basic;
/// Percentage, square root, cube root, algebra
pub mod advanced;
/// Equations with one hidden operand
pub mod fill_blank;
/// Four prompt/result pairs to connect
pub mod matching;
