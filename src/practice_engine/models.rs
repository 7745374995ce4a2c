use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PracticeError;
use crate::practice_engine::config::GeneratorConfig;

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Percentage,
    SquareRoot,
    CubeRoot,
    Tables,
    Algebra,
    Mixed,
    FillBlank,
    Match,
}

impl Operation {
    pub const ALL: [Operation; 12] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
        Operation::Percentage,
        Operation::SquareRoot,
        Operation::CubeRoot,
        Operation::Tables,
        Operation::Algebra,
        Operation::Mixed,
        Operation::FillBlank,
        Operation::Match,
    ];

    /// Stable kebab-case label, e.g. `"square-root"`.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Addition       => "addition",
            Operation::Subtraction    => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division       => "division",
            Operation::Percentage     => "percentage",
            Operation::SquareRoot     => "square-root",
            Operation::CubeRoot       => "cube-root",
            Operation::Tables         => "tables",
            Operation::Algebra        => "algebra",
            Operation::Mixed          => "mixed",
            Operation::FillBlank      => "fill-blank",
            Operation::Match          => "match",
        }
    }

    /// Parse a kebab-case label. Returns `None` for anything unrecognised.
    pub fn from_label(label: &str) -> Option<Operation> {
        Operation::ALL.into_iter().find(|op| op.label() == label)
    }
}

/// Human title shown in menus and play history.
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Addition       => "Addition",
            Operation::Subtraction    => "Subtraction",
            Operation::Multiplication => "Multiplication",
            Operation::Division       => "Division",
            Operation::Percentage     => "Percentage",
            Operation::SquareRoot     => "Square Root",
            Operation::CubeRoot       => "Cube Root",
            Operation::Tables         => "Tables (2-30)",
            Operation::Algebra        => "Algebra",
            Operation::Mixed          => "Mixed Practice",
            Operation::FillBlank      => "Fill Missing Number",
            Operation::Match          => "Match Following",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Operation {
    type Err = PracticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::from_label(s).ok_or_else(|| PracticeError::UnknownOperation(s.to_string()))
    }
}

/// The four two-operand operations that mixed, fill-blank and match draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BasicOp {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl BasicOp {
    pub const ALL: [BasicOp; 4] = [
        BasicOp::Addition,
        BasicOp::Subtraction,
        BasicOp::Multiplication,
        BasicOp::Division,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BasicOp::Addition       => "+",
            BasicOp::Subtraction    => "-",
            BasicOp::Multiplication => "×",
            BasicOp::Division       => "÷",
        }
    }
}

impl From<BasicOp> for Operation {
    fn from(op: BasicOp) -> Self {
        match op {
            BasicOp::Addition       => Operation::Addition,
            BasicOp::Subtraction    => Operation::Subtraction,
            BasicOp::Multiplication => Operation::Multiplication,
            BasicOp::Division       => Operation::Division,
        }
    }
}

impl fmt::Display for BasicOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Operation::from(*self))
    }
}

// ---------------------------------------------------------------------------
// Difficulty and numeric ranges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    #[default]
    Simple,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Simple, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Simple => "simple",
            Difficulty::Medium => "medium",
            Difficulty::Hard   => "hard",
        }
    }

    /// Inclusive operand range for this tier.
    pub fn operand_range(self) -> NumberRange {
        match self {
            Difficulty::Simple => NumberRange { min: 1, max: 10 },
            Difficulty::Medium => NumberRange { min: 10, max: 50 },
            Difficulty::Hard   => NumberRange { min: 50, max: 100 },
        }
    }

    /// Upper bound for multiplication/division operands in fill-blank and match.
    pub fn product_cap(self) -> i64 {
        match self {
            Difficulty::Simple => 12,
            Difficulty::Medium => 20,
            Difficulty::Hard   => 30,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Simple => write!(f, "Simple"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard   => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = PracticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| PracticeError::UnknownDifficulty(s.to_string()))
    }
}

/// Inclusive integer interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: i64,
    pub max: i64,
}

/// Range of "table" numbers for multiplication, division and tables.
pub type TableRange = NumberRange;

/// Largest table number a [`TableRange`] may hold. Products and distractor
/// offsets built on it stay far inside `i64`.
pub const MAX_TABLE: i64 = 1_000_000;

impl NumberRange {
    /// Build a table range: bounds are put in order, then clamped to
    /// `1..=MAX_TABLE` so a divisor can never be zero and products never
    /// overflow.
    pub fn new(min: i64, max: i64) -> Self {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let lo = lo.clamp(1, MAX_TABLE);
        NumberRange { min: lo, max: hi.clamp(lo, MAX_TABLE) }
    }

    /// `[min, max]` with the bounds swapped if they arrive inverted.
    pub fn ordered(a: i64, b: i64) -> Self {
        NumberRange { min: a.min(b), max: a.max(b) }
    }

    pub fn contains(&self, n: i64) -> bool {
        (self.min..=self.max).contains(&n)
    }
}

// ---------------------------------------------------------------------------
// Question record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresentationForm {
    MultipleChoice,
    FillBlank,
    Match,
}

impl fmt::Display for PresentationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentationForm::MultipleChoice => write!(f, "multiple-choice"),
            PresentationForm::FillBlank      => write!(f, "fill-blank"),
            PresentationForm::Match          => write!(f, "match"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPair {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Opaque, session-scoped token such as `"ADD-1F2E3D4C"`.
    pub id: String,
    pub prompt: String,
    /// Four candidates; empty for match questions.
    pub options: Vec<String>,
    /// For match questions: JSON array of the pairs in order.
    pub correct_answer: String,
    pub operation: Operation,
    pub difficulty: Difficulty,
    pub form: PresentationForm,
    /// Populated only for match questions.
    pub pairs: Vec<MatchPair>,
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Either a known operation or a raw label coming from a menu or a URL.
/// Unrecognised labels produce the canonical fallback question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationSelector {
    Known(Operation),
    Label(String),
}

impl OperationSelector {
    pub fn resolve(&self) -> Option<Operation> {
        match self {
            OperationSelector::Known(op) => Some(*op),
            OperationSelector::Label(s)  => Operation::from_label(s),
        }
    }
}

impl From<Operation> for OperationSelector {
    fn from(op: Operation) -> Self {
        OperationSelector::Known(op)
    }
}

impl From<BasicOp> for OperationSelector {
    fn from(op: BasicOp) -> Self {
        OperationSelector::Known(op.into())
    }
}

impl From<&str> for OperationSelector {
    fn from(s: &str) -> Self {
        OperationSelector::Label(s.to_string())
    }
}

impl From<String> for OperationSelector {
    fn from(s: String) -> Self {
        OperationSelector::Label(s)
    }
}

#[derive(Debug, Clone)]
pub struct QuestionRequest {
    pub operation: OperationSelector,
    pub difficulty: Difficulty,
    pub config: GeneratorConfig,
    pub rng_seed: Option<u64>,
}

impl QuestionRequest {
    /// Minimal request: simple difficulty, default config, entropy seed.
    pub fn new(operation: impl Into<OperationSelector>) -> Self {
        QuestionRequest {
            operation: operation.into(),
            difficulty: Difficulty::Simple,
            config: GeneratorConfig::default(),
            rng_seed: None,
        }
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn table_range(mut self, range: TableRange) -> Self {
        self.config.table_range = Some(range);
        self
    }

    pub fn match_operations(mut self, ops: impl Into<Vec<BasicOp>>) -> Self {
        self.config.match_operations = ops.into();
        self
    }

    pub fn distinct_options(mut self, distinct: bool) -> Self {
        self.config.distinct_options = distinct;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_labels_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.label().parse::<Operation>().unwrap(), op);
        }
        assert!(Operation::from_label("learn-tables").is_none());
        assert!(matches!(
            "nope".parse::<Operation>(),
            Err(PracticeError::UnknownOperation(s)) if s == "nope"
        ));
    }

    #[test]
    fn difficulty_ranges_match_tiers() {
        assert_eq!(Difficulty::Simple.operand_range(), NumberRange { min: 1, max: 10 });
        assert_eq!(Difficulty::Medium.operand_range(), NumberRange { min: 10, max: 50 });
        assert_eq!(Difficulty::Hard.operand_range(), NumberRange { min: 50, max: 100 });
        assert_eq!("hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn table_range_normalises_bounds() {
        assert_eq!(TableRange::new(10, 2), TableRange { min: 2, max: 10 });
        assert_eq!(TableRange::new(0, 5), TableRange { min: 1, max: 5 });
        assert_eq!(TableRange::new(-4, -1), TableRange { min: 1, max: 1 });
        assert_eq!(NumberRange::ordered(50, 30), NumberRange { min: 30, max: 50 });
    }

    #[test]
    fn table_range_is_capped_in_magnitude() {
        let huge = i64::MAX / 4;
        assert_eq!(TableRange::new(huge, huge), TableRange { min: MAX_TABLE, max: MAX_TABLE });
        assert_eq!(TableRange::new(3, i64::MAX), TableRange { min: 3, max: MAX_TABLE });
        assert_eq!(TableRange::new(i64::MIN, i64::MAX), TableRange { min: 1, max: MAX_TABLE });
    }

    #[test]
    fn serde_uses_kebab_case_labels() {
        let json = serde_json::to_string(&Operation::SquareRoot).unwrap();
        assert_eq!(json, "\"square-root\"");
        let form: PresentationForm = serde_json::from_str("\"fill-blank\"").unwrap();
        assert_eq!(form, PresentationForm::FillBlank);
    }

    #[test]
    fn selector_resolves_labels() {
        assert_eq!(OperationSelector::from("match").resolve(), Some(Operation::Match));
        assert_eq!(OperationSelector::from("unknown-op").resolve(), None);
        assert_eq!(
            OperationSelector::from(BasicOp::Division).resolve(),
            Some(Operation::Division)
        );
    }
}
