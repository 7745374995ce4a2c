//! Explicit configuration for the generator and for practice sessions.
//!
//! Every default the generator relies on lives here and is passed in by the
//! caller; nothing is kept in process-wide state.

use serde::{Deserialize, Serialize};

use crate::error::PracticeResult;
use crate::practice_engine::models::{BasicOp, Difficulty, Operation, TableRange};

/// Table range used by multiplication and division when none is configured.
pub const DEFAULT_PRODUCT_TABLES: TableRange = TableRange { min: 2, max: 10 };
/// Table range used by the tables drill when none is configured.
pub const DEFAULT_DRILL_TABLES: TableRange = TableRange { min: 2, max: 30 };
/// Match operations used when the configured set is empty.
pub const DEFAULT_MATCH_OPERATIONS: [BasicOp; 2] = [BasicOp::Addition, BasicOp::Subtraction];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// `None` picks a per-operation default (2–10, or 2–30 for tables).
    pub table_range: Option<TableRange>,
    pub match_operations: Vec<BasicOp>,
    /// Redraw distractors that collide with the answer or each other.
    pub distinct_options: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            table_range: None,
            match_operations: DEFAULT_MATCH_OPERATIONS.to_vec(),
            distinct_options: false,
        }
    }
}

impl GeneratorConfig {
    /// Table range for `operation`, normalised.
    pub fn tables_for(&self, operation: Operation) -> TableRange {
        let fallback = match operation {
            Operation::Tables => DEFAULT_DRILL_TABLES,
            _ => DEFAULT_PRODUCT_TABLES,
        };
        let range = self.table_range.unwrap_or(fallback);
        TableRange::new(range.min, range.max)
    }

    /// Configured match operations, or the default pair when empty.
    pub fn match_pool(&self) -> &[BasicOp] {
        if self.match_operations.is_empty() {
            &DEFAULT_MATCH_OPERATIONS
        } else {
            &self.match_operations
        }
    }
}

/// User-facing knobs from the settings screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeSettings {
    pub timer_enabled: bool,
    pub time_limit_secs: u32,
    pub question_count: usize,
}

impl Default for PracticeSettings {
    fn default() -> Self {
        PracticeSettings {
            timer_enabled: true,
            time_limit_secs: 30,
            question_count: 10,
        }
    }
}

impl PracticeSettings {
    pub fn from_json(json: &str) -> PracticeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> PracticeResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Per-question time limit, if the timer is on.
    pub fn time_limit(&self) -> Option<u32> {
        self.timer_enabled.then_some(self.time_limit_secs)
    }
}

/// Generator defaults a session starts from for a given difficulty.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticePreset {
    pub table_range: TableRange,
    pub match_operations: Vec<BasicOp>,
}

impl PracticePreset {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        use BasicOp::*;
        match difficulty {
            Difficulty::Simple => PracticePreset {
                table_range: TableRange { min: 2, max: 10 },
                match_operations: vec![Addition, Subtraction],
            },
            Difficulty::Medium => PracticePreset {
                table_range: TableRange { min: 2, max: 20 },
                match_operations: vec![Addition, Subtraction, Multiplication],
            },
            Difficulty::Hard => PracticePreset {
                table_range: TableRange { min: 2, max: 50 },
                match_operations: BasicOp::ALL.to_vec(),
            },
        }
    }

    pub fn into_config(self) -> GeneratorConfig {
        GeneratorConfig {
            table_range: Some(self.table_range),
            match_operations: self.match_operations,
            distinct_options: false,
        }
    }
}
