//! Experience points, streaks and play history.
//!
//! XP doubles as the coin balance spent on skipping a question or revealing
//! its answer. The profile is a plain serde record; storing it locally or
//! remotely is the caller's business.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PracticeError, PracticeResult};
use crate::practice_engine::session::SessionSummary;

pub const XP_PER_CORRECT: u32 = 10;
/// Coins charged for a skip or a reveal.
pub const HINT_COST: u32 = 20;
pub const HISTORY_LIMIT: usize = 20;
/// Minimum score, in percent, that extends the streak.
pub const STREAK_THRESHOLD_PERCENT: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub operation: String,
    pub score: u32,
    pub total_questions: u32,
    pub time_taken_secs: u64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub xp: u32,
    pub streak: u32,
    /// Newest first.
    pub history: Vec<PlayRecord>,
}

impl Profile {
    /// Credit a finished session. Sessions that were stopped early earn
    /// nothing and leave no record.
    pub fn record_session(&mut self, summary: &SessionSummary, date: NaiveDate) -> Option<PlayRecord> {
        if !summary.completed {
            return None;
        }

        self.xp = self.xp.saturating_add(summary.score * XP_PER_CORRECT);
        if summary.total_questions > 0
            && summary.score * 100 >= summary.total_questions * STREAK_THRESHOLD_PERCENT
        {
            self.streak += 1;
        }

        let record = PlayRecord {
            operation: summary.operation_title.clone(),
            score: summary.score,
            total_questions: summary.total_questions,
            time_taken_secs: summary.time_taken_secs,
            date,
        };
        self.history.insert(0, record.clone());
        self.history.truncate(HISTORY_LIMIT);
        Some(record)
    }

    /// Take `cost` coins, or fail without touching the balance.
    pub fn spend(&mut self, cost: u32) -> PracticeResult<()> {
        if self.xp < cost {
            return Err(PracticeError::InsufficientCoins { cost, available: self.xp });
        }
        self.xp -= cost;
        Ok(())
    }

    pub fn from_json(json: &str) -> PracticeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> PracticeResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(score: u32, total: u32, completed: bool) -> SessionSummary {
        SessionSummary {
            operation_title: "Addition".to_string(),
            score,
            total_questions: total,
            time_taken_secs: 42,
            completed,
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn completed_session_earns_xp_and_streak() {
        let mut p = Profile::default();
        let rec = p.record_session(&summary(5, 10, true), day()).unwrap();
        assert_eq!(p.xp, 50);
        assert_eq!(p.streak, 1);
        assert_eq!(rec.operation, "Addition");
        assert_eq!(p.history.len(), 1);
    }

    #[test]
    fn weak_score_keeps_streak() {
        let mut p = Profile { streak: 3, ..Profile::default() };
        p.record_session(&summary(4, 10, true), day());
        assert_eq!(p.streak, 3);
        assert_eq!(p.xp, 40);
    }

    #[test]
    fn stopped_session_is_not_recorded() {
        let mut p = Profile::default();
        assert!(p.record_session(&summary(3, 3, false), day()).is_none());
        assert_eq!(p, Profile::default());
    }

    #[test]
    fn history_is_capped_newest_first() {
        let mut p = Profile::default();
        for score in 0..25 {
            p.record_session(&summary(score, 30, true), day());
        }
        assert_eq!(p.history.len(), HISTORY_LIMIT);
        assert_eq!(p.history[0].score, 24);
    }

    #[test]
    fn spending_needs_enough_coins() {
        let mut p = Profile { xp: 30, ..Profile::default() };
        p.spend(HINT_COST).unwrap();
        assert_eq!(p.xp, 10);
        let err = p.spend(HINT_COST).unwrap_err();
        assert!(matches!(err, PracticeError::InsufficientCoins { cost: 20, available: 10 }));
        assert_eq!(p.xp, 10);
    }

    #[test]
    fn profile_json_round_trip() {
        let mut p = Profile::default();
        p.record_session(&summary(7, 10, true), day());
        let back = Profile::from_json(&p.to_json().unwrap()).unwrap();
        assert_eq!(back, p);
        assert_eq!(Profile::from_json("{}").unwrap(), Profile::default());
    }
}
