//! A single practice run: a pre-generated batch of questions answered in
//! order, with pause/stop, coin-paid skips and reveals, and regeneration when
//! the learner changes the table range or the match operations mid-run.

use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{PracticeError, PracticeResult};
use crate::practice_engine::{
    answer::{is_correct_choice, is_correct_pairing},
    config::{GeneratorConfig, PracticePreset, PracticeSettings},
    generator::generate_with,
    models::{BasicOp, Difficulty, MatchPair, Operation, PresentationForm, Question, TableRange},
    progress::{Profile, HINT_COST},
};

/// Upper bound on the batch size in task mode.
pub const TASK_QUESTION_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeMode {
    /// Exactly the configured number of questions.
    Test,
    /// The configured number, capped at ten.
    #[default]
    Task,
}

impl PracticeMode {
    pub fn question_count(self, requested: usize) -> usize {
        match self {
            PracticeMode::Test => requested,
            PracticeMode::Task => requested.min(TASK_QUESTION_LIMIT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A tapped option or a typed answer.
    Choice(String),
    /// Links made on a match question.
    Pairing(Vec<MatchPair>),
    /// The per-question timer ran out; always wrong.
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
    /// True when this was the last question.
    pub finished: bool,
}

/// Aggregate result handed to the progress tracker and persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub operation_title: String,
    pub score: u32,
    pub total_questions: u32,
    pub time_taken_secs: u64,
    /// False when the session was stopped before the last question.
    pub completed: bool,
}

#[derive(Debug)]
pub struct PracticeSession {
    operation: Operation,
    difficulty: Difficulty,
    mode: PracticeMode,
    config: GeneratorConfig,
    time_limit: Option<u32>,
    questions: Vec<Question>,
    results: Vec<bool>,
    paused: bool,
    stopped: bool,
    started_at: DateTime<Utc>,
    rng: StdRng,
}

impl PracticeSession {
    /// Generate the whole batch up front using the difficulty's preset
    /// table range and match operations.
    pub fn start(
        operation: Operation,
        difficulty: Difficulty,
        mode: PracticeMode,
        settings: &PracticeSettings,
        rng_seed: Option<u64>,
    ) -> PracticeResult<Self> {
        let count = mode.question_count(settings.question_count);
        if count == 0 {
            return Err(PracticeError::EmptySession);
        }

        let mut rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let config = PracticePreset::for_difficulty(difficulty).into_config();
        let questions: Vec<Question> = (0..count)
            .map(|_| generate_with(&mut rng, operation, difficulty, &config))
            .collect();

        debug!("started {} session: {} questions, {:?} mode", operation.label(), count, mode);

        Ok(PracticeSession {
            operation,
            difficulty,
            mode,
            config,
            time_limit: settings.time_limit(),
            questions,
            results: Vec::with_capacity(count),
            paused: false,
            stopped: false,
            started_at: Utc::now(),
            rng,
        })
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn mode(&self) -> PracticeMode {
        self.mode
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Seconds allowed per question, if the timer is on.
    pub fn time_limit(&self) -> Option<u32> {
        self.time_limit
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Per-question outcomes so far, in order.
    pub fn results(&self) -> &[bool] {
        &self.results
    }

    pub fn current_index(&self) -> usize {
        self.results.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.stopped {
            return None;
        }
        self.questions.get(self.current_index())
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_finished(&self) -> bool {
        self.stopped || self.results.len() >= self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.results.iter().filter(|&&ok| ok).count() as u32
    }

    fn ensure_open(&self) -> PracticeResult<()> {
        if self.is_finished() {
            return Err(PracticeError::SessionFinished);
        }
        if self.paused {
            return Err(PracticeError::SessionPaused);
        }
        Ok(())
    }

    fn record(&mut self, correct: bool) -> AnswerOutcome {
        let correct_answer = self.questions[self.current_index()].correct_answer.clone();
        self.results.push(correct);
        let finished = self.is_finished();
        if finished {
            info!(
                "{} session complete: {}/{}",
                self.operation.label(),
                self.score(),
                self.questions.len()
            );
        }
        AnswerOutcome { correct, correct_answer, finished }
    }

    /// Grade the current question and move to the next one.
    pub fn answer(&mut self, response: Response) -> PracticeResult<AnswerOutcome> {
        self.ensure_open()?;
        let question = &self.questions[self.current_index()];
        let correct = match (&response, question.form) {
            (Response::TimedOut, _) => false,
            (Response::Pairing(links), PresentationForm::Match) => is_correct_pairing(question, links),
            (Response::Choice(given), form) if form != PresentationForm::Match => {
                is_correct_choice(question, given)
            }
            (_, expected) => return Err(PracticeError::ResponseMismatch { expected }),
        };
        Ok(self.record(correct))
    }

    /// Pay coins to skip the current question, which counts as wrong.
    pub fn skip(&mut self, profile: &mut Profile) -> PracticeResult<AnswerOutcome> {
        self.ensure_open()?;
        profile.spend(HINT_COST)?;
        Ok(self.record(false))
    }

    /// Pay coins to see the current question's answer.
    pub fn reveal(&self, profile: &mut Profile) -> PracticeResult<String> {
        self.ensure_open()?;
        profile.spend(HINT_COST)?;
        Ok(self.questions[self.current_index()].correct_answer.clone())
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// End the run early. The summary will report it as not completed.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Switch table range and regenerate every unanswered question.
    pub fn set_table_range(&mut self, range: TableRange) {
        self.config.table_range = Some(range);
        let from = self.current_index();
        for slot in self.questions.iter_mut().skip(from) {
            *slot = generate_with(&mut self.rng, self.operation, self.difficulty, &self.config);
        }
        debug!("regenerated {} questions for tables {}-{}", self.questions.len() - from, range.min, range.max);
    }

    /// Swap the current match question for one drawn from `operations`.
    pub fn regenerate_match(&mut self, operations: Vec<BasicOp>) -> PracticeResult<&Question> {
        self.ensure_open()?;
        let index = self.current_index();
        if self.questions[index].form != PresentationForm::Match {
            return Err(PracticeError::NotAMatchQuestion);
        }
        self.config.match_operations = operations;
        self.questions[index] = generate_with(&mut self.rng, Operation::Match, self.difficulty, &self.config);
        Ok(&self.questions[index])
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary_at(Utc::now())
    }

    pub fn summary_at(&self, now: DateTime<Utc>) -> SessionSummary {
        let elapsed = (now - self.started_at).num_seconds().max(0) as u64;
        SessionSummary {
            operation_title: self.operation.to_string(),
            score: self.score(),
            total_questions: self.questions.len() as u32,
            time_taken_secs: elapsed,
            completed: !self.stopped && self.results.len() >= self.questions.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice_engine::progress::XP_PER_CORRECT;
    use chrono::Duration;

    fn settings(count: usize) -> PracticeSettings {
        PracticeSettings { question_count: count, ..PracticeSettings::default() }
    }

    fn session(op: Operation, mode: PracticeMode, count: usize) -> PracticeSession {
        PracticeSession::start(op, Difficulty::Simple, mode, &settings(count), Some(7)).unwrap()
    }

    #[test]
    fn mode_decides_batch_size() {
        assert_eq!(session(Operation::Addition, PracticeMode::Test, 25).questions().len(), 25);
        assert_eq!(session(Operation::Addition, PracticeMode::Task, 25).questions().len(), 10);
        assert_eq!(session(Operation::Addition, PracticeMode::Task, 4).questions().len(), 4);
        let empty = PracticeSession::start(
            Operation::Addition, Difficulty::Simple, PracticeMode::Test, &settings(0), None,
        );
        assert!(matches!(empty, Err(PracticeError::EmptySession)));
    }

    #[test]
    fn answering_walks_through_the_batch() {
        let mut s = session(Operation::Subtraction, PracticeMode::Task, 3);
        let right = s.current_question().unwrap().correct_answer.clone();
        let first = s.answer(Response::Choice(right)).unwrap();
        assert!(first.correct && !first.finished);
        let second = s.answer(Response::Choice("-999".into())).unwrap();
        assert!(!second.correct);
        let last = s.answer(Response::TimedOut).unwrap();
        assert!(last.finished);
        assert_eq!(s.results(), &[true, false, false]);
        assert!(matches!(s.answer(Response::TimedOut), Err(PracticeError::SessionFinished)));

        let summary = s.summary_at(Utc::now() + Duration::seconds(90));
        assert_eq!(summary.score, 1);
        assert_eq!(summary.total_questions, 3);
        assert_eq!(summary.operation_title, "Subtraction");
        assert!(summary.completed);
        assert!(summary.time_taken_secs >= 89);
    }

    #[test]
    fn paused_session_rejects_answers() {
        let mut s = session(Operation::Addition, PracticeMode::Task, 2);
        s.pause();
        assert!(matches!(s.answer(Response::TimedOut), Err(PracticeError::SessionPaused)));
        s.resume();
        assert!(s.answer(Response::TimedOut).is_ok());
    }

    #[test]
    fn response_must_fit_the_form() {
        let mut s = session(Operation::Match, PracticeMode::Task, 2);
        let err = s.answer(Response::Choice("4".into())).unwrap_err();
        assert!(matches!(err, PracticeError::ResponseMismatch { expected: PresentationForm::Match }));

        let links = s.current_question().unwrap().pairs.clone();
        assert!(s.answer(Response::Pairing(links)).unwrap().correct);

        let mut add = session(Operation::Addition, PracticeMode::Task, 1);
        assert!(add.answer(Response::Pairing(vec![])).is_err());
    }

    #[test]
    fn skip_and_reveal_cost_coins() {
        let mut s = session(Operation::Multiplication, PracticeMode::Task, 3);
        let mut profile = Profile { xp: 45, ..Profile::default() };

        let shown = s.reveal(&mut profile).unwrap();
        assert_eq!(shown, s.current_question().unwrap().correct_answer);
        assert_eq!(profile.xp, 25);

        let skipped = s.skip(&mut profile).unwrap();
        assert!(!skipped.correct);
        assert_eq!(profile.xp, 5);
        assert_eq!(s.current_index(), 1);

        assert!(matches!(
            s.skip(&mut profile),
            Err(PracticeError::InsufficientCoins { cost: HINT_COST, available: 5 })
        ));
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn stopped_session_is_incomplete() {
        let mut s = session(Operation::Addition, PracticeMode::Task, 5);
        let right = s.current_question().unwrap().correct_answer.clone();
        s.answer(Response::Choice(right)).unwrap();
        s.stop();
        assert!(s.is_finished());
        assert!(s.current_question().is_none());

        let summary = s.summary();
        assert!(!summary.completed);
        let mut profile = Profile::default();
        assert!(profile.record_session(&summary, Utc::now().date_naive()).is_none());
    }

    #[test]
    fn completed_session_feeds_profile() {
        let mut s = session(Operation::Division, PracticeMode::Task, 4);
        while let Some(q) = s.current_question() {
            let right = q.correct_answer.clone();
            s.answer(Response::Choice(right)).unwrap();
        }
        let mut profile = Profile::default();
        let rec = profile.record_session(&s.summary(), Utc::now().date_naive()).unwrap();
        assert_eq!(rec.score, 4);
        assert_eq!(profile.xp, 4 * XP_PER_CORRECT);
        assert_eq!(profile.streak, 1);
    }

    #[test]
    fn table_range_change_keeps_answered_questions() {
        let mut s = session(Operation::Multiplication, PracticeMode::Task, 6);
        s.answer(Response::TimedOut).unwrap();
        s.answer(Response::TimedOut).unwrap();
        let answered: Vec<Question> = s.questions()[..2].to_vec();

        s.set_table_range(TableRange { min: 17, max: 19 });
        assert_eq!(&s.questions()[..2], answered.as_slice());
        for q in &s.questions()[2..] {
            let factor: i64 = q.prompt.split(" × ").next().unwrap().parse().unwrap();
            assert!((17..=19).contains(&factor), "{}", q.prompt);
        }
    }

    #[test]
    fn regenerate_match_uses_new_operations() {
        let mut s = session(Operation::Match, PracticeMode::Task, 2);
        let q = s.regenerate_match(vec![BasicOp::Multiplication]).unwrap();
        assert!(q.pairs.iter().all(|p| p.left.contains('×')));
        assert_eq!(s.config().match_operations, vec![BasicOp::Multiplication]);

        let mut add = session(Operation::Addition, PracticeMode::Task, 2);
        assert!(matches!(
            add.regenerate_match(vec![BasicOp::Addition]),
            Err(PracticeError::NotAMatchQuestion)
        ));
    }

    #[test]
    fn preset_applies_to_session() {
        let s = PracticeSession::start(
            Operation::Match, Difficulty::Hard, PracticeMode::Task, &settings(1), Some(1),
        )
        .unwrap();
        assert_eq!(s.config().table_range, Some(TableRange { min: 2, max: 50 }));
        assert_eq!(s.config().match_operations, BasicOp::ALL.to_vec());
        assert_eq!(s.time_limit(), Some(30));
    }
}
