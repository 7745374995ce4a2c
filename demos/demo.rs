//! Tour of every operation plus one short practice session.
//!
//! Run with: `RUST_LOG=debug cargo run --example demo`
//!
//! 1. **All operations**: one question per operation with fixed seeds, so the
//!    output is reproducible.
//! 2. **A session**: a five-question task run, answered with a mix of right
//!    and wrong responses, then credited to a profile.

use arith_drill_gen::{
    generate_question, practice_engine::tables::multiplication_table, to_client_json, Difficulty,
    Operation, PracticeMode, PracticeSession, PracticeSettings, Profile, Question,
    QuestionRequest, Response,
};

fn print_question(q: &Question) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{} / {}]  ID: {}  Form: {}", q.operation, q.difficulty, q.id, q.form);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Q: {}", q.prompt);
    for opt in &q.options {
        let marker = if *opt == q.correct_answer { "✓" } else { " " };
        println!("    [{marker}] {opt}");
    }
    for pair in &q.pairs {
        println!("    {:<10} ⟶  {}", pair.left, pair.right);
    }
    println!();
}

fn main() {
    env_logger::init();

    for (i, op) in Operation::ALL.into_iter().enumerate() {
        let q = generate_question(
            QuestionRequest::new(op)
                .difficulty(Difficulty::Medium)
                .seed(100 + i as u64),
        );
        print_question(&q);
    }

    let fallback = generate_question(QuestionRequest::new("long-division").seed(1));
    println!("Unknown label falls back to: {}", to_client_json(&fallback));
    println!();

    if let Ok(rows) = multiplication_table(13) {
        let lines: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
        println!("Table of 13: {}", lines.join(", "));
        println!();
    }

    let settings = PracticeSettings { question_count: 5, ..PracticeSettings::default() };
    let mut session = match PracticeSession::start(
        Operation::Mixed, Difficulty::Simple, PracticeMode::Task, &settings, Some(7),
    ) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("could not start session: {e}");
            return;
        }
    };

    let mut turn = 0;
    while let Some(q) = session.current_question() {
        let response = if turn % 2 == 0 {
            Response::Choice(q.correct_answer.clone())
        } else {
            Response::TimedOut
        };
        let prompt = q.prompt.clone();
        match session.answer(response) {
            Ok(outcome) => println!(
                "  {prompt:<16} {}  (answer {})",
                if outcome.correct { "right" } else { "wrong" },
                outcome.correct_answer
            ),
            Err(e) => eprintln!("  {prompt}: {e}"),
        }
        turn += 1;
    }

    let summary = session.summary();
    let mut profile = Profile::default();
    if let Some(record) = profile.record_session(&summary, chrono::Utc::now().date_naive()) {
        println!();
        println!(
            "{}: {}/{} in {}s  →  XP {}  streak {}",
            record.operation, record.score, record.total_questions, record.time_taken_secs,
            profile.xp, profile.streak
        );
    }
}
