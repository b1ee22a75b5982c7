//! End-to-end round: draw, answer, score, submit, reload

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tide_quiz::consts::QUESTION_TIME;
use tide_quiz::persistence::{FileStore, RecordLayout};
use tide_quiz::{
    Difficulty, Leaderboard, Question, QuestionBank, QuizSelector, ScoringEngine, UpdatePolicy,
};

fn five_question_bank() -> QuestionBank {
    QuestionBank::from_questions(vec![
        Question::new("e0", ["a", "b", "c", "d"], 0, Difficulty::Easy, 10),
        Question::new("e1", ["a", "b", "c", "d"], 1, Difficulty::Easy, 10),
        Question::new("m2", ["a", "b", "c", "d"], 2, Difficulty::Medium, 25),
        Question::new("m3", ["a", "b", "c", "d"], 3, Difficulty::Medium, 25),
        Question::new("h4", ["a", "b", "c", "d"], 0, Difficulty::Hard, 50),
    ])
}

fn scratch_path(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tide-quiz-it-{}-{tag}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir.join("leaderboard.dat")
}

#[test]
fn test_perfect_instant_round_tops_fresh_board() {
    let mut bank = five_question_bank();
    let mut selector = QuizSelector::new(31337);

    let draw = selector.select_and_shuffle(&mut bank, 2, 2, 1);
    assert_eq!(draw.len(), 5);
    let unique: HashSet<_> = draw.order.iter().copied().collect();
    assert_eq!(unique, (0..5).collect::<HashSet<_>>());

    let mut scoring = ScoringEngine::new(QUESTION_TIME);
    scoring.reset_score();
    let mut base_total = 0;
    for &index in &draw.order {
        let q = bank.get_question(index);
        base_total += q.base_points;
        let points = scoring.calculate_points(&q, QUESTION_TIME);
        scoring.add_to_score(points);
    }
    assert_eq!(scoring.get_score(), 2 * base_total);

    let path = scratch_path("perfect");
    let mut board = Leaderboard::open(FileStore::new(&path), 6, 3, UpdatePolicy::DisplaceByRank);
    assert!(board.get_entries().iter().all(|e| e.score == 0));

    assert_eq!(board.submit_score("ABC", scoring.get_score()), Some(1));
    assert_eq!(board.get_entries()[0].name, "ABC");
    assert_eq!(board.get_entries()[0].score, 240);
    assert_eq!(board.get_entries().len(), 6);

    // Simulated restart
    let reloaded = Leaderboard::open(FileStore::new(&path), 6, 3, UpdatePolicy::DisplaceByRank);
    assert_eq!(reloaded.get_entries(), board.get_entries());

    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_reads_existing_save_file() {
    let path = scratch_path("existing");
    fs::create_dir_all(path.parent().unwrap()).unwrap();

    let mut bytes = Vec::new();
    for (name, score) in [(b"LIA", 980i32), (b"RAY", 640), (b"AAA", 0), (b"AAA", 0), (b"AAA", 0), (b"AAA", 0)] {
        bytes.extend_from_slice(name);
        bytes.push(0);
        bytes.extend_from_slice(&score.to_le_bytes());
    }
    assert_eq!(bytes.len(), RecordLayout::new(3).table_size(6));
    fs::write(&path, &bytes).unwrap();

    let mut board = Leaderboard::open(FileStore::new(&path), 6, 3, UpdatePolicy::DisplaceByRank);
    assert_eq!(board.top_score(), 980);
    assert_eq!(board.submit_score("KAI", 700), Some(2));

    // Saved in the same flat layout
    let saved = fs::read(&path).unwrap();
    assert_eq!(saved.len(), 48);
    assert_eq!(&saved[8..12], b"KAI\0");

    let _ = fs::remove_dir_all(path.parent().unwrap());
}
