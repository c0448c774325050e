//! Leaderboard persistence tests, wired the way the driver uses it:
//! a finished session's `RecordScore` request goes to `Leaderboard::record`.

use std::fs;
use std::time::{Duration, Instant};

use tempfile::TempDir;
use termtris::core::{GameSession, SequenceSource};
use termtris::scores::{Leaderboard, ScoreEntry};
use termtris::types::{CoreRequest, GameEvent, ShapeKind};

#[test]
fn test_game_over_score_is_recorded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leaderboard.json");
    let mut leaderboard = Leaderboard::load(&path);

    let now = Instant::now();
    let mut session = GameSession::new(Box::new(SequenceSource::repeat(ShapeKind::I)), now);
    session.step([GameEvent::Confirm], now);
    for x in 0..6 {
        session.board_mut().set(x, 19, true);
    }
    session.step([GameEvent::MoveRight; 3], now);
    session.step([GameEvent::HardDrop], now);

    // Lock clears row 19 (+100).
    let t = now + Duration::from_millis(501);
    session.step([], t);

    // Wall off row 1 so the next piece locks in the spawn row and the game ends.
    for x in 0..9 {
        session.board_mut().set(x, 1, true);
    }
    session.step([], t + Duration::from_millis(501));

    let mut recorded = Vec::new();
    for request in session.drain_requests() {
        if let CoreRequest::RecordScore(score) = request {
            recorded.push(leaderboard.record("ann", score).unwrap());
        }
    }
    assert_eq!(recorded, vec![Some(0)]);

    let on_disk: Vec<ScoreEntry> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, vec![ScoreEntry::new("ann", 100)]);
}

#[test]
fn test_ties_keep_insertion_order_across_reloads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leaderboard.json");

    let mut board = Leaderboard::load(&path);
    board.record("first", 400).unwrap();
    board.record("second", 400).unwrap();

    let mut board = Leaderboard::load(&path);
    board.record("third", 400).unwrap();

    let reloaded = Leaderboard::load(&path);
    let names: Vec<&str> = reloaded.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn test_unsorted_file_is_normalised() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leaderboard.json");
    fs::write(
        &path,
        r#"[{"name":"low","score":100},{"name":"high","score":900},{"name":"mid","score":400}]"#,
    )
    .unwrap();

    let board = Leaderboard::load(&path);
    let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![900, 400, 100]);
}

#[test]
fn test_wrong_shape_json_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leaderboard.json");
    fs::write(&path, r#"{"scores": []}"#).unwrap();

    let mut board = Leaderboard::load(&path);
    assert!(board.is_empty());

    // Recording replaces the bad file with a valid one.
    board.record("ann", 100).unwrap();
    assert_eq!(Leaderboard::load(&path).len(), 1);
}

#[test]
fn test_unwritable_path_reports_error() {
    let dir = TempDir::new().unwrap();
    // A directory where the file should be makes the write fail.
    let path = dir.path().join("taken");
    fs::create_dir(&path).unwrap();

    let mut board = Leaderboard::new(&path);
    assert!(board.record("ann", 100).is_err());
    // The in-memory list still has the entry.
    assert_eq!(board.len(), 1);
}
