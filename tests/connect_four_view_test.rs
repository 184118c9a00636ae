//! Tests for the terminal view.

use connect_four::{BoardConfig, ConnectFour, Flow, GameStatus, OutputFormat, Player};

fn view(side: usize, format: OutputFormat) -> ConnectFour<Vec<u8>> {
    ConnectFour::new(BoardConfig::new(side).expect("playable side"), format, Vec::new())
}

fn feed(view: &mut ConnectFour<Vec<u8>>, lines: &[&str]) {
    for line in lines {
        assert_eq!(view.handle_input(line).expect("writable"), Flow::Continue);
    }
}

const ROW_WIN: [&str; 7] = ["0,0", "1,0", "0,1", "1,1", "0,2", "1,2", "0,3"];

#[test]
fn test_win_is_announced() {
    let mut view = view(5, OutputFormat::Text);
    feed(&mut view, &ROW_WIN);

    assert_eq!(view.model().status(), GameStatus::Won(Player::X));
    let out = String::from_utf8(view.into_inner()).expect("utf-8");
    assert!(out.contains("0 X X X X ."), "{out}");
    assert!(out.contains("X won! ((0, 0) (0, 1) (0, 2) (0, 3))"), "{out}");
    assert!(out.ends_with("Type \"restart\" to play again.\n"), "{out}");
}

#[test]
fn test_moves_after_win_write_nothing() {
    let mut view = view(5, OutputFormat::Text);
    feed(&mut view, &ROW_WIN);
    let board = view.model().board().clone();
    let written = view.get_ref().len();

    feed(&mut view, &["4,4", "3 3", "0,0"]);

    assert_eq!(view.get_ref().len(), written);
    assert_eq!(view.model().board(), &board);
}

#[test]
fn test_json_mode_writes_one_snapshot_per_move() {
    let mut view = view(4, OutputFormat::Json);
    view.create_board().expect("writable");
    feed(&mut view, &["0,0", "0,0", "9,9", "1,1"]);

    let out = String::from_utf8(view.into_inner()).expect("utf-8");
    let snapshots: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).expect("one JSON object per line"))
        .collect();

    // initial board plus two accepted moves
    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[1]["player"], "X");
    assert_eq!(snapshots[2]["player"], "O");
    assert_eq!(snapshots[2]["active"], "X");
    assert_eq!(snapshots[2]["state"], "ongoing");
    assert_eq!(snapshots[2]["board"][1], serde_json::json!([" ", "O", " ", " "]));
}

#[test]
fn test_play_moves_skips_rejected_and_unreadable() {
    let mut view = view(5, OutputFormat::Text);
    let script = ["0,0", "0,0", "banana", "9,9", "1,0"];

    let accepted = view.play_moves(script).expect("writable");

    assert_eq!(accepted, 2);
    assert_eq!(view.model().history().len(), 2);
    assert_eq!(view.model().active_player(), Player::X);
}

#[test]
fn test_play_moves_after_win_accepts_nothing() {
    let mut view = view(5, OutputFormat::Text);
    assert_eq!(view.play_moves(ROW_WIN).expect("writable"), ROW_WIN.len());
    let written = view.get_ref().len();

    assert_eq!(view.play_moves(["4,4", "0,0"]).expect("writable"), 0);
    assert_eq!(view.get_ref().len(), written);
}

#[test]
fn test_draw_is_announced() {
    // Column-pair stripes on 4x4 never line up three equal marks
    let mut view = view(4, OutputFormat::Text);
    feed(
        &mut view,
        &[
            "0,0", "0,2", "0,1", "0,3",
            "1,2", "1,0", "1,3", "1,1",
            "2,0", "2,2", "2,1", "2,3",
            "3,2", "3,0", "3,3", "3,1",
        ],
    );

    assert_eq!(view.model().status(), GameStatus::Draw);
    let out = String::from_utf8(view.into_inner()).expect("utf-8");
    assert!(out.contains("Draw game!"), "{out}");
}

#[test]
fn test_restart_after_game_end() {
    let mut view = view(5, OutputFormat::Text);
    feed(&mut view, &ROW_WIN);
    feed(&mut view, &["restart", "2,2"]);

    assert_eq!(view.model().status(), GameStatus::Ongoing);
    assert_eq!(view.model().history().len(), 1);
    assert_eq!(view.model().active_player(), Player::O);
}
