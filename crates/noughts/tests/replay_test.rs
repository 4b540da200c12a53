//! Tests for headless replay output.

use noughts::{ReplayFormat, run_replay};

fn replay(moves: &[usize], format: ReplayFormat) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run_replay(moves, format, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_text_output_top_row_win() {
    let out = replay(&[0, 3, 1, 4, 2], ReplayFormat::Text).expect("replay");
    assert_eq!(out, "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nWinner: X\n");
}

#[test]
fn test_text_output_draw() {
    let out = replay(&[0, 2, 1, 3, 5, 4, 6, 7, 8], ReplayFormat::Text).expect("replay");
    assert!(out.ends_with("\n\nDraw\n"));
}

#[test]
fn test_ignored_moves_are_skipped() {
    // Second click on 4 is ignored, so O plays 0 next.
    let out = replay(&[4, 4, 0], ReplayFormat::Text).expect("replay");
    assert!(out.starts_with("O|2|3\n-+-+-\n4|X|6"));
    assert!(out.ends_with("Next player: X\n"));
}

#[test]
fn test_json_output() {
    let out = replay(&[4], ReplayFormat::Json).expect("replay");
    let json: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(json["board"][4], "X");
    assert_eq!(json["next_player"], "O");
    assert!(json["winner"].is_null());
    assert_eq!(json["status"], "Next player: O");
}

#[test]
fn test_out_of_range_fails() {
    let err = replay(&[0, 9], ReplayFormat::Text).expect_err("out of range");
    assert_eq!(err.to_string(), "Move 2 is invalid");
    assert!(format!("{:#}", err).contains("out of range"));
}
