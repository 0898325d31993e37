//! End-to-end tests: feed a script through the reader thread and inspect the output.

use rookery_play::{Session, SessionConfig};

fn run_bytes(script: &'static [u8]) -> String {
    let config = SessionConfig {
        board: false,
        ..SessionConfig::default()
    };
    let out = Session::with_config(Vec::new(), config).run(script).unwrap();
    String::from_utf8(out).unwrap()
}

fn run_script(script: &'static str) -> String {
    run_bytes(script.as_bytes())
}

#[test]
fn plays_until_quit() {
    let out = run_script("select e2\nselect e3\nselect g8\nselect f6\nquit\nselect e3\n");
    assert!(out.contains("moved e2e3"));
    assert!(out.contains("moved g8f6"));
    // Nothing after quit is processed.
    assert_eq!(out.matches("moved").count(), 2);
    assert!(out.lines().last().unwrap().starts_with("select origin for light:"));
}

#[test]
fn rejected_commands_are_reported_and_ignored() {
    let out = run_script("select e9\nselect a1\nbogus\nselect e2\nselect e4\nselect e3\n");
    assert!(out.contains("error: invalid square: e9"));
    assert!(out.contains("error: a1 is not selectable right now"));
    assert!(out.contains("error: e4 is not selectable right now"));
    assert!(out.contains("moved e2e3"));
}

#[test]
fn end_of_input_closes_session() {
    let out = run_script("");
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("select origin for light:"));
}

#[test]
fn loaded_record_navigation() {
    let out = run_script("load 12-20 51-43\nback\nback\nback\nend\n");
    assert!(out.contains("loaded record, viewing move 2 of 2"));
    assert!(out.contains("back over d7d6, viewing move 1 of 2"));
    assert!(out.contains("back over e2e3, viewing move 0 of 2"));
    assert!(out.contains("error: already viewing the initial position"));
    assert!(out.contains("advanced 2 moves, viewing move 2 of 2"));
}

#[test]
fn undecodable_line_is_rejected_and_play_continues() {
    let out = run_bytes(b"select e2\n\xff\xfe\nselect e3\nquit\nselect g8\n");
    assert!(out.contains("error: input line is not valid UTF-8"));
    assert!(out.contains("moved e2e3"));
    assert!(!out.contains("select destination for dark"));
    assert!(out.lines().last().unwrap().starts_with("select origin for dark:"));
}

#[test]
fn load_then_resume_continues_the_game() {
    let out = run_script("select e2\nselect e3\nload 51-43\nselect g8\nresume\nselect g8\nselect f6\n");
    assert!(out.contains("game in progress suspended after 1 moves, resume to continue"));
    assert!(out.contains("error: archived game is read-only"));
    assert!(out.contains("resumed game, dark to move"));
    assert!(out.contains("moved g8f6"));
}
