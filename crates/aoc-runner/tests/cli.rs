//! End-to-end runs of the `aoc` binary over the solver fixtures.

use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture(crate_name: &str, file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(crate_name)
        .join("tests/data")
        .join(file)
}

fn aoc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aoc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn aoc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn signal_strength_line() {
    let input = fixture("cycle-machine", "larger_example.txt");
    let out = aoc(&["9", "0", input.to_str().expect("utf-8 path")]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Signal Strength: 13140\n");
}

#[test]
fn crt_image_rows() {
    let input = fixture("cycle-machine", "larger_example.txt");
    let out = aoc(&["9", "1", input.to_str().expect("utf-8 path")]);
    assert!(out.status.success());
    let text = stdout(&out);
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r.len() == 40));
    assert!(rows[0].starts_with("##..##..##..##..##..##..##..##..##..##."));
    assert!(rows[1].starts_with("###...###...###...###...###...###...###."));
}

#[test]
fn json_report() {
    let input = fixture("cycle-machine", "larger_example.txt");
    let out = aoc(&["9", "0", input.to_str().expect("utf-8 path"), "--json"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "{\"day\":9,\"part\":0,\"answer\":13140}\n");
}

#[test]
fn screenshot_written() {
    let input = fixture("cycle-machine", "larger_example.txt");
    let png = std::env::temp_dir().join(format!("aoc-cli-{}.png", std::process::id()));
    let out = aoc(&[
        "9",
        "1",
        input.to_str().expect("utf-8 path"),
        "--screenshot",
        png.to_str().expect("utf-8 path"),
        "--scale",
        "2",
    ]);
    assert!(out.status.success());
    let bytes = std::fs::read(&png).expect("png written");
    assert_eq!(&bytes[1..4], b"PNG");
    let _ = std::fs::remove_file(&png);
}

#[test]
fn calorie_line() {
    let input = fixture("calorie-count", "example.txt");
    let out = aoc(&["0", "0", input.to_str().expect("utf-8 path")]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "best elf: 4, max calories: 24000\n");
}

#[test]
fn missing_input_fails() {
    let out = aoc(&["9", "0", "/nonexistent/aoc/input.txt"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("cannot open input"), "stderr: {err}");
}

#[test]
fn unknown_puzzle_fails() {
    let input = fixture("calorie-count", "example.txt");
    let out = aoc(&["0", "1", input.to_str().expect("utf-8 path")]);
    assert!(!out.status.success());
}

#[test]
fn dump_state_goes_to_stderr() {
    let input = fixture("cycle-machine", "small_example.txt");
    let out = aoc(&["9", "0", input.to_str().expect("utf-8 path"), "--dump-state"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Signal Strength: 0\n");
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("x = -1"), "stderr: {err}");
    assert!(err.contains("cycle = 6"), "stderr: {err}");
}
