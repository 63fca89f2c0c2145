// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console transcript specs
//!
//! Verify the line-oriented console: JSON in, timestamped `>>` / `<<`
//! lines out, parse errors flagged with `!!` without ending the run.

use similar_asserts::assert_eq;

use crate::prelude::*;

/// Run `tether console` to completion and return stdout lines with their
/// timestamps stripped.
fn transcript(input: &str) -> Vec<String> {
    let output = cli().arg("console").write_stdin(input).output().unwrap();
    assert!(output.status.success(), "console exited with {:?}", output.status);
    stripped(&output.stdout)
}

fn stripped(stdout: &[u8]) -> Vec<String> {
    String::from_utf8(stdout.to_vec())
        .unwrap()
        .lines()
        .map(|line| {
            let (stamp, rest) = line.split_once(' ').unwrap();
            assert!(stamp.ends_with('Z'), "expected a timestamp, got {line:?}");
            rest.to_string()
        })
        .collect()
}

#[test]
fn an_echo_exchange_reads_as_a_dialogue() {
    let lines = transcript("[\"echo\", 5]\n");
    assert_eq!(
        lines,
        vec![
            r#"<< ["tether",1]"#.to_string(),
            r#">> ["echo",5]"#.to_string(),
            r#"<< [true,5]"#.to_string(),
        ]
    );
}

#[test]
fn parse_errors_flag_the_line_and_continue() {
    let lines = transcript("not json\n[\"echo\", 1]\n");
    assert!(lines[1].starts_with("!! "), "expected a parse error line, got {:?}", lines[1]);
    assert_eq!(lines[2], r#">> ["echo",1]"#);
    assert_eq!(lines[3], r#"<< [true,1]"#);
}

#[test]
fn numbers_without_an_integer_reading_are_rejected() {
    let lines = transcript("[1.5]\n");
    assert_eq!(lines[1], "!! number 1.5 has no integer representation");
}

#[test]
fn blank_lines_are_skipped() {
    let lines = transcript("\n   \n[\"version\"]\n");
    assert_eq!(lines[1], r#">> ["version"]"#);
}

#[test]
fn caught_failures_answer_inline() {
    let lines = transcript("[\"sleep\"]\n");
    assert_eq!(lines[2], r#"<< [false,"sleep: insufficient number of arguments"]"#);
}

#[test]
fn warnings_print_before_their_reply() {
    let input = [
        serde_json::json!(["new", "queue", { "high_water": 1 }]).to_string(),
        serde_json::json!(["call", 0, "push", "a"]).to_string(),
        serde_json::json!(["call", 0, "push", "b"]).to_string(),
        String::new(),
    ]
    .join("\n");
    let lines = transcript(&input);
    assert_eq!(
        lines,
        vec![
            r#"<< ["tether",1]"#.to_string(),
            r#">> ["new","queue",{"high_water":1}]"#.to_string(),
            r#"<< [true,0]"#.to_string(),
            r#">> ["call",0,"push","a"]"#.to_string(),
            r#"<< [true,1]"#.to_string(),
            r#">> ["call",0,"push","b"]"#.to_string(),
            r#"<< [false,"warning: queue depth 2 exceeds high water mark 1","queue",0]"#
                .to_string(),
            r#"<< [true,2]"#.to_string(),
        ]
    );
}

#[test]
fn exit_ends_the_transcript_early() {
    let lines = transcript("[\"exit\"]\n[\"echo\", 1]\n");
    assert_eq!(lines.last().map(String::as_str), Some(r#">> ["exit"]"#));
}

#[test]
fn a_group_walk_failure_exits_2() {
    let output =
        cli().arg("console").env("TETHER_LOG", "off").write_stdin("[\"new\"]\n").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8(output.stderr.to_vec()).unwrap(),
        "invalid input: new: insufficient number of arguments\n"
    );
}
