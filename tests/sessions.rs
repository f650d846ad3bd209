use std::fs;

use boredcalc::{Reply, Session};
use walkdir::WalkDir;

const EPSILON: f64 = 1e-9;

#[test]
fn session_transcripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut session = Session::new();
        for (i, (input, expected)) in parse_transcript(&content).into_iter().enumerate() {
            count += 1;
            let value = match session.run_line(&input) {
                Ok(Reply::Value(value) | Reply::Assigned { value, .. }) => value,
                Ok(other) => panic!("Line {} in {path:?} gave {other:?}", i + 1),
                Err(e) => panic!("Line {} in {path:?} failed:\n{input}\nError: {e}", i + 1),
            };
            if let Some(expected) = expected {
                assert!((value - expected).abs() <= EPSILON * expected.abs().max(1.0),
                        "Line {} in {path:?}: {input} gave {value}, expected {expected}",
                        i + 1);
            }
        }
    }

    assert!(count > 0, "No transcript lines found in tests/sessions");
}

/// Splits a transcript into inputs and optional expected values.
///
/// Blank lines and lines starting with `#` are skipped. A line of the form
/// `input => value` checks the result; a bare `input` only has to succeed.
fn parse_transcript(content: &str) -> Vec<(String, Option<f64>)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .map(|line| match line.rsplit_once("=>") {
               Some((input, expected)) => {
                   let expected = expected.trim()
                                          .parse()
                                          .unwrap_or_else(|_| panic!("Bad expected value in {line:?}"));
                   (input.trim().to_string(), Some(expected))
               },
               None => (line.to_string(), None),
           })
           .collect()
}
