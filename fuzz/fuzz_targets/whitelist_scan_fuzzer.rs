//! Fuzz target for the whitelist line scanner
//!
//! # Strategy
//!
//! - Arbitrary bytes as whitelist contents, including invalid UTF-8, bare
//!   `\r`, `\r\n` and missing final newlines
//! - Candidates drawn either at random or from a line of the contents, so
//!   matches are common
//! - Chunked reader: contents delivered through a tiny `BufReader` capacity to
//!   exercise lines spanning buffer refills
//!
//! # Invariants
//!
//! - NEVER panic on any input
//! - `contains_line` agrees with a split-based reference
//! - Result does not depend on the reader's buffer size

#![no_main]

use std::io::{BufReader, Cursor};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rolodex_core::contains_line;

#[derive(Debug, Arbitrary)]
struct ScanInput {
    content: Vec<u8>,
    candidate: String,
    /// Pick the candidate from the content's lines instead.
    pick_line: Option<u8>,
    buffer_size: u8,
}

/// Reference: split on `\n`, drop the empty tail after a final newline, strip
/// one trailing `\r` per line.
fn reference_lines(content: &[u8]) -> Vec<&[u8]> {
    let mut lines: Vec<&[u8]> = content.split(|b| *b == b'\n').collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.into_iter().map(|l| l.strip_suffix(b"\r").unwrap_or(l)).collect()
}

fuzz_target!(|input: ScanInput| {
    let lines = reference_lines(&input.content);

    let candidate = match input.pick_line {
        Some(i) if !lines.is_empty() => {
            match std::str::from_utf8(lines[usize::from(i) % lines.len()]) {
                Ok(line) => line.to_owned(),
                Err(_) => input.candidate.clone(),
            }
        },
        _ => input.candidate.clone(),
    };

    let expected = lines.iter().any(|l| *l == candidate.as_bytes());

    let found = contains_line(Cursor::new(&input.content), &candidate)
        .expect("in-memory reads cannot fail");
    assert_eq!(found, expected, "scan disagrees with reference for {candidate:?}");

    let capacity = usize::from(input.buffer_size).max(1);
    let chunked = BufReader::with_capacity(capacity, Cursor::new(&input.content));
    let found_chunked = contains_line(chunked, &candidate).expect("in-memory reads cannot fail");
    assert_eq!(found_chunked, found, "buffer size {capacity} changed the result");
});
