//! Whitelist source abstraction and line scanner.
//!
//! The `WhitelistSource` trait decouples the access check from where the
//! whitelist lives. The client crate reads a file; the harness keeps the
//! contents in memory so tests can edit or remove them between calls.
//!
//! # Invariants
//!
//! - Freshness: every permission check calls [`WhitelistSource::open`] again.
//!   Implementations must not cache contents across calls.
//! - Scoping: the returned reader is owned by the check and dropped before it
//!   returns, on success and error paths alike.

use std::{borrow::Cow, io::BufRead};

/// A line-delimited whitelist of permitted addresses.
pub trait WhitelistSource {
    /// Reader over the whitelist contents.
    type Reader: BufRead;

    /// Open the whitelist for a single scan.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the whitelist is missing or
    /// unreadable.
    fn open(&self) -> std::io::Result<Self::Reader>;

    /// Name used in diagnostics (for files, the path).
    fn name(&self) -> Cow<'_, str>;
}

/// Returns true if some line of `reader` equals `candidate` exactly.
///
/// Lines are split on `\n` and lose at most one trailing `\r`. Nothing else is
/// trimmed and comparison is byte-wise, so case and surrounding whitespace
/// matter. A final newline does not produce an extra empty line. Stops at the
/// first match.
///
/// # Errors
///
/// Propagates read errors from `reader`.
pub fn contains_line<R: BufRead>(mut reader: R, candidate: &str) -> std::io::Result<bool> {
    let candidate = candidate.as_bytes();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(false);
        }

        if line.last() == Some(&b'\n') {
            line.pop();
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        if line == candidate {
            return Ok(true);
        }
    }
}
