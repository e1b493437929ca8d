//! File-backed whitelist.
//!
//! This module provides `FileWhitelist`, the production implementation of the
//! `WhitelistSource` trait that reads a text file from disk.

use std::{
    borrow::Cow,
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use rolodex_core::WhitelistSource;

/// Whitelist stored as a newline-delimited text file.
///
/// This implementation:
/// - Opens the file with `std::fs::File` on every call to `open`
/// - Never holds a handle between checks, so edits are seen immediately
/// - Reports the path as its diagnostic name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWhitelist {
    path: PathBuf,
}

impl FileWhitelist {
    /// Create a whitelist reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the whitelist file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WhitelistSource for FileWhitelist {
    type Reader = BufReader<File>;

    fn open(&self) -> io::Result<Self::Reader> {
        File::open(&self.path).map(BufReader::new)
    }

    fn name(&self) -> Cow<'_, str> {
        self.path.to_string_lossy()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, Write};

    use super::*;

    #[test]
    fn open_reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bob@example.com").unwrap();

        let whitelist = FileWhitelist::new(file.path());
        let lines: Vec<String> = whitelist.open().unwrap().lines().map(Result::unwrap).collect();

        assert_eq!(lines, ["bob@example.com"]);
    }

    #[test]
    fn open_missing_file_fails_with_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let whitelist = FileWhitelist::new(dir.path().join("whitelist.txt"));

        let err = whitelist.open().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn name_is_the_path() {
        let whitelist = FileWhitelist::new("conf/whitelist.txt");
        assert_eq!(whitelist.name(), "conf/whitelist.txt");
    }
}
