//! In-memory whitelist for tests.
//!
//! `MemoryWhitelist` is the test counterpart of the file-backed source. Clones
//! share the same contents, so a test can hand one clone to a client and keep
//! another to edit or remove the whitelist between checks.

use std::{
    borrow::Cow,
    io::{self, Cursor},
    sync::{Arc, Mutex, PoisonError},
};

use rolodex_core::WhitelistSource;

/// Shared, editable whitelist contents. `None` means the whitelist is absent.
#[derive(Debug, Clone, Default)]
pub struct MemoryWhitelist {
    content: Arc<Mutex<Option<Vec<u8>>>>,
}

impl MemoryWhitelist {
    /// Create a whitelist holding the given addresses, one per line.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let whitelist = Self::default();
        whitelist.set_lines(lines);
        whitelist
    }

    /// Create a whitelist that does not exist yet; opening it fails.
    pub fn missing() -> Self {
        Self::default()
    }

    /// Replace the contents with the given addresses, one per line.
    pub fn set_lines<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut content = Vec::new();
        for line in lines {
            content.extend_from_slice(line.as_ref().as_bytes());
            content.push(b'\n');
        }
        self.set_raw(content);
    }

    /// Replace the contents with raw bytes.
    pub fn set_raw(&self, content: impl Into<Vec<u8>>) {
        *self.content.lock().unwrap_or_else(PoisonError::into_inner) = Some(content.into());
    }

    /// Remove the whitelist; subsequent opens fail with `NotFound`.
    pub fn remove(&self) {
        *self.content.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Returns true if the whitelist currently exists.
    pub fn exists(&self) -> bool {
        self.content.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}

impl WhitelistSource for MemoryWhitelist {
    type Reader = Cursor<Vec<u8>>;

    fn open(&self) -> io::Result<Self::Reader> {
        self.content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .map(Cursor::new)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "whitelist removed"))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("memory")
    }
}
