//! Client handle.
//!
//! A `Client` is identified by a user label, borrows the caller's
//! [`Directory`] and owns the whitelist source it checks addresses against.
//! It holds no other state; every call goes straight to the directory or the
//! whitelist.

use rolodex_core::{Directory, Result, WhitelistSource, check_permitted};

use crate::{config::ClientConfig, file_whitelist::FileWhitelist};

/// Handle for lookups and permission checks on behalf of a user.
///
/// # Type Parameters
///
/// - `W`: whitelist source, file-backed unless a test supplies its own
#[derive(Debug, Clone)]
pub struct Client<'d, W = FileWhitelist> {
    /// Label identifying who issues the calls.
    user: String,

    /// Directory used for lookups.
    directory: &'d Directory,

    /// Whitelist consulted by permission checks.
    whitelist: W,
}

impl<'d> Client<'d, FileWhitelist> {
    /// Create a client using the default configuration.
    pub fn new(user: impl Into<String>, directory: &'d Directory) -> Self {
        Self::with_config(user, directory, &ClientConfig::default())
    }

    /// Create a client reading the whitelist file named in `config`.
    pub fn with_config(
        user: impl Into<String>,
        directory: &'d Directory,
        config: &ClientConfig,
    ) -> Self {
        Self::with_whitelist(user, directory, FileWhitelist::new(config.whitelist_path.clone()))
    }
}

impl<'d, W: WhitelistSource> Client<'d, W> {
    /// Create a client with an explicit whitelist source.
    pub fn with_whitelist(user: impl Into<String>, directory: &'d Directory, whitelist: W) -> Self {
        Self { user: user.into(), directory, whitelist }
    }

    /// The user label.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The whitelist source.
    pub fn whitelist(&self) -> &W {
        &self.whitelist
    }

    /// Name of the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has this id.
    pub fn get_name(&self, id: i64) -> Result<&'d str> {
        let directory: &'d Directory = self.directory;
        let record = directory.find_by_id(id)?;
        tracing::debug!("User {} looked up record {}", self.user, record.id());
        Ok(record.name())
    }

    /// Check that `address` is on the whitelist.
    ///
    /// Succeeds only when the address is listed. The whitelist is read again
    /// on every call.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` if the address is not listed or the whitelist
    /// cannot be read; in the latter case the I/O error is the cause.
    pub fn check_permitted(&self, address: &str) -> Result<()> {
        let result = check_permitted(&self.whitelist, address);
        tracing::debug!(
            "User {} permission check for {}: {}",
            self.user,
            address,
            if result.is_ok() { "permitted" } else { "forbidden" }
        );
        result
    }
}
