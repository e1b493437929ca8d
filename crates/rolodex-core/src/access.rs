//! Address permission checks.
//!
//! Both "cannot verify" (the whitelist could not be opened or read) and "not
//! whitelisted" are reported as [`ErrorKind::Forbidden`]. Only the first
//! carries a cause, so callers that care can tell them apart through
//! [`ClassifiedError::cause`].

use crate::{
    error::{ClassifiedError, ErrorKind, Result},
    whitelist::{WhitelistSource, contains_line},
};

/// Context value naming the layer an I/O failure came from.
const IO_PACKAGE: &str = "std::io";

/// Check that `address` appears as an exact line in `source`.
///
/// The source is opened fresh on every call, so edits take effect
/// immediately. Nothing is retried.
///
/// # Errors
///
/// Returns [`ErrorKind::Forbidden`] when the address is not listed, or when
/// the whitelist cannot be opened or read (with the I/O error as cause).
pub fn check_permitted<S: WhitelistSource>(source: &S, address: &str) -> Result<()> {
    let reader = source.open().map_err(|e| {
        tracing::warn!("Cannot open whitelist {}: {}", source.name(), e);
        ClassifiedError::translate(e, ErrorKind::Forbidden)
            .with_message(format!("failed to open {}", source.name()))
            .with_context("package", IO_PACKAGE)
    })?;

    let listed = contains_line(reader, address).map_err(|e| {
        tracing::warn!("Cannot read whitelist {}: {}", source.name(), e);
        ClassifiedError::translate(e, ErrorKind::Forbidden)
            .with_message(format!("failed to read {}", source.name()))
            .with_context("package", IO_PACKAGE)
    })?;

    if listed {
        return Ok(());
    }

    tracing::debug!("Address {} is not in whitelist {}", address, source.name());
    Err(ClassifiedError::new(ErrorKind::Forbidden)
        .with_message(format!("{address} is not whitelisted"))
        .with_context("whitelist", source.name()))
}
