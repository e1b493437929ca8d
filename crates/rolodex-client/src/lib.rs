//! Client
//!
//! Entry point for callers of the customer directory. A [`Client`] performs
//! lookups against a borrowed [`Directory`] and checks addresses against a
//! whitelist file that is re-read on every check, so edits apply without a
//! restart.
//!
//! # Components
//!
//! - [`Client`]: handle identified by a user label
//! - [`ClientConfig`]: whitelist location (defaults to `whitelist.txt`)
//! - [`FileWhitelist`]: file-backed [`WhitelistSource`]
//!
//! Failures are [`ClassifiedError`]s; match on the variant or on
//! [`ErrorKind`] rather than on the message.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod client;
mod config;
mod file_whitelist;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_WHITELIST_PATH};
pub use file_whitelist::FileWhitelist;
pub use rolodex_core::{
    ClassifiedError, Directory, ErrorKind, Record, RecordId, WhitelistSource, chain, kind_of,
    root_cause,
};
