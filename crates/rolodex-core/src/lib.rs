//! Rolodex Core
//!
//! An in-memory customer directory and an address whitelist check, with every
//! failure reported as a [`ClassifiedError`] that callers can branch on by
//! kind instead of by message.
//!
//! # Components
//!
//! - [`Directory`]: ordered records with sequential ids and lookup by id
//! - [`check_permitted`]: exact-line whitelist check against a
//!   [`WhitelistSource`] opened fresh on every call
//! - [`ClassifiedError`]: `NotFound | Forbidden`, each carrying message,
//!   context, cause and origin
//!
//! No I/O happens here beyond what a `WhitelistSource` does when opened; the
//! file-backed source lives in `rolodex-client`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod access;
pub mod directory;
pub mod error;
pub mod whitelist;

pub use access::check_permitted;
pub use directory::{Directory, Record, RecordId};
pub use error::{Cause, ClassifiedError, ErrorKind, Report, Result, chain, kind_of, root_cause};
pub use whitelist::{WhitelistSource, contains_line};
