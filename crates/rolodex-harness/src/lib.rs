//! Test harness for the Rolodex directory.
//!
//! An in-memory [`WhitelistSource`](rolodex_core::WhitelistSource) that tests
//! can edit or delete between checks, and a reference model for model-based
//! testing.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation. Operations are
//! applied to both the model and the real directory and client, and their
//! results and observable states are compared.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod memory_whitelist;
pub mod model;

pub use memory_whitelist::MemoryWhitelist;
pub use model::{
    AddressSeed, ModelWorld, NameSeed, ObservableState, Operation, OperationError,
    OperationResult, address_for, name_for,
};
