//! Reference model for model-based testing.
//!
//! The model is a simplified implementation of the directory and whitelist
//! check: a vector of names and an optional vector of lines. It serves as the
//! oracle against which the real implementation is verified.
//!
//! # Design Principles
//!
//! - Simplicity: the model should be obviously correct
//! - Captures WHAT, not HOW: no readers, no error objects, only outcomes
//! - Deterministic: same inputs produce same outputs

pub mod operation;
mod world;

pub use operation::{
    AddressSeed, NameSeed, Operation, OperationError, OperationResult, address_for, name_for,
};
pub use world::{ModelWorld, ObservableState};
