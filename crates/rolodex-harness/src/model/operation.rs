//! Operations for model-based testing.
//!
//! Operations represent every action a caller can take. They are generated
//! randomly by proptest and applied to both the model and the real
//! implementation.

use arbitrary::Arbitrary;

/// Seed for a customer name (kept small so names repeat).
pub type NameSeed = u8;

/// Seed for an address (kept small so whitelist hits are common).
pub type AddressSeed = u8;

/// Number of distinct addresses the seeds map onto.
const ADDRESS_SPACE: u8 = 8;

/// Number of distinct names the seeds map onto.
const NAME_SPACE: u8 = 16;

/// Operations that can be applied to the system.
#[derive(Debug, Clone, Arbitrary)]
pub enum Operation {
    /// Append a customer record.
    Append {
        /// Customer name seed.
        name: NameSeed,
        /// Customer address seed.
        address: AddressSeed,
    },

    /// Look up a record's name by id.
    ///
    /// Uses `i8` so negative and out-of-range ids come up often.
    GetName {
        /// Id to look up.
        id: i8,
    },

    /// Check an address against the whitelist.
    CheckPermitted {
        /// Address seed.
        address: AddressSeed,
    },

    /// Add an address to the whitelist, creating it if absent.
    Permit {
        /// Address seed.
        address: AddressSeed,
    },

    /// Remove every line matching an address from the whitelist.
    ///
    /// No effect when the whitelist is absent.
    Revoke {
        /// Address seed.
        address: AddressSeed,
    },

    /// Delete the whitelist resource.
    RemoveWhitelist,

    /// Reset the directory.
    Clear,
}

/// Expand a name seed to a customer name.
pub fn name_for(seed: NameSeed) -> String {
    format!("name-{}", seed % NAME_SPACE)
}

/// Expand an address seed to an address.
pub fn address_for(seed: AddressSeed) -> String {
    format!("user{}@example.com", seed % ADDRESS_SPACE)
}

/// Result of applying an operation.
///
/// Used to compare model and real system behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Operation succeeded with nothing to report.
    Ok,

    /// Record appended with this id.
    Appended(u64),

    /// Lookup succeeded with this name.
    Name(String),

    /// Operation failed with a classified error.
    Error(OperationError),
}

/// Expected errors, mirroring the classification plus whether a cause was
/// attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    /// No record with the requested id.
    NotFound,

    /// Address not on the whitelist.
    Forbidden,

    /// Whitelist could not be read; forbidden with an I/O cause.
    Unverifiable,
}

impl OperationResult {
    /// Check if operation succeeded.
    pub fn is_ok(&self) -> bool {
        !self.is_err()
    }

    /// Check if operation failed.
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
