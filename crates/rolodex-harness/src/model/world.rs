//! Model world - the reference implementation.
//!
//! The world holds a plain list of names and an optional list of whitelist
//! lines. It is obviously correct by construction and serves as the oracle
//! the real directory, client and whitelist are compared against.

use super::operation::{Operation, OperationError, OperationResult, address_for, name_for};

/// Observable state for oracle comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// `(id, name, address)` for every record, in id order.
    pub records: Vec<(u64, String, String)>,
    /// Whitelist lines, or `None` if the whitelist is absent.
    pub whitelist: Option<Vec<String>>,
}

/// Reference model of a directory plus whitelist.
#[derive(Debug, Clone)]
pub struct ModelWorld {
    /// Records as `(name, address)`; the index is the id.
    records: Vec<(String, String)>,
    /// Whitelist lines, `None` when removed.
    whitelist: Option<Vec<String>>,
}

impl ModelWorld {
    /// Create a world with an empty directory and an empty, present
    /// whitelist.
    pub fn new() -> Self {
        Self { records: Vec::new(), whitelist: Some(Vec::new()) }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current whitelist lines, if present.
    pub fn whitelist(&self) -> Option<&[String]> {
        self.whitelist.as_deref()
    }

    /// Apply an operation and return the result.
    ///
    /// The result should match the real implementation's result.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match op {
            Operation::Append { name, address } => {
                let id = self.records.len() as u64;
                self.records.push((name_for(*name), address_for(*address)));
                OperationResult::Appended(id)
            },
            Operation::GetName { id } => self.apply_get_name(i64::from(*id)),
            Operation::CheckPermitted { address } => self.apply_check(&address_for(*address)),
            Operation::Permit { address } => {
                self.whitelist.get_or_insert_with(Vec::new).push(address_for(*address));
                OperationResult::Ok
            },
            Operation::Revoke { address } => {
                let address = address_for(*address);
                if let Some(lines) = &mut self.whitelist {
                    lines.retain(|line| *line != address);
                }
                OperationResult::Ok
            },
            Operation::RemoveWhitelist => {
                self.whitelist = None;
                OperationResult::Ok
            },
            Operation::Clear => {
                self.records.clear();
                OperationResult::Ok
            },
        }
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        let records = self
            .records
            .iter()
            .enumerate()
            .map(|(id, (name, address))| (id as u64, name.clone(), address.clone()))
            .collect();

        ObservableState { records, whitelist: self.whitelist.clone() }
    }

    fn apply_get_name(&self, id: i64) -> OperationResult {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.records.get(index))
            .map_or(OperationResult::Error(OperationError::NotFound), |(name, _)| {
                OperationResult::Name(name.clone())
            })
    }

    fn apply_check(&self, address: &str) -> OperationResult {
        match &self.whitelist {
            None => OperationResult::Error(OperationError::Unverifiable),
            Some(lines) if lines.iter().any(|line| line == address) => OperationResult::Ok,
            Some(_) => OperationResult::Error(OperationError::Forbidden),
        }
    }
}

impl Default for ModelWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_then_lookup() {
        let mut world = ModelWorld::new();

        assert_eq!(
            world.apply(&Operation::Append { name: 1, address: 1 }),
            OperationResult::Appended(0)
        );
        assert_eq!(world.apply(&Operation::GetName { id: 0 }), OperationResult::Name(name_for(1)));
        assert_eq!(
            world.apply(&Operation::GetName { id: 1 }),
            OperationResult::Error(OperationError::NotFound)
        );
        assert_eq!(
            world.apply(&Operation::GetName { id: -1 }),
            OperationResult::Error(OperationError::NotFound)
        );
    }

    #[test]
    fn default_starts_with_present_empty_whitelist() {
        let mut world = ModelWorld::default();

        assert!(world.is_empty());
        assert_eq!(world.whitelist(), Some(&[][..]));
        assert_eq!(
            world.apply(&Operation::CheckPermitted { address: 0 }),
            OperationResult::Error(OperationError::Forbidden)
        );
        assert_eq!(world.observable_state(), ModelWorld::new().observable_state());
    }

    #[test]
    fn whitelist_lifecycle() {
        let mut world = ModelWorld::new();
        let check = Operation::CheckPermitted { address: 2 };

        assert_eq!(world.apply(&check), OperationResult::Error(OperationError::Forbidden));

        world.apply(&Operation::Permit { address: 2 });
        assert_eq!(world.apply(&check), OperationResult::Ok);

        world.apply(&Operation::RemoveWhitelist);
        assert_eq!(world.apply(&check), OperationResult::Error(OperationError::Unverifiable));

        // Revoking from an absent whitelist does not recreate it
        world.apply(&Operation::Revoke { address: 2 });
        assert!(world.whitelist().is_none());

        world.apply(&Operation::Permit { address: 3 });
        assert_eq!(world.apply(&check), OperationResult::Error(OperationError::Forbidden));
    }
}
