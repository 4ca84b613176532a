//! # Registry Packer
//!
//! Merges the schema snapshots of every known contract into a single
//! addressable lookup structure: `index` maps each contract name to its
//! integer slot and per-type sub-slots, `contracts` carries the full
//! snapshots. Runtime consumers address schema data through the integer
//! slots without reflection or parsing.
//!
//! ## Ordering Invariant
//!
//! Slots are assigned in input enumeration order, not name order; type
//! indexes are assigned in snapshot declaration order and reset per
//! contract. The packer is deterministic for a given input sequence and
//! nothing else — reordering the inputs reorders the slots.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tessera_core::CompileError;
use tessera_schema::SchemaSnapshot;

/// Index entry for one packed contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryEntry {
    /// The contract's integer slot, unique across the registry.
    pub slot: u32,
    /// Nested type name to sub-slot, assigned in declaration order.
    pub types: BTreeMap<String, u32>,
}

/// The merged, slot-indexed registry payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackedRegistry {
    /// Contract name to slot and type sub-slots.
    pub index: BTreeMap<String, RegistryEntry>,
    /// Contract name to full schema snapshot.
    pub contracts: BTreeMap<String, SchemaSnapshot>,
}

impl PackedRegistry {
    /// Serialize to compact JSON (the payload the bootstrap wraps).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a payload back from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Pack snapshots into one registry.
///
/// Snapshots are consumed in the given order; each receives the next slot.
/// Within a contract, every message type receives the next sub-slot in
/// declaration order, the counter resetting per contract. The service is an
/// operation set rather than a message type and takes no sub-slot.
///
/// # Errors
///
/// Returns `CompileError::DuplicateContract` if two snapshots share a
/// contract name — a duplicate would silently shadow a slot and skew every
/// later assignment.
pub fn pack(snapshots: &[SchemaSnapshot]) -> Result<PackedRegistry, CompileError> {
    let mut index = BTreeMap::new();
    let mut contracts = BTreeMap::new();

    for (slot, snapshot) in snapshots.iter().enumerate() {
        let mut types = BTreeMap::new();
        for (type_index, message) in snapshot.messages.iter().enumerate() {
            types.insert(message.name.clone(), type_index as u32);
        }
        let entry = RegistryEntry {
            slot: slot as u32,
            types,
        };
        if index.insert(snapshot.contract.clone(), entry).is_some() {
            return Err(CompileError::DuplicateContract {
                name: snapshot.contract.clone(),
            });
        }
        contracts.insert(snapshot.contract.clone(), snapshot.clone());
    }

    Ok(PackedRegistry { index, contracts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::{Contract, Field, FieldType};
    use tessera_schema::MessageLayout;

    fn snapshot(name: &str) -> SchemaSnapshot {
        let contract =
            Contract::new(name, vec![Field::new("label", FieldType::String)]).unwrap();
        SchemaSnapshot::from_layout(&MessageLayout::build(&contract))
    }

    #[test]
    fn test_slots_track_enumeration_order() {
        let forward = pack(&[snapshot("A"), snapshot("B"), snapshot("C")]).unwrap();
        assert_eq!(forward.index["A"].slot, 0);
        assert_eq!(forward.index["B"].slot, 1);
        assert_eq!(forward.index["C"].slot, 2);

        let reversed = pack(&[snapshot("C"), snapshot("B"), snapshot("A")]).unwrap();
        assert_eq!(reversed.index["C"].slot, 0);
        assert_eq!(reversed.index["B"].slot, 1);
        assert_eq!(reversed.index["A"].slot, 2);
    }

    #[test]
    fn test_type_indexes_follow_declaration_order() {
        let packed = pack(&[snapshot("Task")]).unwrap();
        let types = &packed.index["Task"].types;
        assert_eq!(types["Task"], 0);
        assert_eq!(types["TaskList"], 1);
        assert_eq!(types["AddTaskRequest"], 2);
        assert_eq!(types["GetAllTaskResponse"], 9);
        assert_eq!(types.len(), 10);
        assert!(!types.contains_key("TaskService"));
    }

    #[test]
    fn test_type_index_resets_per_contract() {
        let packed = pack(&[snapshot("A"), snapshot("B")]).unwrap();
        assert_eq!(packed.index["A"].types["A"], 0);
        assert_eq!(packed.index["B"].types["B"], 0);
    }

    #[test]
    fn test_contracts_carry_full_snapshots() {
        let snap = snapshot("Task");
        let packed = pack(std::slice::from_ref(&snap)).unwrap();
        assert_eq!(packed.contracts["Task"], snap);
    }

    #[test]
    fn test_duplicate_contract_rejected() {
        let err = pack(&[snapshot("A"), snapshot("A")]).unwrap_err();
        assert!(matches!(
            err,
            CompileError::DuplicateContract { name } if name == "A"
        ));
    }

    #[test]
    fn test_empty_input_packs_empty_registry() {
        let packed = pack(&[]).unwrap();
        assert!(packed.index.is_empty());
        assert!(packed.contracts.is_empty());
    }

    #[test]
    fn test_payload_json_round_trip() {
        let packed = pack(&[snapshot("A"), snapshot("B")]).unwrap();
        let json = packed.to_json().unwrap();
        assert_eq!(PackedRegistry::from_json(&json).unwrap(), packed);
    }
}
