//! Contract bytecode storage for the sEVM.
//!
//! The interpreter resolves the program to execute through a
//! [ContractStore]: a registry mapping contract addresses to raw bytecode.
//! The store is an owned value handed to whatever drives execution; it
//! shares no state with execution memory and is not a persistence layer.

use alloy_primitives::B64;
use rustc_hash::FxHashMap;

/// A [ContractAddress] is the 8 byte identifier under which a contract's
/// bytecode is registered.
pub type ContractAddress = B64;

/// An address-keyed registry of contract bytecode.
#[derive(Clone, Debug, Default)]
pub struct ContractStore {
    /// Map of contract addresses to their bytecode.
    contracts: FxHashMap<ContractAddress, Vec<u8>>,
}

impl ContractStore {
    /// Create an empty [ContractStore].
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `bytecode` under `address`, replacing any prior
    /// registration.
    pub fn insert(&mut self, address: ContractAddress, bytecode: Vec<u8>) {
        tracing::info!(
            target: "sevm::storage",
            "Registered contract at address {} ({} bytes)",
            address,
            bytecode.len()
        );
        self.contracts.insert(address, bytecode);
    }

    /// Look up the bytecode registered under `address`.
    pub fn get(&self, address: ContractAddress) -> Option<&[u8]> {
        self.contracts.get(&address).map(Vec::as_slice)
    }

    /// Returns `true` if a contract is registered under `address`.
    pub fn exists(&self, address: ContractAddress) -> bool {
        self.contracts.contains_key(&address)
    }

    /// The number of registered contracts.
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    /// Returns `true` if no contracts are registered.
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils;

    #[test]
    fn insert_then_lookup() {
        let mut store = ContractStore::new();
        let address = ContractAddress::from([0xAB; 8]);

        assert!(!store.exists(address));
        store.insert(address, vec![0x60, 0x01, 0x00]);

        assert!(store.exists(address));
        assert_eq!(Some(&[0x60, 0x01, 0x00][..]), store.get(address));
        assert_eq!(1, store.len());
    }

    #[test]
    fn absent_address_resolves_to_none() {
        let store = ContractStore::new();
        assert_eq!(None, store.get(ContractAddress::from([0x01; 8])));
        assert!(store.is_empty());
    }

    #[test]
    fn reinsertion_replaces_bytecode() {
        let mut store = ContractStore::new();
        let address = ContractAddress::from([0x02; 8]);

        store.insert(address, vec![0x00]);
        store.insert(address, vec![0x60, 0x3A, 0x00]);

        assert_eq!(Some(&[0x60, 0x3A, 0x00][..]), store.get(address));
        assert_eq!(1, store.len());
    }

    #[test]
    fn canned_store_resolves_fixture_addresses() {
        let store = test_utils::test_store();

        assert!(store.exists(test_utils::PUSH_AND_HALT_ADDR));
        assert!(store.exists(test_utils::STORE_AND_RETURN_ADDR));
        assert_eq!(
            test_utils::store_and_return_contract(),
            store.get(test_utils::STORE_AND_RETURN_ADDR).unwrap()
        );
    }
}
