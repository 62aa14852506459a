//! Testing utilities.

#![allow(missing_docs)]

use crate::storage::{ContractAddress, ContractStore};
use alloy_primitives::fixed_bytes;

/// Address of the canned contract that pushes values and halts.
pub const PUSH_AND_HALT_ADDR: ContractAddress = fixed_bytes!("0101010101010101");

/// Address of the canned contract that stores a word and returns it.
pub const STORE_AND_RETURN_ADDR: ContractAddress = fixed_bytes!("0101010101010102");

/// Bytecode that writes `0x3A` into execution memory at offset `0x10` and
/// returns an 8 byte word read back from that offset.
pub fn store_and_return_contract() -> Vec<u8> {
    vec![
        0x60, 0x3A, // PUSH1 0x3A
        0x60, 0x10, // PUSH1 0x10
        0x52, // MSTORE
        0x60, 0x08, // PUSH1 0x08
        0x60, 0x10, // PUSH1 0x10
        0xF3, // RETURN
        0x00, // STOP
    ]
}

/// Bytecode that pushes four values onto the stack and halts without
/// touching memory.
pub fn push_and_halt_contract() -> Vec<u8> {
    vec![
        0x60, 0x3A, // PUSH1 0x3A
        0x60, 0x3A, // PUSH1 0x3A
        0x60, 0x3A, // PUSH1 0x3A
        0x60, 0x3A, // PUSH1 0x3A
        0x00, // STOP
    ]
}

/// A [ContractStore] preloaded with the canned contracts at their well-known
/// addresses.
pub fn test_store() -> ContractStore {
    let mut store = ContractStore::new();
    store.insert(PUSH_AND_HALT_ADDR, push_and_halt_contract());
    store.insert(STORE_AND_RETURN_ADDR, store_and_return_contract());
    store
}
