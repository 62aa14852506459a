#![doc = include_str!("../README.md")]
#![warn(missing_docs, unreachable_pub)]

mod memory;
pub use memory::{Memory, MemoryError, MemoryResult, Offset, TreeMemory, Word, MAX_WORD_SIZE};

mod storage;
pub use storage::{ContractAddress, ContractStore};

mod utils;

#[cfg(any(feature = "test-utils", test))]
pub mod test_utils;
