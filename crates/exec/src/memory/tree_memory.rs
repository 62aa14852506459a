//! Contains [TreeMemory], the sparse ordered-map implementation of [Memory].

use super::{Memory, MemoryError, MemoryResult, Offset, Word, MAX_WORD_SIZE};
use crate::utils::{byte_to_hex, word_from_bytes, word_to_bytes};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Horizontal rule used to frame the diagnostic dump.
const DUMP_RULE: &str = "------------------------------------------------------";

/// [TreeMemory] is the execution memory of a single sEVM context: a sparse
/// mapping from non-negative [Offset]s to byte values, held in an ordered map
/// so that diagnostics and snapshots iterate in ascending offset order.
///
/// The store is created empty at the start of an execution context, mutated
/// only by the owning interpreter thread, and discarded (or [Memory::reset])
/// when the context ends.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TreeMemory {
    /// Map of materialized offsets to their byte values. Invariant: every
    /// key is non-negative.
    entries: BTreeMap<Offset, u8>,
}

impl Memory for TreeMemory {
    fn get_byte(&self, offset: Offset) -> MemoryResult<u8> {
        match self.entries.get(&offset) {
            Some(value) => Ok(*value),
            None => {
                tracing::error!(target: "sevm::memory", "Byte read of unwritten address {}", offset);
                Err(MemoryError::InvalidAddress(offset))
            }
        }
    }

    fn set_byte(&mut self, offset: Offset, value: u8) -> MemoryResult<()> {
        if offset < 0 {
            tracing::error!(target: "sevm::memory", "Byte write to negative offset {}", offset);
            return Err(MemoryError::InvalidOffset(offset));
        }

        self.entries.insert(offset, value);
        tracing::debug!(target: "sevm::memory", "Wrote {} at offset {}", byte_to_hex(value), offset);
        Ok(())
    }

    fn contains(&self, offset: Offset) -> bool {
        self.entries.contains_key(&offset)
    }

    fn remove(&mut self, offset: Offset) {
        self.entries.remove(&offset);
    }

    fn clear_range(&mut self, offset: Offset, length: i64) -> MemoryResult<()> {
        if length <= 0 {
            tracing::error!(target: "sevm::memory", "Range clear with non-positive length {}", length);
            return Err(MemoryError::InvalidLength(length));
        }
        if offset < 0 {
            tracing::error!(target: "sevm::memory", "Range clear from negative offset {}", offset);
            return Err(MemoryError::InvalidOffset(offset));
        }
        let Some(end) = offset.checked_add(length) else {
            tracing::error!(target: "sevm::memory", "Range clear end overflows: {} + {}", offset, length);
            return Err(MemoryError::OffsetOverflow { offset, length });
        };

        // The bound is the count of materialized entries, not the highest
        // written offset.
        if end > self.entries.len() as i64 {
            tracing::error!(
                target: "sevm::memory",
                "Range clear end {} exceeds the store's {} materialized entries",
                end,
                self.entries.len()
            );
            return Err(MemoryError::RangeExceedsSize { end, size: self.entries.len() });
        }

        for current in offset..end {
            self.entries.remove(&current);
        }
        tracing::debug!(target: "sevm::memory", "Cleared offsets {}..{}", offset, end);
        Ok(())
    }

    fn reset(&mut self) {
        self.entries.clear();
        tracing::debug!(target: "sevm::memory", "Reset execution memory");
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn get_word(&self, offset: Offset, length: i64) -> MemoryResult<Word> {
        if length <= 0 || length > MAX_WORD_SIZE as i64 {
            tracing::error!(target: "sevm::memory", "Word read with invalid length {}", length);
            return Err(MemoryError::InvalidLength(length));
        }
        if offset < 0 {
            tracing::error!(target: "sevm::memory", "Word read from negative offset {}", offset);
            return Err(MemoryError::InvalidOffset(offset));
        }
        if offset.checked_add(length).is_none() {
            tracing::error!(target: "sevm::memory", "Word read end overflows: {} + {}", offset, length);
            return Err(MemoryError::OffsetOverflow { offset, length });
        }

        let mut bytes = [0u8; MAX_WORD_SIZE];
        for i in 0..length {
            // Absent offsets within the range read as zero.
            bytes[i as usize] = self.entries.get(&(offset + i)).copied().unwrap_or(0);
        }

        Ok(word_from_bytes(&bytes[..length as usize]))
    }

    fn set_word(&mut self, offset: Offset, max_length: i64, value: Word) -> MemoryResult<()> {
        if max_length <= 0 || max_length > MAX_WORD_SIZE as i64 {
            tracing::error!(target: "sevm::memory", "Word write with invalid width {}", max_length);
            return Err(MemoryError::InvalidLength(max_length));
        }
        if offset < 0 {
            tracing::error!(target: "sevm::memory", "Word write to negative offset {}", offset);
            return Err(MemoryError::InvalidOffset(offset));
        }
        if offset.checked_add(max_length).is_none() {
            tracing::error!(target: "sevm::memory", "Word write end overflows: {} + {}", offset, max_length);
            return Err(MemoryError::OffsetOverflow { offset, length: max_length });
        }

        // Each byte re-enters the byte-level offset gate in `set_byte`.
        for (i, byte) in word_to_bytes(value, max_length as usize).iter().enumerate() {
            self.set_byte(offset + i as i64, *byte)?;
        }

        Ok(())
    }

    fn dump(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(">> TreeMemory contents {}>\n", DUMP_RULE));
        if self.entries.is_empty() {
            out.push_str("   (memory is empty)\n");
        }
        for (offset, value) in &self.entries {
            out.push_str(&format!("Offset: {}, Value: {}\n", offset, byte_to_hex(*value)));
        }
        out.push_str(&format!("<< TreeMemory contents {}<\n", DUMP_RULE));
        out
    }
}

/// A single materialized entry within a [TreeMemory] snapshot.
#[derive(Serialize, Deserialize, Debug)]
struct MemEntry {
    offset: Offset,
    value: u8,
}

impl Serialize for TreeMemory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // BTreeMap iteration is already ascending by offset.
        let entries: Vec<MemEntry> =
            self.entries.iter().map(|(&offset, &value)| MemEntry { offset, value }).collect();
        entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TreeMemory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries: Vec<MemEntry> = Vec::deserialize(deserializer)?;

        let mut memory = TreeMemory::default();
        for (i, e) in entries.iter().enumerate() {
            if e.offset < 0 {
                return Err(serde::de::Error::custom(format!(
                    "cannot load negative offset, entry {}, offset {}",
                    i, e.offset
                )));
            }
            if memory.entries.insert(e.offset, e.value).is_some() {
                return Err(serde::de::Error::custom(format!(
                    "cannot load duplicate offset, entry {}, offset {}",
                    i, e.offset
                )));
            }
        }

        Ok(memory)
    }
}
