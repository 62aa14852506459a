//! Error types for the execution memory.

use super::Offset;
use thiserror::Error;

/// A [Result] type over a generic value with [MemoryError].
pub type MemoryResult<T> = Result<T, MemoryError>;

/// An error raised by an execution memory operation.
///
/// Every rejected precondition surfaces as a distinct kind, raised at the
/// point of violation and propagated immediately. The owning execution
/// context treats any of these as a fatal abort of the current instruction's
/// effect; the memory itself performs no recovery or retry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    /// Byte-level read of an offset that was never written.
    #[error("invalid address: {0}")]
    InvalidAddress(Offset),
    /// Negative offset supplied to a mutating or bounded-read operation.
    #[error("offset must be non-negative, got {0}")]
    InvalidOffset(Offset),
    /// Non-positive length, or a word width outside of `[1, 8]`.
    #[error("invalid length: {0}")]
    InvalidLength(i64),
    /// The end of the requested range wraps past the maximum representable
    /// offset.
    #[error("offset overflow: {offset} + {length} wraps the offset domain")]
    OffsetOverflow {
        /// Start of the range.
        offset: Offset,
        /// Requested length of the range.
        length: i64,
    },
    /// The end of a clear range exceeds the number of materialized entries.
    #[error("range end {end} exceeds the store's {size} materialized entries")]
    RangeExceedsSize {
        /// Exclusive end of the rejected range.
        end: i64,
        /// Materialized entry count at the time of the call.
        size: usize,
    },
}
