/*!
 * Memory Traits
 * Seams for the allocation and storage surfaces
 */

use super::types::{MemoryPressure, MemoryResult, MemoryStats};
use crate::core::types::{Address, Size};

/// Manual allocation primitives over a fixed region
pub trait Allocator {
    /// Reserve `size` contiguous bytes, returning the span's start offset
    fn allocate(&mut self, size: Size) -> MemoryResult<Address>;

    /// Release a span previously returned by `allocate`.
    ///
    /// The (address, size) pairing is trusted; presenting a pairing that was
    /// never handed out corrupts the free list without detection.
    fn deallocate(&mut self, address: Address, size: Size);
}

/// Raw byte access by address
pub trait Storage {
    /// Copy `data` into the region starting at `address`
    fn write_bytes(&mut self, address: Address, data: &[u8]) -> MemoryResult<()>;

    /// Copy out `size` bytes starting at `address`
    fn read_bytes(&self, address: Address, size: Size) -> MemoryResult<Vec<u8>>;
}

/// Usage statistics provider
pub trait MemoryInfo {
    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;

    /// Get memory info as (total, used, available)
    fn info(&self) -> (Size, Size, Size);

    /// Get memory pressure level
    fn pressure(&self) -> MemoryPressure {
        self.stats().memory_pressure()
    }
}
