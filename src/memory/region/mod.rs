/*!
 * Memory Region
 *
 * Flat byte-addressable memory with manual allocation primitives.
 *
 * ## Allocation behavior
 *
 * - **First-fit**: the free list is scanned in start order and the first
 *   range large enough wins, not the smallest-sufficient one.
 * - **Block splitting**: an oversized range is shrunk in place to its
 *   remaining tail; an exact fit removes the range entirely.
 * - **No coalescing**: releasing a span adjacent to an existing free range
 *   leaves two entries. Repeated alloc/free traffic fragments the region
 *   the way a naive heap does; opt in to merging with
 *   [`MemoryRegion::with_coalescing`].
 *
 * The region keeps no allocation metadata: callers present the same
 * (address, size) pairing on release that allocation handed out. The
 * token-validated [`TrackedRegion`] wrapper rejects mismatched pairings
 * for callers that want that misuse surfaced instead of trusted.
 *
 * Storage is zero-initialized at construction, so reads of never-written
 * bytes return zeros.
 */

mod allocator;
mod free_list;
mod storage;
mod tokens;

pub use tokens::{AllocationToken, TrackedRegion};

use self::free_list::FreeList;
use crate::core::limits::DEFAULT_MEMORY_SIZE;
use crate::core::types::{Address, Size};
use crate::memory::traits::{Allocator, MemoryInfo, Storage};
use crate::memory::types::{FreeRange, MemoryResult, MemoryStats};
use log::info;

/// Simulated flat memory region
pub struct MemoryRegion {
    capacity: Size,
    storage: Vec<u8>,
    free_list: FreeList,
    coalesce_on_free: bool,
}

impl MemoryRegion {
    /// Region with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MEMORY_SIZE)
    }

    /// Region with a caller-supplied capacity, fixed for the region's life
    pub fn with_capacity(capacity: Size) -> Self {
        info!(
            "memory region initialized: {} bytes, one free range",
            capacity
        );
        Self {
            capacity,
            storage: vec![0u8; capacity],
            free_list: FreeList::new(capacity),
            coalesce_on_free: false,
        }
    }

    /// Merge adjacent free ranges on every release.
    ///
    /// Off by default: separate adjacent ranges are what make the modeled
    /// fragmentation observable.
    pub fn with_coalescing(mut self, enabled: bool) -> Self {
        self.coalesce_on_free = enabled;
        self
    }

    /// Total byte count, fixed at construction
    pub fn capacity(&self) -> Size {
        self.capacity
    }

    /// Current free ranges, sorted by start offset
    pub fn free_ranges(&self) -> &[FreeRange] {
        self.free_list.ranges()
    }

    /// Memory info as (total, used, available)
    pub fn info(&self) -> (Size, Size, Size) {
        let free = self.free_list.free_bytes();
        (self.capacity, self.capacity - free, free)
    }

    /// Snapshot of usage and fragmentation
    pub fn stats(&self) -> MemoryStats {
        let free = self.free_list.free_bytes();
        let used = self.capacity - free;
        let usage_percentage = if self.capacity == 0 {
            0.0
        } else {
            (used as f64 / self.capacity as f64) * 100.0
        };
        MemoryStats {
            total_memory: self.capacity,
            used_memory: used,
            available_memory: free,
            usage_percentage,
            free_ranges: self.free_list.len(),
            largest_free_range: self.free_list.largest(),
        }
    }
}

// Implement trait interfaces
impl Allocator for MemoryRegion {
    fn allocate(&mut self, size: Size) -> MemoryResult<Address> {
        MemoryRegion::allocate(self, size)
    }

    fn deallocate(&mut self, address: Address, size: Size) {
        MemoryRegion::deallocate(self, address, size)
    }
}

impl Storage for MemoryRegion {
    fn write_bytes(&mut self, address: Address, data: &[u8]) -> MemoryResult<()> {
        MemoryRegion::write_bytes(self, address, data)
    }

    fn read_bytes(&self, address: Address, size: Size) -> MemoryResult<Vec<u8>> {
        MemoryRegion::read_bytes(self, address, size)
    }
}

impl MemoryInfo for MemoryRegion {
    fn stats(&self) -> MemoryStats {
        MemoryRegion::stats(self)
    }

    fn info(&self) -> (Size, Size, Size) {
        MemoryRegion::info(self)
    }
}

impl Default for MemoryRegion {
    fn default() -> Self {
        Self::new()
    }
}
