/*!
 * Allocation Primitives
 * First-fit claim and release over the free list
 */

use super::MemoryRegion;
use crate::core::types::{Address, Size};
use crate::memory::types::{FreeRange, MemoryError, MemoryResult};
use log::{error, info};

impl MemoryRegion {
    /// Reserve `size` contiguous bytes, returning the span's start offset.
    ///
    /// The free list is scanned in start order; the first range of at least
    /// `size` bytes is claimed. On failure the free list is left unchanged.
    /// Buffer contents are never touched by allocation.
    pub fn allocate(&mut self, size: Size) -> MemoryResult<Address> {
        match self.free_list.first_fit(size) {
            Some(address) => {
                info!("allocated {} bytes at 0x{:x}", size, address);
                Ok(address)
            }
            None => {
                let free = self.free_list.free_bytes();
                let largest_free = self.free_list.largest();
                error!(
                    "OOM: requested {} bytes, largest free range {} bytes ({} free / {} total)",
                    size, largest_free, free, self.capacity
                );
                Err(MemoryError::OutOfMemory {
                    requested: size,
                    largest_free,
                    free,
                    capacity: self.capacity,
                })
            }
        }
    }

    /// Release the span of `size` bytes at `address` back to the free list.
    ///
    /// The pairing is trusted: the region keeps no allocation metadata, so
    /// a pairing that was never handed out by [`MemoryRegion::allocate`]
    /// corrupts the free list without detection. Use
    /// [`TrackedRegion`](super::TrackedRegion) when that must be rejected.
    ///
    /// The released range stays separate from any adjacent free range
    /// unless the region was built with coalescing enabled.
    pub fn deallocate(&mut self, address: Address, size: Size) {
        debug_assert!(size > 0, "zero-sized release");
        self.free_list
            .insert(FreeRange::new(address, address + size - 1));
        if self.coalesce_on_free {
            self.free_list.coalesce();
        }
        info!(
            "released {} bytes at 0x{:x} ({} free ranges)",
            size,
            address,
            self.free_list.len()
        );
    }
}
