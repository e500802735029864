/*!
 * Tracked Allocation
 * Token-validated ownership layer over the raw region
 */

use std::collections::HashMap;

use super::MemoryRegion;
use crate::core::types::{Address, Size};
use crate::memory::types::{MemoryError, MemoryResult, MemoryStats};
use ahash::RandomState;
use log::warn;
use serde::{Deserialize, Serialize};

/// Proof of a live allocation.
///
/// The exact (address, size, generation) triple handed out by
/// [`TrackedRegion::allocate`] must come back on release. Generations make
/// tokens single-use: once a span is released and its address recycled, the
/// old token no longer matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationToken {
    pub address: Address,
    pub size: Size,
    pub generation: u64,
}

/// Region wrapper that tracks live allocations and validates release.
///
/// The raw [`MemoryRegion`] trusts every (address, size) pairing handed to
/// `deallocate`. This wrapper keeps a ledger of outstanding tokens and
/// rejects a release whose token does not match its ledger entry exactly,
/// so a stale or mistyped free surfaces as an error instead of silent
/// free-list corruption. First-fit and no-coalescing semantics are
/// unchanged underneath.
pub struct TrackedRegion {
    region: MemoryRegion,
    live: HashMap<Address, AllocationToken, RandomState>,
    next_generation: u64,
}

impl TrackedRegion {
    pub fn new(region: MemoryRegion) -> Self {
        Self {
            region,
            live: HashMap::default(),
            next_generation: 0,
        }
    }

    /// Reserve `size` bytes and record the returned token as live
    pub fn allocate(&mut self, size: Size) -> MemoryResult<AllocationToken> {
        let address = self.region.allocate(size)?;
        self.next_generation += 1;
        let token = AllocationToken {
            address,
            size,
            generation: self.next_generation,
        };
        self.live.insert(address, token);
        Ok(token)
    }

    /// Release a span by presenting its token.
    ///
    /// The token must match the ledger entry for its address exactly;
    /// otherwise the free list is left untouched and the mismatch is
    /// returned as an error.
    pub fn deallocate(&mut self, token: AllocationToken) -> MemoryResult<()> {
        let live = match self.live.get(&token.address) {
            Some(live) => *live,
            None => {
                warn!("release of unknown allocation at 0x{:x}", token.address);
                return Err(MemoryError::UnknownAllocation(token.address));
            }
        };
        if live != token {
            warn!(
                "token mismatch at 0x{:x}: live {} bytes gen {}, presented {} bytes gen {}",
                token.address, live.size, live.generation, token.size, token.generation
            );
            return Err(MemoryError::TokenMismatch {
                address: token.address,
                expected_size: live.size,
                expected_generation: live.generation,
                presented_size: token.size,
                presented_generation: token.generation,
            });
        }
        self.live.remove(&token.address);
        self.region.deallocate(token.address, token.size);
        Ok(())
    }

    pub fn write_bytes(&mut self, address: Address, data: &[u8]) -> MemoryResult<()> {
        self.region.write_bytes(address, data)
    }

    pub fn read_bytes(&self, address: Address, size: Size) -> MemoryResult<Vec<u8>> {
        self.region.read_bytes(address, size)
    }

    pub fn stats(&self) -> MemoryStats {
        self.region.stats()
    }

    /// Number of outstanding allocations
    pub fn live_allocations(&self) -> usize {
        self.live.len()
    }

    pub fn region(&self) -> &MemoryRegion {
        &self.region
    }

    /// Drop the ledger and hand back the raw region
    pub fn into_inner(self) -> MemoryRegion {
        self.region
    }
}
