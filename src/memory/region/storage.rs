/*!
 * Storage Operations
 * Raw byte access into the simulated region
 */

use super::MemoryRegion;
use crate::core::types::{Address, Size};
use crate::memory::types::{MemoryError, MemoryResult};
use log::{info, warn};

impl MemoryRegion {
    /// Copy `data` into the region starting at `address`.
    ///
    /// The write must fit inside the region; nothing is written otherwise.
    /// There is no ownership check: writing into unallocated space or
    /// another caller's span is possible and not prevented.
    pub fn write_bytes(&mut self, address: Address, data: &[u8]) -> MemoryResult<()> {
        let end = self.bounds_check(address, data.len())?;
        self.storage[address..end].copy_from_slice(data);
        info!("wrote {} bytes at 0x{:x}", data.len(), address);
        Ok(())
    }

    /// Copy out `size` bytes starting at `address`.
    ///
    /// No check that the range was ever allocated or written; bytes that
    /// were never written read as zero.
    pub fn read_bytes(&self, address: Address, size: Size) -> MemoryResult<Vec<u8>> {
        let end = self.bounds_check(address, size)?;
        info!("read {} bytes at 0x{:x}", size, address);
        Ok(self.storage[address..end].to_vec())
    }

    fn bounds_check(&self, address: Address, len: Size) -> MemoryResult<Address> {
        match address.checked_add(len) {
            Some(end) if end <= self.capacity => Ok(end),
            _ => {
                warn!(
                    "out of bounds: {} bytes at 0x{:x} exceed capacity {}",
                    len, address, self.capacity
                );
                Err(MemoryError::OutOfBounds {
                    address,
                    len,
                    capacity: self.capacity,
                })
            }
        }
    }
}
