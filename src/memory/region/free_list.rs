/*!
 * First-Fit Free List
 * Ordered bookkeeping of unallocated address ranges
 */

use crate::core::types::{Address, Size};
use crate::memory::types::FreeRange;

/// Free ranges sorted by start offset.
///
/// Insertion never merges: a range released next to an existing free range
/// stays a separate entry until [`FreeList::coalesce`] is explicitly run.
#[derive(Debug, Clone)]
pub(super) struct FreeList {
    ranges: Vec<FreeRange>,
}

impl FreeList {
    /// A list covering the whole region; empty when `capacity` is zero
    pub fn new(capacity: Size) -> Self {
        let ranges = if capacity == 0 {
            Vec::new()
        } else {
            vec![FreeRange::new(0, capacity - 1)]
        };
        Self { ranges }
    }

    /// First-fit claim: take the start of the first range at least `size`
    /// bytes long. An exact fit removes the entry; a larger range is shrunk
    /// in place to its remaining tail, keeping its list position.
    pub fn first_fit(&mut self, size: Size) -> Option<Address> {
        let idx = self.ranges.iter().position(|r| r.len() >= size)?;
        let range = self.ranges[idx];
        if range.len() == size {
            self.ranges.remove(idx);
        } else {
            self.ranges[idx].start = range.start + size;
        }
        Some(range.start)
    }

    /// Insert a released range, keeping the list sorted by start offset
    pub fn insert(&mut self, range: FreeRange) {
        self.ranges.push(range);
        self.ranges.sort_unstable_by_key(|r| r.start);
    }

    /// Single pass merging runs of exactly adjacent ranges.
    ///
    /// Only called when the owning region was configured with coalescing
    /// enabled; the default model keeps fragments separate.
    pub fn coalesce(&mut self) {
        if self.ranges.len() < 2 {
            return;
        }
        let mut merged: Vec<FreeRange> = Vec::with_capacity(self.ranges.len());
        for range in self.ranges.drain(..) {
            match merged.last_mut() {
                Some(prev) if range.start == prev.end + 1 => prev.end = range.end,
                _ => merged.push(range),
            }
        }
        self.ranges = merged;
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn ranges(&self) -> &[FreeRange] {
        &self.ranges
    }

    /// Total free bytes across all ranges
    pub fn free_bytes(&self) -> Size {
        self.ranges.iter().map(|r| r.len()).sum()
    }

    /// Length of the largest single range
    pub fn largest(&self) -> Size {
        self.ranges.iter().map(|r| r.len()).max().unwrap_or(0)
    }
}
