/*!
 * Memory Types
 * Common types for the memory subsystem
 */

use crate::core::types::{Address, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MemoryError {
    #[error("out of memory: requested {requested} bytes, largest free range {largest_free} bytes ({free} free / {capacity} total)")]
    OutOfMemory {
        requested: Size,
        largest_free: Size,
        free: Size,
        capacity: Size,
    },

    #[error("out of bounds: {len} bytes at 0x{address:x} exceed capacity {capacity}")]
    OutOfBounds {
        address: Address,
        len: Size,
        capacity: Size,
    },

    #[error("no live allocation at 0x{0:x}")]
    UnknownAllocation(Address),

    #[error("token mismatch at 0x{address:x}: live allocation is {expected_size} bytes (generation {expected_generation}), presented {presented_size} bytes (generation {presented_generation})")]
    TokenMismatch {
        address: Address,
        expected_size: Size,
        expected_generation: u64,
        presented_size: Size,
        presented_generation: u64,
    },
}

/// One contiguous span of unallocated bytes, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeRange {
    pub start: Address,
    pub end: Address,
}

impl FreeRange {
    pub fn new(start: Address, end: Address) -> Self {
        debug_assert!(start <= end, "inverted free range");
        Self { start, end }
    }

    /// Span length in bytes
    pub fn len(&self) -> Size {
        self.end - self.start + 1
    }
}

/// Point-in-time view of region usage and fragmentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_memory: Size,
    pub used_memory: Size,
    pub available_memory: Size,
    pub usage_percentage: f64,
    pub free_ranges: usize,
    pub largest_free_range: Size,
}

impl MemoryStats {
    pub fn memory_pressure(&self) -> MemoryPressure {
        if self.usage_percentage >= 95.0 {
            MemoryPressure::Critical
        } else if self.usage_percentage >= 80.0 {
            MemoryPressure::High
        } else if self.usage_percentage >= 60.0 {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
