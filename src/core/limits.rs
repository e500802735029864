/*!
 * Limits and Constants
 * Centralized defaults for the memory subsystem
 */

/// Default region capacity (1KB)
/// Small enough that fragmentation shows up within a handful of operations
pub const DEFAULT_MEMORY_SIZE: usize = 1024;
