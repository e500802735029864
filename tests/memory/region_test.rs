/*!
 * Memory Region Tests
 * Allocation, release, and raw byte access against the simulated region
 */

use agentos_memory::memory::{MemoryError, MemoryPressure, MemoryRegion};
use pretty_assertions::assert_eq;

#[test]
fn test_region_initialization() {
    let region = MemoryRegion::with_capacity(1024);
    assert_eq!(region.capacity(), 1024);

    let (total, used, available) = region.info();
    assert_eq!(total, 1024);
    assert_eq!(used, 0);
    assert_eq!(available, 1024);

    // One free range covering the whole region
    let ranges = region.free_ranges();
    assert_eq!(ranges.len(), 1);
    assert_eq!((ranges[0].start, ranges[0].end), (0, 1023));
}

#[test]
fn test_default_capacity() {
    let region = MemoryRegion::new();
    assert_eq!(region.capacity(), 1024);
}

#[test]
fn test_first_fit_returns_sequential_addresses() {
    let mut region = MemoryRegion::with_capacity(1024);

    assert_eq!(region.allocate(100).unwrap(), 0);
    assert_eq!(region.allocate(200).unwrap(), 100);
    assert_eq!(region.allocate(24).unwrap(), 300);

    let (_, used, _) = region.info();
    assert_eq!(used, 324);
}

#[test]
fn test_exact_fit_removes_range() {
    let mut region = MemoryRegion::with_capacity(64);
    region.allocate(64).unwrap();

    assert!(region.free_ranges().is_empty());
    let (_, used, available) = region.info();
    assert_eq!(used, 64);
    assert_eq!(available, 0);
}

#[test]
fn test_split_keeps_remaining_tail() {
    let mut region = MemoryRegion::with_capacity(100);
    region.allocate(30).unwrap();

    let ranges = region.free_ranges();
    assert_eq!(ranges.len(), 1);
    assert_eq!((ranges[0].start, ranges[0].end), (30, 99));
}

#[test]
fn test_out_of_memory_leaves_free_list_unchanged() {
    let mut region = MemoryRegion::with_capacity(100);
    region.allocate(60).unwrap();
    let before: Vec<_> = region.free_ranges().to_vec();

    let err = region.allocate(50).unwrap_err();
    match err {
        MemoryError::OutOfMemory {
            requested,
            largest_free,
            free,
            capacity,
        } => {
            assert_eq!(requested, 50);
            assert_eq!(largest_free, 40);
            assert_eq!(free, 40);
            assert_eq!(capacity, 100);
        }
        other => panic!("expected OutOfMemory, got {:?}", other),
    }

    assert_eq!(region.free_ranges(), before.as_slice());
}

#[test]
fn test_fragmented_space_cannot_serve_large_request() {
    // Two 10-byte holes cannot serve one 20-byte request even though the
    // total free space would suffice
    let mut region = MemoryRegion::with_capacity(40);
    let a = region.allocate(10).unwrap();
    region.allocate(10).unwrap();
    let c = region.allocate(10).unwrap();
    region.allocate(10).unwrap();

    region.deallocate(a, 10);
    region.deallocate(c, 10);

    let err = region.allocate(20).unwrap_err();
    assert!(matches!(
        err,
        MemoryError::OutOfMemory {
            free: 20,
            largest_free: 10,
            ..
        }
    ));
}

#[test]
fn test_alloc_free_alloc_bookkeeping() {
    let mut region = MemoryRegion::with_capacity(10);

    assert_eq!(region.allocate(4).unwrap(), 0);
    assert_eq!(region.allocate(4).unwrap(), 4);
    // Only 2 bytes left
    assert!(region.allocate(4).is_err());

    region.deallocate(0, 4);
    // First fit reuses the freed head and keeps its tail
    assert_eq!(region.allocate(2).unwrap(), 0);

    let ranges: Vec<(usize, usize)> = region
        .free_ranges()
        .iter()
        .map(|r| (r.start, r.end))
        .collect();
    assert_eq!(ranges, vec![(2, 3), (8, 9)]);
}

#[test]
fn test_write_read_round_trip() {
    let mut region = MemoryRegion::with_capacity(64);
    let addr = region.allocate(5).unwrap();

    region.write_bytes(addr, b"hello").unwrap();
    assert_eq!(region.read_bytes(addr, 5).unwrap(), b"hello");
}

#[test]
fn test_read_never_written_is_zero_filled() {
    let region = MemoryRegion::with_capacity(16);
    assert_eq!(region.read_bytes(4, 8).unwrap(), vec![0u8; 8]);
}

#[test]
fn test_write_out_of_bounds() {
    let mut region = MemoryRegion::with_capacity(10);

    let err = region.write_bytes(8, b"abc").unwrap_err();
    match err {
        MemoryError::OutOfBounds {
            address,
            len,
            capacity,
        } => {
            assert_eq!(address, 8);
            assert_eq!(len, 3);
            assert_eq!(capacity, 10);
        }
        other => panic!("expected OutOfBounds, got {:?}", other),
    }

    // A failed write is not partial
    assert_eq!(region.read_bytes(8, 2).unwrap(), vec![0, 0]);
}

#[test]
fn test_read_out_of_bounds() {
    let region = MemoryRegion::with_capacity(10);

    assert!(region.read_bytes(10, 1).is_err());
    assert!(region.read_bytes(0, 11).is_err());
    // Reading up to capacity is fine
    assert!(region.read_bytes(0, 10).is_ok());
}

#[test]
fn test_bounds_check_survives_address_overflow() {
    let mut region = MemoryRegion::with_capacity(10);

    assert!(region.read_bytes(usize::MAX, 2).is_err());
    assert!(region.write_bytes(usize::MAX, b"xy").is_err());
}

#[test]
fn test_write_into_unallocated_space_is_allowed() {
    // No ownership check on raw byte access
    let mut region = MemoryRegion::with_capacity(32);
    region.write_bytes(16, b"ghost").unwrap();
    assert_eq!(region.read_bytes(16, 5).unwrap(), b"ghost");
}

#[test]
fn test_released_bytes_are_not_scrubbed() {
    let mut region = MemoryRegion::with_capacity(16);
    let addr = region.allocate(4).unwrap();
    region.write_bytes(addr, b"data").unwrap();

    region.deallocate(addr, 4);
    assert_eq!(region.read_bytes(addr, 4).unwrap(), b"data");
}

#[test]
fn test_zero_capacity_region() {
    let mut region = MemoryRegion::with_capacity(0);

    assert!(region.free_ranges().is_empty());
    assert!(region.allocate(1).is_err());
    assert!(region.read_bytes(0, 1).is_err());
    assert!(region.read_bytes(0, 0).is_ok());
}

#[test]
fn test_stats_reflect_usage_and_fragmentation() {
    let mut region = MemoryRegion::with_capacity(100);
    let a = region.allocate(20).unwrap();
    region.allocate(20).unwrap();
    region.deallocate(a, 20);

    let stats = region.stats();
    assert_eq!(stats.total_memory, 100);
    assert_eq!(stats.used_memory, 20);
    assert_eq!(stats.available_memory, 80);
    // Freed head plus the untouched tail
    assert_eq!(stats.free_ranges, 2);
    assert_eq!(stats.largest_free_range, 60);
    assert!((stats.usage_percentage - 20.0).abs() < f64::EPSILON);
}

#[test]
fn test_memory_pressure_ladder() {
    let mut region = MemoryRegion::with_capacity(100);
    assert_eq!(region.stats().memory_pressure(), MemoryPressure::Low);

    region.allocate(70).unwrap();
    assert_eq!(region.stats().memory_pressure(), MemoryPressure::Medium);

    region.allocate(15).unwrap();
    assert_eq!(region.stats().memory_pressure(), MemoryPressure::High);

    region.allocate(11).unwrap();
    assert_eq!(region.stats().memory_pressure(), MemoryPressure::Critical);
}
