/*!
 * Memory Manager Contract
 *
 * The region is single-threaded; sharing it between agents is the job of a
 * manager that owns the region, serializes requests onto it, and routes
 * results back to their requesters. That manager's scheduling internals
 * live outside this crate. What lives here is the contract it programs
 * against: the typed request/response values, the translation of a request
 * into the corresponding primitive operation, and the lifecycle trait a
 * manager implements.
 */

mod types;

pub use types::{MemoryOperation, MemoryRequest, MemoryResponse};

use crate::memory::region::MemoryRegion;
use crate::memory::types::MemoryResult;
use log::debug;

/// Apply one request to a region.
///
/// Each operation variant maps to exactly one primitive; errors from the
/// region surface unchanged. The region never sees `agent_id` or
/// `round_id`; they stay with the caller for routing the response.
pub fn dispatch(
    region: &mut MemoryRegion,
    request: MemoryRequest,
) -> MemoryResult<MemoryResponse> {
    debug!(
        "dispatching request from agent {} (round {})",
        request.agent_id, request.round_id
    );
    match request.operation {
        MemoryOperation::Allocate { size } => region
            .allocate(size)
            .map(|address| MemoryResponse::Allocated { address }),
        MemoryOperation::Free { address, size } => {
            region.deallocate(address, size);
            Ok(MemoryResponse::Freed)
        }
        MemoryOperation::Write { address, bytes } => {
            region.write_bytes(address, &bytes)?;
            Ok(MemoryResponse::Written { len: bytes.len() })
        }
        MemoryOperation::Read { address, size } => region
            .read_bytes(address, size)
            .map(|bytes| MemoryResponse::Data { bytes }),
    }
}

/// Lifecycle contract for a manager that owns a region on behalf of many
/// agents: bring up a processing loop, accept requests, tear it down.
///
/// Implementations serialize concurrent submissions before touching the
/// region, e.g. one exclusive lock around all four operations or a single
/// owner draining a request queue; the region provides no thread safety of
/// its own.
pub trait MemoryService {
    /// Start the background processing loop
    fn start(&mut self);

    /// Stop the loop and release the region
    fn stop(&mut self);

    /// Submit one request and wait for its outcome
    fn submit(&mut self, request: MemoryRequest) -> MemoryResult<MemoryResponse>;
}
