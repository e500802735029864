/*!
 * Manager Request Types
 * Typed requests and responses routed between agents and the region
 */

use crate::core::types::{Address, AgentId, RoundId, Size};
use serde::{Deserialize, Serialize};

/// One of the four primitive operations, with its arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "operation")]
pub enum MemoryOperation {
    Allocate { size: Size },
    Free { address: Address, size: Size },
    Write { address: Address, bytes: Vec<u8> },
    Read { address: Address, size: Size },
}

/// A routed request: which agent asked, in which round, and what for.
///
/// `agent_id` and `round_id` identify the requester to the manager; the
/// region itself never sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRequest {
    pub agent_id: AgentId,
    pub round_id: RoundId,
    #[serde(flatten)]
    pub operation: MemoryOperation,
}

impl MemoryRequest {
    pub fn new(agent_id: AgentId, round_id: RoundId, operation: MemoryOperation) -> Self {
        Self {
            agent_id,
            round_id,
            operation,
        }
    }
}

/// Successful outcome of a dispatched operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "result")]
pub enum MemoryResponse {
    Allocated { address: Address },
    Freed,
    Written { len: Size },
    Data { bytes: Vec<u8> },
}
