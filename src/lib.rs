pub mod algorithms;
pub mod crypto;
pub mod error;
pub mod io;
pub mod wipe_orchestrator;

// Re-export the entry points for convenience
pub use algorithms::{Method, Pass, PassKind, Pattern, Plan, PlanGenerator};
pub use error::{WipeError, WipePhase, WipeResult};
pub use io::{OverwriteEngine, PlanReport, DEFAULT_CHUNK_SIZE};
pub use wipe_orchestrator::{secure_delete, WipeOrchestrator, WipeOutcome};

use serde::{Deserialize, Serialize};

/// Settings shared by the orchestrator and the overwrite engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WipeConfig {
    /// Upper bound on a single write, in bytes
    pub chunk_size: usize,
    /// Read back every fixed-pattern pass after it is synced
    pub verify: bool,
}

impl Default for WipeConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            verify: false,
        }
    }
}

impl WipeConfig {
    /// Chunk size actually used; zero is clamped to one byte
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.max(1)
    }
}
