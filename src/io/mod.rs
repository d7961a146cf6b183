pub mod buffer;
pub mod engine;
pub mod metrics;
pub mod platform_specific;


// Re-exports
pub use buffer::{ChunkBuffer, DEFAULT_CHUNK_SIZE};
pub use engine::{OverwriteEngine, WipeTarget};
pub use metrics::{PassStats, PlanReport};
pub use platform_specific::{platform_name, DurableSync};
