pub mod action;
pub mod algorithm;
pub mod error;
pub mod stats;

// Re-export commonly used types
pub use action::{Action, ActionKind};
pub use algorithm::{complexity, description, Algorithm, Complexity, Descriptor, DESCRIPTORS};
pub use error::CoreError;
pub use stats::{MemoryOp, MemorySnapshot, RunResult, Statistics};
