//! Instrumented sorting engine.
//!
//! Runs one of ten classic sorting algorithms over a numeric sequence and
//! returns the sorted copy together with a complete, replayable log of every
//! comparison, access, assignment, swap and auxiliary-memory event.
//!
//! # Architecture
//!
//! - [`Recorder`] is the only way algorithms touch elements. It counts and
//!   logs every primitive.
//! - [`algorithms`] holds the ten implementations and the dispatch table.
//! - [`Engine`] maps an identifier to an algorithm, validates the input and
//!   returns a [`RunResult`](sortscope_core::RunResult).
//! - [`Replay`] steps through a finished log without re-running anything.
//! - [`Distribution`] generates seeded inputs of a given shape.
//! - [`verify`](mod@verify) checks the library against random inputs.
//!
//! # Usage
//!
//! ```
//! use sortscope_engine::{Engine, EngineConfig};
//!
//! let mut engine = Engine::new(EngineConfig::default());
//! let result = engine.run("quick", &[3.0, 1.0, 2.0]).unwrap();
//! assert_eq!(result.sorted, vec![1.0, 2.0, 3.0]);
//! assert_eq!(engine.stats(), Some(&result.stats));
//! ```

pub mod algorithms;
pub mod distribution;
pub mod element;
pub mod engine;
pub mod error;
pub mod recorder;
pub mod replay;
pub mod verify;

pub use distribution::{generate, Distribution};
pub use element::SortElement;
pub use engine::{Engine, EngineConfig};
pub use error::{EngineError, ReplayError};
pub use recorder::Recorder;
pub use replay::{replay, Replay};
pub use verify::{verify, VerifyConfig, VerifyReport};
