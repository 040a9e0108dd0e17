//! Core error types for sortscope-core.
//!
//! The data model itself cannot fail; the only fallible operation is the
//! strict parse of an algorithm identifier.

use thiserror::Error;

/// Core errors produced by the sortscope-core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An identifier that does not name any known algorithm.
    #[error("unknown algorithm: '{id}'")]
    UnknownAlgorithm { id: String },
}
