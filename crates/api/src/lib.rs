//! Public API traits and types for the gfcheck library
//!
//! This crate provides the error taxonomy shared by every gfcheck crate and
//! the [`BinaryOperation`] trait that the axiom checker is generic over.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result, ResultExt};
pub use traits::{BinaryOperation, FnOperation};
