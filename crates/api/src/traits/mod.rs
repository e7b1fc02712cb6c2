//! Trait definitions for the gfcheck ecosystem

pub mod operation;

pub use operation::{BinaryOperation, FnOperation};
