//! Error type definitions for field arithmetic and axiom checking

use thiserror::Error;

/// Primary error type for gfcheck operations
///
/// Axiom violations are never reported through this type; they are ordinary
/// `false` outcomes of a check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A modulus `<= 1` was supplied when building an element or field
    #[error("invalid modulus {modulus}: must be greater than 1")]
    InvalidModulus { modulus: i64 },

    /// Arithmetic between elements of different moduli
    #[error("modulus mismatch: GF({left}) vs GF({right})")]
    ModulusMismatch { left: u64, right: u64 },

    /// Division by the zero element
    #[error("division by zero in GF({modulus})")]
    DivisionByZero { modulus: u64 },

    /// Inversion of zero, or of a non-unit under a composite modulus
    #[error("{value} has no multiplicative inverse modulo {modulus}")]
    NoInverse { value: u64, modulus: u64 },

    /// Invalid checker or configuration parameter
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Configuration could not be parsed
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for gfcheck operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Swap in a new context for parameter errors
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            other => other,
        }
    }
}
