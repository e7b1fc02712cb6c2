//! # gfcheck
//!
//! Prime field arithmetic and brute-force verification of group and field axioms.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gfcheck = "0.3"
//! ```
//!
//! ## Features
//!
//! - `axioms` (default): The axiom checker and field verifier
//! - `serde`: Serialization of elements, results and reports
//! - `rand`: Re-export `rand` for sampling elements
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`gfcheck-api`]: Error type and the `BinaryOperation` trait
//! - [`gfcheck-common`]: Integer helpers for modular arithmetic
//! - [`gfcheck-field`]: `FieldElement` and `PrimeField`
//! - [`gfcheck-axioms`]: Axiom checks and `FieldVerifier`
//!
//! ```
//! use gfcheck::prelude::*;
//!
//! let verifier = FieldVerifier::default();
//! assert!(verifier.verify(13)?.is_field());
//! assert!(!verifier.verify(15)?.is_field());
//! # Ok::<(), gfcheck::api::Error>(())
//! ```

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use gfcheck_api as api;
pub use gfcheck_common as common;
pub use gfcheck_field as field;

// Feature-gated re-exports
#[cfg(feature = "axioms")]
pub use gfcheck_axioms as axioms;

#[cfg(feature = "rand")]
pub use rand;

#[cfg(feature = "serde")]
pub use serde;

pub use subtle;

/// Common imports for gfcheck users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{BinaryOperation, FnOperation};

    // Re-export field types
    pub use crate::field::{
        FieldAddition, FieldElement, FieldMultiplication, FieldSubtraction, PrimeField,
    };

    #[cfg(feature = "axioms")]
    pub use crate::axioms::{
        check_distributivity, check_group_axioms, AxiomCheckResult, DistributivityResult,
        FieldReport, FieldVerifier, VerifyConfig,
    };
}
