//! Group and field axiom verification
//!
//! The checks here are brute force. They take a finite slice of elements
//! and any [`BinaryOperation`](gfcheck_api::BinaryOperation) over it, and
//! report which laws hold together with the first counterexample for each
//! law that does not.
//!
//! - [`check_group_axioms`] covers closure, associativity, identity,
//!   inverses and commutativity.
//! - [`check_distributivity`] links two operations.
//! - [`sampled`] trades the O(n³) scans for random triples.
//! - [`FieldVerifier`] runs all of it against the residues of a modulus.
//!
//! ```
//! use gfcheck_axioms::check_group_axioms;
//! use gfcheck_field::{FieldAddition, FieldMultiplication, PrimeField};
//!
//! let gf5 = PrimeField::new(5)?;
//! let add = check_group_axioms(&gf5.elements(), &FieldAddition)?;
//! let mul = check_group_axioms(&gf5.nonzero_elements(), &FieldMultiplication)?;
//! assert!(add.is_abelian_group() && mul.is_abelian_group());
//! assert_eq!(mul.identity, Some(gf5.one()));
//! # Ok::<(), gfcheck_api::Error>(())
//! ```
//!
//! Violations are logged as `tracing` debug events and each
//! [`FieldVerifier::verify`] call emits one info-level summary. No
//! subscriber is installed by this crate.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod distributivity;
pub mod group;
pub mod sampled;
pub mod verifier;

pub use config::VerifyConfig;
pub use distributivity::{check_distributivity, DistributivityResult};
pub use group::{check_group_axioms, AxiomCheckResult};
pub use sampled::{
    check_group_axioms_sampled, sample_associativity, sample_distributivity, SampledCheck,
};
pub use verifier::{CheckMode, FieldReport, FieldVerifier};
