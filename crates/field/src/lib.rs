//! Prime field arithmetic
//!
//! [`FieldElement`] is a residue modulo a fixed modulus `p`. Every operation
//! keeps the value in `[0, p)` and reports operand or division problems as
//! [`Error`](gfcheck_api::Error) values instead of panicking.
//!
//! [`PrimeField`] is the handle a driver uses to build and enumerate the
//! elements of one field, and [`ops`] holds the field operations in the
//! [`BinaryOperation`](gfcheck_api::BinaryOperation) form the axiom checker
//! expects.
//!
//! ```
//! use gfcheck_field::PrimeField;
//!
//! let gf7 = PrimeField::new(7)?;
//! let a = gf7.element(3);
//! let b = gf7.element(-2); // 5
//! assert_eq!(a.mul(&b)?.value(), 1);
//! assert_eq!(a.invert()?, b);
//! # Ok::<(), gfcheck_api::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod element;
pub mod ops;
pub mod prime_field;

pub use element::FieldElement;
pub use ops::{FieldAddition, FieldMultiplication, FieldSubtraction};
pub use prime_field::PrimeField;
