//! Common implementations shared by the gfcheck crates
//!
//! This crate holds the integer-level modular arithmetic that the field
//! element type is built on. Everything here works on plain `u64` residues
//! and never allocates.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod math_common;

pub use math_common::{
    extended_gcd, gcd, is_prime, mod_add, mod_exp, mod_inv, mod_mul, mod_neg, mod_sub, reduce,
};
