//! Validation utilities shared by the field and checker crates

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate a modulus and return it as unsigned
#[inline(always)]
pub fn modulus(modulus: i64) -> Result<u64> {
    if modulus <= 1 {
        return Err(Error::InvalidModulus { modulus });
    }
    Ok(modulus as u64)
}

/// Validate that two operands share a modulus
#[inline(always)]
pub fn same_modulus(left: u64, right: u64) -> Result<()> {
    if left != right {
        return Err(Error::ModulusMismatch { left, right });
    }
    Ok(())
}

/// Validate that a divisor is nonzero
#[inline(always)]
pub fn nonzero_divisor(value: u64, modulus: u64) -> Result<()> {
    if value == 0 {
        return Err(Error::DivisionByZero { modulus });
    }
    Ok(())
}
