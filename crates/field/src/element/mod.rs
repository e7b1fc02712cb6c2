//! GF(p) field element

use core::fmt;
use core::ops::Neg;

use gfcheck_api::error::{validate, Error, Result};
use gfcheck_common::math_common::{mod_add, mod_exp, mod_inv, mod_mul, mod_neg, mod_sub, reduce};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Residue class modulo `p`.
///
/// The value is always kept in `[0, p)`. The modulus is expected to be prime
/// but this is not checked; see [`PrimeField::is_prime`](crate::PrimeField::is_prime).
/// Two elements are equal iff they share both modulus and value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawElement", into = "RawElement")
)]
pub struct FieldElement {
    value: u64,
    modulus: u64,
}

impl FieldElement {
    /// Build `value mod modulus`.
    ///
    /// Negative values use true modulo, so `new(-1, 5)` is `4 (mod 5)`.
    /// Fails with [`Error::InvalidModulus`] when `modulus <= 1`.
    pub fn new(value: i64, modulus: i64) -> Result<Self> {
        let modulus = validate::modulus(modulus)?;
        Ok(Self::from_reduced(reduce(value, modulus), modulus))
    }

    /// Caller guarantees `modulus > 1` and `value < modulus`.
    #[inline]
    pub(crate) fn from_reduced(value: u64, modulus: u64) -> Self {
        debug_assert!(modulus > 1 && value < modulus);
        Self { value, modulus }
    }

    /// The additive identity of GF(`modulus`)
    pub fn zero(modulus: i64) -> Result<Self> {
        Self::new(0, modulus)
    }

    /// The multiplicative identity of GF(`modulus`)
    pub fn one(modulus: i64) -> Result<Self> {
        Self::new(1, modulus)
    }

    /// Canonical representative in `[0, p)`
    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The modulus `p`
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Check if element is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Check if element is one
    #[inline]
    pub fn is_one(&self) -> bool {
        self.value == 1
    }

    /// Addition: (self + other) mod p
    pub fn add(&self, other: &Self) -> Result<Self> {
        validate::same_modulus(self.modulus, other.modulus)?;
        Ok(Self::from_reduced(
            mod_add(self.value, other.value, self.modulus),
            self.modulus,
        ))
    }

    /// Subtraction: (self - other) mod p
    pub fn sub(&self, other: &Self) -> Result<Self> {
        validate::same_modulus(self.modulus, other.modulus)?;
        Ok(Self::from_reduced(
            mod_sub(self.value, other.value, self.modulus),
            self.modulus,
        ))
    }

    /// Multiplication: (self * other) mod p
    pub fn mul(&self, other: &Self) -> Result<Self> {
        validate::same_modulus(self.modulus, other.modulus)?;
        Ok(Self::from_reduced(
            mod_mul(self.value, other.value, self.modulus),
            self.modulus,
        ))
    }

    /// Additive inverse: (-self) mod p
    pub fn negate(&self) -> Self {
        Self::from_reduced(mod_neg(self.value, self.modulus), self.modulus)
    }

    /// Squaring: self² mod p
    #[inline]
    pub fn square(&self) -> Self {
        Self::from_reduced(mod_mul(self.value, self.value, self.modulus), self.modulus)
    }

    /// Exponentiation by square-and-multiply; `x⁰ = 1` for every `x`, zero included.
    pub fn pow(&self, exponent: u64) -> Self {
        Self::from_reduced(mod_exp(self.value, exponent, self.modulus), self.modulus)
    }

    /// Exponentiation allowing negative exponents: `x⁻ⁿ = (x⁻¹)ⁿ`.
    ///
    /// Fails with [`Error::NoInverse`] for a negative exponent on a
    /// non-invertible base.
    pub fn pow_signed(&self, exponent: i64) -> Result<Self> {
        if exponent >= 0 {
            return Ok(self.pow(exponent as u64));
        }
        Ok(self.invert()?.pow(exponent.unsigned_abs()))
    }

    /// Multiplicative inverse via the extended Euclidean algorithm.
    ///
    /// Fails with [`Error::NoInverse`] for zero, and for any value sharing a
    /// factor with a composite modulus.
    pub fn invert(&self) -> Result<Self> {
        mod_inv(self.value, self.modulus)
            .map(|inv| Self::from_reduced(inv, self.modulus))
            .ok_or(Error::NoInverse {
                value: self.value,
                modulus: self.modulus,
            })
    }

    /// Division: self * other⁻¹
    ///
    /// Fails with [`Error::DivisionByZero`] when `other` is zero.
    pub fn div(&self, other: &Self) -> Result<Self> {
        validate::same_modulus(self.modulus, other.modulus)?;
        validate::nonzero_divisor(other.value, other.modulus)?;
        self.mul(&other.invert()?)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.value.ct_eq(&other.value) & self.modulus.ct_eq(&other.modulus)
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            value: u64::conditional_select(&a.value, &b.value, choice),
            modulus: u64::conditional_select(&a.modulus, &b.modulus, choice),
        }
    }
}

/// Wire form checked on the way back in
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawElement {
    value: u64,
    modulus: u64,
}

#[cfg(feature = "serde")]
impl From<FieldElement> for RawElement {
    fn from(e: FieldElement) -> Self {
        RawElement {
            value: e.value,
            modulus: e.modulus,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawElement> for FieldElement {
    type Error = Error;

    fn try_from(raw: RawElement) -> Result<Self> {
        let modulus = i64::try_from(raw.modulus)
            .map_err(|_| Error::param("FieldElement", "modulus exceeds i64::MAX"))?;
        validate::modulus(modulus)?;
        validate::parameter(
            raw.value < raw.modulus,
            "FieldElement",
            "value must be below the modulus",
        )?;
        Ok(Self::from_reduced(raw.value, raw.modulus))
    }
}
