//! A handle on one field GF(p)

use crate::element::FieldElement;
use gfcheck_api::error::{validate, Result};
use gfcheck_common::math_common::{is_prime, reduce};
use rand::Rng;

/// The residues modulo a fixed `p > 1`.
///
/// Construction only checks `p > 1`. Whether the residues actually form a
/// field is what [`is_prime`](Self::is_prime) and the axiom checker answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// Fails with `InvalidModulus` when `modulus <= 1`
    pub fn new(modulus: i64) -> Result<Self> {
        Ok(Self {
            modulus: validate::modulus(modulus)?,
        })
    }

    /// The modulus `p`
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Number of residues, which equals the modulus
    #[inline]
    pub fn order(&self) -> u64 {
        self.modulus
    }

    /// `value mod p`
    pub fn element(&self, value: i64) -> FieldElement {
        FieldElement::from_reduced(reduce(value, self.modulus), self.modulus)
    }

    /// The additive identity
    pub fn zero(&self) -> FieldElement {
        FieldElement::from_reduced(0, self.modulus)
    }

    /// The multiplicative identity
    pub fn one(&self) -> FieldElement {
        FieldElement::from_reduced(1, self.modulus)
    }

    /// Iterate `0, 1, …, p − 1`
    pub fn iter(&self) -> impl Iterator<Item = FieldElement> {
        let modulus = self.modulus;
        (0..modulus).map(move |v| FieldElement::from_reduced(v, modulus))
    }

    /// All `p` residues in ascending order
    pub fn elements(&self) -> Vec<FieldElement> {
        self.iter().collect()
    }

    /// The residues `1, …, p − 1` in ascending order
    pub fn nonzero_elements(&self) -> Vec<FieldElement> {
        self.iter().skip(1).collect()
    }

    /// Uniformly random residue
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        FieldElement::from_reduced(rng.gen_range(0..self.modulus), self.modulus)
    }

    /// Uniformly random nonzero residue
    pub fn random_nonzero<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        FieldElement::from_reduced(rng.gen_range(1..self.modulus), self.modulus)
    }

    /// Deterministic primality check of the modulus
    pub fn is_prime(&self) -> bool {
        is_prime(self.modulus)
    }
}
