//! Shared fixtures for the gfcheck integration tests and benchmarks

use gfcheck_field::PrimeField;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Primes small enough to check every triple
pub const SMALL_PRIMES: [i64; 6] = [2, 3, 5, 7, 11, 13];

/// Composites whose residues fail the multiplicative axioms
pub const SMALL_COMPOSITES: [i64; 5] = [4, 6, 8, 9, 12];

/// One [`PrimeField`] per entry of [`SMALL_PRIMES`]
pub fn small_fields() -> Vec<PrimeField> {
    SMALL_PRIMES
        .iter()
        .map(|&p| PrimeField::new(p).expect("listed primes are valid moduli"))
        .collect()
}

/// Deterministic RNG for reproducible sampling
pub fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
