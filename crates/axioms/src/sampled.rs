//! Randomized versions of the cubic checks
//!
//! Associativity and distributivity cost O(n³) exhaustively. These routines
//! draw uniform index triples instead, which can refute a law but never
//! prove it.

use std::hash::Hash;

use gfcheck_api::{validate, BinaryOperation, Result, ResultExt};
use rand::Rng;
use tracing::debug;

use crate::distributivity::DistributivityResult;
use crate::group::{assemble, associates, AxiomCheckResult};

/// Outcome of a sampled single-law check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct SampledCheck {
    /// Triples evaluated before stopping
    pub trials: usize,
    /// No sampled triple broke the law
    pub holds: bool,
    /// First failing triple drawn
    pub witness: Option<(usize, usize, usize)>,
}

fn draw<R: Rng + ?Sized>(rng: &mut R, n: usize) -> (usize, usize, usize) {
    (rng.gen_range(0..n), rng.gen_range(0..n), rng.gen_range(0..n))
}

/// Test associativity on `samples` random triples, stopping at the first failure
pub fn sample_associativity<T, O, R>(
    elements: &[T],
    op: &O,
    samples: usize,
    rng: &mut R,
) -> Result<SampledCheck>
where
    T: Eq,
    O: BinaryOperation<T> + ?Sized,
    R: Rng + ?Sized,
{
    validate::parameter(samples > 0, "sample_associativity", "samples must be positive")?;

    let n = elements.len();
    if n == 0 {
        return Ok(SampledCheck {
            trials: 0,
            holds: true,
            witness: None,
        });
    }

    for trial in 1..=samples {
        let (i, j, k) = draw(rng, n);
        if !associates(&elements[i], &elements[j], &elements[k], op)? {
            debug!(op = op.symbol(), i, j, k, trial, "sampled associativity violated");
            return Ok(SampledCheck {
                trials: trial,
                holds: false,
                witness: Some((i, j, k)),
            });
        }
    }

    Ok(SampledCheck {
        trials: samples,
        holds: true,
        witness: None,
    })
}

/// Test both distributive laws on `samples` random triples
///
/// Stops early only once both laws have failed.
pub fn sample_distributivity<T, A, M, R>(
    elements: &[T],
    add: &A,
    mul: &M,
    samples: usize,
    rng: &mut R,
) -> Result<DistributivityResult>
where
    T: Eq,
    A: BinaryOperation<T> + ?Sized,
    M: BinaryOperation<T> + ?Sized,
    R: Rng + ?Sized,
{
    validate::parameter(samples > 0, "sample_distributivity", "samples must be positive")?;

    let mut result = DistributivityResult::holding();
    let n = elements.len();
    if n == 0 {
        return Ok(result);
    }

    for _ in 0..samples {
        let (i, j, k) = draw(rng, n);
        let triple = (&elements[i], &elements[j], &elements[k]);
        if result.record((i, j, k), triple, add, mul)? {
            break;
        }
    }
    Ok(result)
}

/// [`check_group_axioms`](crate::check_group_axioms) with associativity sampled.
///
/// Closure, identity, inverses and commutativity stay exhaustive at O(n²).
pub fn check_group_axioms_sampled<T, O, R>(
    elements: &[T],
    op: &O,
    samples: usize,
    rng: &mut R,
) -> Result<AxiomCheckResult<T>>
where
    T: Clone + Eq + Hash,
    O: BinaryOperation<T> + ?Sized,
    R: Rng + ?Sized,
{
    let associativity =
        sample_associativity(elements, op, samples, rng).with_context("check_group_axioms_sampled")?;
    assemble(elements, op, associativity.witness)
}
