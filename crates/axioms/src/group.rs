//! Brute-force group axiom checks
//!
//! Every scan walks indices in lexicographic order and stops at its first
//! violation, so witnesses are deterministic for a given input sequence.
//! Scans are independent of one another: a closure failure does not skip the
//! associativity scan, and so on.

use std::collections::HashSet;
use std::hash::Hash;

use gfcheck_api::{validate, BinaryOperation, Result};
use tracing::debug;

/// Outcome of [`check_group_axioms`]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct AxiomCheckResult<T> {
    /// `op(a, b)` lands back in the set for every pair
    pub closure: bool,
    /// `op(a, op(b, c)) == op(op(a, b), c)` for every triple
    pub associativity: bool,
    /// First two-sided identity in input order
    pub identity: Option<T>,
    /// Position of [`identity`](Self::identity) in the input
    pub identity_index: Option<usize>,
    /// Every element has a two-sided inverse; `false` without an identity
    pub inverses: bool,
    /// `op(a, b) == op(b, a)` for every pair
    pub commutativity: bool,
    /// First `(i, j)` whose product is outside the set
    pub closure_witness: Option<(usize, usize)>,
    /// First `(i, j, k)` that does not associate
    pub associativity_witness: Option<(usize, usize, usize)>,
    /// First `i` without an inverse
    pub inverse_witness: Option<usize>,
    /// First `(i, j)`, `i < j`, that does not commute
    pub commutativity_witness: Option<(usize, usize)>,
}

impl<T> AxiomCheckResult<T> {
    /// True if a two-sided identity was found
    pub fn identity_exists(&self) -> bool {
        self.identity.is_some()
    }

    /// Closure, associativity, identity and inverses all hold
    pub fn is_group(&self) -> bool {
        self.closure && self.associativity && self.identity_exists() && self.inverses
    }

    /// A group whose operation also commutes
    pub fn is_abelian_group(&self) -> bool {
        self.is_group() && self.commutativity
    }
}

/// Verify closure, associativity, identity, inverses and commutativity of
/// `op` over `elements`.
///
/// Costs O(n³) operation calls for associativity and O(n²) for the rest.
/// Errors from `op` are returned as-is; failed axioms are not errors.
pub fn check_group_axioms<T, O>(elements: &[T], op: &O) -> Result<AxiomCheckResult<T>>
where
    T: Clone + Eq + Hash,
    O: BinaryOperation<T> + ?Sized,
{
    let associativity_witness = find_associativity_violation(elements, op)?;
    assemble(elements, op, associativity_witness)
}

/// Build a result around an associativity verdict computed elsewhere
pub(crate) fn assemble<T, O>(
    elements: &[T],
    op: &O,
    associativity_witness: Option<(usize, usize, usize)>,
) -> Result<AxiomCheckResult<T>>
where
    T: Clone + Eq + Hash,
    O: BinaryOperation<T> + ?Sized,
{
    let closure_witness = find_closure_violation(elements, op)?;
    let identity_index = find_identity(elements, op)?;
    let inverse_witness = match identity_index {
        Some(e) => find_missing_inverse(elements, op, e)?,
        None => None,
    };
    let commutativity_witness = find_commutativity_violation(elements, op)?;

    Ok(AxiomCheckResult {
        closure: closure_witness.is_none(),
        associativity: associativity_witness.is_none(),
        identity: identity_index.map(|e| elements[e].clone()),
        identity_index,
        inverses: identity_index.is_some() && inverse_witness.is_none(),
        commutativity: commutativity_witness.is_none(),
        closure_witness,
        associativity_witness,
        inverse_witness,
        commutativity_witness,
    })
}

/// First pair whose product is not a member of `elements`
pub fn find_closure_violation<T, O>(elements: &[T], op: &O) -> Result<Option<(usize, usize)>>
where
    T: Eq + Hash,
    O: BinaryOperation<T> + ?Sized,
{
    let members: HashSet<&T> = elements.iter().collect();

    for (i, a) in elements.iter().enumerate() {
        for (j, b) in elements.iter().enumerate() {
            if !members.contains(&op.apply(a, b)?) {
                debug!(op = op.symbol(), i, j, "closure violated");
                return Ok(Some((i, j)));
            }
        }
    }
    Ok(None)
}

/// Evaluate both bracketings of `a ∘ b ∘ c`
pub(crate) fn associates<T, O>(a: &T, b: &T, c: &T, op: &O) -> Result<bool>
where
    T: Eq,
    O: BinaryOperation<T> + ?Sized,
{
    let left = op.apply(a, &op.apply(b, c)?)?;
    let right = op.apply(&op.apply(a, b)?, c)?;
    Ok(left == right)
}

/// First triple that does not associate
pub fn find_associativity_violation<T, O>(
    elements: &[T],
    op: &O,
) -> Result<Option<(usize, usize, usize)>>
where
    T: Eq,
    O: BinaryOperation<T> + ?Sized,
{
    for (i, a) in elements.iter().enumerate() {
        for (j, b) in elements.iter().enumerate() {
            for (k, c) in elements.iter().enumerate() {
                if !associates(a, b, c, op)? {
                    debug!(op = op.symbol(), i, j, k, "associativity violated");
                    return Ok(Some((i, j, k)));
                }
            }
        }
    }
    Ok(None)
}

/// Index of the first element acting as a two-sided identity
pub fn find_identity<T, O>(elements: &[T], op: &O) -> Result<Option<usize>>
where
    T: Eq,
    O: BinaryOperation<T> + ?Sized,
{
    'candidates: for (e, candidate) in elements.iter().enumerate() {
        for a in elements {
            if op.apply(candidate, a)? != *a || op.apply(a, candidate)? != *a {
                continue 'candidates;
            }
        }
        return Ok(Some(e));
    }
    debug!(op = op.symbol(), "no identity element");
    Ok(None)
}

/// First element with no two-sided inverse relative to `elements[identity]`
///
/// Fails with `InvalidParameter` when `identity` is out of range.
pub fn find_missing_inverse<T, O>(elements: &[T], op: &O, identity: usize) -> Result<Option<usize>>
where
    T: Eq,
    O: BinaryOperation<T> + ?Sized,
{
    validate::parameter(
        identity < elements.len(),
        "find_missing_inverse",
        "identity index out of range",
    )?;
    let e = &elements[identity];

    'outer: for (i, a) in elements.iter().enumerate() {
        for b in elements {
            if op.apply(a, b)? == *e && op.apply(b, a)? == *e {
                continue 'outer;
            }
        }
        debug!(op = op.symbol(), i, "element has no inverse");
        return Ok(Some(i));
    }
    Ok(None)
}

/// First pair `i < j` with `op(a_i, a_j) != op(a_j, a_i)`
pub fn find_commutativity_violation<T, O>(
    elements: &[T],
    op: &O,
) -> Result<Option<(usize, usize)>>
where
    T: Eq,
    O: BinaryOperation<T> + ?Sized,
{
    for (i, a) in elements.iter().enumerate() {
        for (j, b) in elements.iter().enumerate().skip(i + 1) {
            if op.apply(a, b)? != op.apply(b, a)? {
                debug!(op = op.symbol(), i, j, "commutativity violated");
                return Ok(Some((i, j)));
            }
        }
    }
    Ok(None)
}
