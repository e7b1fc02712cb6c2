//! Distributive laws linking two operations

use gfcheck_api::{BinaryOperation, Result};
use tracing::debug;

/// Outcome of [`check_distributivity`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct DistributivityResult {
    /// `a*(b+c) == a*b + a*c` held for every triple examined
    pub left: bool,
    /// `(b+c)*a == b*a + c*a` held for every triple examined
    pub right: bool,
    /// First `(a, b, c)` index triple breaking the left law
    pub left_witness: Option<(usize, usize, usize)>,
    /// First `(a, b, c)` index triple breaking the right law
    pub right_witness: Option<(usize, usize, usize)>,
}

impl DistributivityResult {
    pub(crate) fn holding() -> Self {
        Self {
            left: true,
            right: true,
            left_witness: None,
            right_witness: None,
        }
    }

    /// Both laws hold
    pub fn holds(&self) -> bool {
        self.left && self.right
    }

    /// Fold one triple into the result. Returns true once both laws have failed.
    pub(crate) fn record<T, A, M>(
        &mut self,
        (i, j, k): (usize, usize, usize),
        (a, b, c): (&T, &T, &T),
        add: &A,
        mul: &M,
    ) -> Result<bool>
    where
        T: Eq,
        A: BinaryOperation<T> + ?Sized,
        M: BinaryOperation<T> + ?Sized,
    {
        let sum = add.apply(b, c)?;

        if self.left && mul.apply(a, &sum)? != add.apply(&mul.apply(a, b)?, &mul.apply(a, c)?)? {
            debug!(add = add.symbol(), mul = mul.symbol(), i, j, k, "left distributivity violated");
            self.left = false;
            self.left_witness = Some((i, j, k));
        }

        if self.right && mul.apply(&sum, a)? != add.apply(&mul.apply(b, a)?, &mul.apply(c, a)?)? {
            debug!(add = add.symbol(), mul = mul.symbol(), i, j, k, "right distributivity violated");
            self.right = false;
            self.right_witness = Some((i, j, k));
        }

        Ok(!self.left && !self.right)
    }
}

/// Verify both distributive laws of `mul` over `add` for every triple.
///
/// The two laws are tracked independently; the scan only stops early once
/// both have failed.
pub fn check_distributivity<T, A, M>(elements: &[T], add: &A, mul: &M) -> Result<DistributivityResult>
where
    T: Eq,
    A: BinaryOperation<T> + ?Sized,
    M: BinaryOperation<T> + ?Sized,
{
    let mut result = DistributivityResult::holding();

    for (i, a) in elements.iter().enumerate() {
        for (j, b) in elements.iter().enumerate() {
            for (k, c) in elements.iter().enumerate() {
                if result.record((i, j, k), (a, b, c), add, mul)? {
                    return Ok(result);
                }
            }
        }
    }
    Ok(result)
}
