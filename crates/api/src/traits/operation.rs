//! Binary operations over a finite carrier set

use crate::error::Result;
use core::fmt;

/// A binary operation `T × T → T` that may fail
///
/// The axiom checker only ever calls [`apply`](Self::apply); failures are
/// propagated to its caller unchanged.
pub trait BinaryOperation<T> {
    /// Apply the operation to `a` and `b`
    fn apply(&self, a: &T, b: &T) -> Result<T>;

    /// Symbol used in diagnostics
    fn symbol(&self) -> &'static str {
        "∘"
    }
}

impl<T, O: BinaryOperation<T> + ?Sized> BinaryOperation<T> for &O {
    fn apply(&self, a: &T, b: &T) -> Result<T> {
        (**self).apply(a, b)
    }

    fn symbol(&self) -> &'static str {
        (**self).symbol()
    }
}

/// Adapter turning a closure into a [`BinaryOperation`]
#[derive(Clone, Copy)]
pub struct FnOperation<F> {
    symbol: &'static str,
    f: F,
}

impl<F> FnOperation<F> {
    /// Wrap `f`, reporting it as `symbol` in diagnostics
    pub fn new(symbol: &'static str, f: F) -> Self {
        Self { symbol, f }
    }
}

impl<T, F> BinaryOperation<T> for FnOperation<F>
where
    F: Fn(&T, &T) -> Result<T>,
{
    fn apply(&self, a: &T, b: &T) -> Result<T> {
        (self.f)(a, b)
    }

    fn symbol(&self) -> &'static str {
        self.symbol
    }
}

impl<F> fmt::Debug for FnOperation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOperation")
            .field("symbol", &self.symbol)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_fn_operation() {
        let max = FnOperation::new("max", |a: &u8, b: &u8| -> Result<u8> { Ok(*a.max(b)) });
        assert_eq!(max.apply(&3, &9), Ok(9));
        assert_eq!(max.symbol(), "max");

        // Works through a reference too
        let by_ref = &max;
        assert_eq!(by_ref.apply(&4, &1), Ok(4));
    }

    #[test]
    fn test_fn_operation_propagates_error() {
        let div = FnOperation::new("/", |a: &u32, b: &u32| {
            if *b == 0 {
                Err(Error::DivisionByZero { modulus: 0 })
            } else {
                Ok(a / b)
            }
        });
        assert_eq!(div.apply(&8, &2), Ok(4));
        assert!(div.apply(&8, &0).is_err());
    }
}
