//! Field operations as [`BinaryOperation`] values

use crate::element::FieldElement;
use gfcheck_api::{BinaryOperation, Result};

/// `(a, b) ↦ a + b`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldAddition;

/// `(a, b) ↦ a · b`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldMultiplication;

/// `(a, b) ↦ a − b`; neither associative nor commutative for `p > 2`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldSubtraction;

impl BinaryOperation<FieldElement> for FieldAddition {
    fn apply(&self, a: &FieldElement, b: &FieldElement) -> Result<FieldElement> {
        a.add(b)
    }

    fn symbol(&self) -> &'static str {
        "+"
    }
}

impl BinaryOperation<FieldElement> for FieldMultiplication {
    fn apply(&self, a: &FieldElement, b: &FieldElement) -> Result<FieldElement> {
        a.mul(b)
    }

    fn symbol(&self) -> &'static str {
        "*"
    }
}

impl BinaryOperation<FieldElement> for FieldSubtraction {
    fn apply(&self, a: &FieldElement, b: &FieldElement) -> Result<FieldElement> {
        a.sub(b)
    }

    fn symbol(&self) -> &'static str {
        "-"
    }
}
