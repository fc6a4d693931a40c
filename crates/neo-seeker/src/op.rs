//! Comparison operators for attribute filters.
//!
//! The [`Op`] enum defines the three comparisons a filter can apply between
//! an attribute read from a close approach and its reference value.

use std::cmp::Ordering;

use crate::value::Value;

/// Comparison operator for an attribute filter.
///
/// The attribute extracted from the record is always the left-hand side and
/// the filter's reference value the right-hand side: `Op::Lte` with a
/// reference of `0.5` evaluates `attribute <= 0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal (exact match).
    Eq,
    /// Less than or equal.
    Lte,
    /// Greater than or equal.
    Gte,
}

impl Op {
    /// Evaluates a comparison given an ordering result.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Lte => ordering != Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
        }
    }

    /// Evaluates `attribute OP reference`.
    ///
    /// Values that cannot be ordered against each other never match: an
    /// unknown attribute, a NaN, or a type mismatch all yield `false`.
    pub fn eval(self, attribute: &Value, reference: &Value) -> bool {
        match attribute.compare(reference) {
            Some(ordering) => self.eval_ordering(ordering),
            None => false,
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Lte => "le",
            Op::Gte => "ge",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
