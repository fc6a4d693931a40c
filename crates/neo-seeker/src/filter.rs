//! Attribute filters for close approaches.
//!
//! An [`AttributeFilter`] is a single predicate: it reads one attribute off a
//! close approach and compares it to a fixed reference value with an [`Op`].
//! Evaluating `filter.call(approach)` computes `attribute OP value`.
//!
//! Ten concrete filters cover the supported criteria. Each one fixes its
//! operator and accessor; the only thing a caller chooses is the reference
//! value.
//!
//! | Filter | Operator | Attribute |
//! |--------|----------|-----------|
//! | [`DateFilter`] | `Eq` | approach date |
//! | [`StartDateFilter`] | `Gte` | approach date |
//! | [`EndDateFilter`] | `Lte` | approach date |
//! | [`DistanceMinFilter`] | `Gte` | distance |
//! | [`DistanceMaxFilter`] | `Lte` | distance |
//! | [`VelocityMinFilter`] | `Gte` | velocity |
//! | [`VelocityMaxFilter`] | `Lte` | velocity |
//! | [`DiameterMinFilter`] | `Gte` | body diameter |
//! | [`DiameterMaxFilter`] | `Lte` | body diameter |
//! | [`HazardousFilter`] | `Eq` | body hazard flag |

use std::fmt;

use chrono::NaiveDate;

use crate::error::{FilterError, Result};
use crate::op::Op;
use crate::traits::Approach;
use crate::value::Value;

/// Reads one attribute of interest from a close approach.
pub type Accessor = fn(&dyn Approach) -> Value;

/// A predicate comparing one attribute of a close approach to a reference value.
///
/// Implementors supply the operator, the reference value and the attribute
/// accessor. A filter that does not override [`accessor`](Self::accessor)
/// cannot be evaluated: [`call`](Self::call) returns
/// [`FilterError::UnsupportedCriterion`].
///
/// # Example
///
/// ```
/// use neo_seeker::{AttributeFilter, DistanceMaxFilter, Op, Value};
///
/// let filter = DistanceMaxFilter::new(0.5);
/// assert_eq!(filter.op(), Op::Lte);
/// assert_eq!(filter.value(), &Value::Number(0.5));
/// assert_eq!(filter.describe(), "DistanceMaxFilter(op=le, value=0.5)");
/// ```
pub trait AttributeFilter: fmt::Debug + Send + Sync {
    /// Name of this filter, used in errors and descriptions.
    fn name(&self) -> &'static str;

    /// The comparison applied as `attribute OP value`.
    fn op(&self) -> Op;

    /// The reference value on the right-hand side of the comparison.
    fn value(&self) -> &Value;

    /// The function reading the attribute of interest from an approach.
    fn accessor(&self) -> Option<Accessor> {
        None
    }

    /// Evaluates this filter against a close approach.
    fn call(&self, approach: &dyn Approach) -> Result<bool> {
        let get = self
            .accessor()
            .ok_or_else(|| FilterError::UnsupportedCriterion {
                criterion: self.name(),
            })?;
        Ok(self.op().eval(&get(approach), self.value()))
    }

    /// Human-readable form, e.g. `DateFilter(op=eq, value=2020-01-01)`.
    fn describe(&self) -> String {
        format!("{}(op={}, value={})", self.name(), self.op(), self.value())
    }
}

fn approach_date(approach: &dyn Approach) -> Value {
    Value::Date(approach.time().date())
}

fn approach_distance(approach: &dyn Approach) -> Value {
    Value::Number(approach.distance())
}

fn approach_velocity(approach: &dyn Approach) -> Value {
    Value::Number(approach.velocity())
}

fn neo_diameter(approach: &dyn Approach) -> Value {
    Value::from(approach.neo().diameter())
}

fn neo_hazardous(approach: &dyn Approach) -> Value {
    Value::Bool(approach.neo().hazardous())
}

macro_rules! attribute_filters {
    ($(
        $(#[$meta:meta])*
        $name:ident($ty:ty) => $op:expr, $accessor:ident;
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq)]
            pub struct $name {
                value: Value,
            }

            impl $name {
                /// Creates the filter with its reference value.
                pub fn new(value: $ty) -> Self {
                    $name {
                        value: Value::from(value),
                    }
                }
            }

            impl AttributeFilter for $name {
                fn name(&self) -> &'static str {
                    stringify!($name)
                }

                fn op(&self) -> Op {
                    $op
                }

                fn value(&self) -> &Value {
                    &self.value
                }

                fn accessor(&self) -> Option<Accessor> {
                    Some($accessor as Accessor)
                }
            }
        )*
    };
}

attribute_filters! {
    /// Matches approaches occurring on the given date.
    DateFilter(NaiveDate) => Op::Eq, approach_date;
    /// Matches approaches occurring on or after the given date.
    StartDateFilter(NaiveDate) => Op::Gte, approach_date;
    /// Matches approaches occurring on or before the given date.
    EndDateFilter(NaiveDate) => Op::Lte, approach_date;
    /// Matches approaches at least this far from Earth, in au.
    DistanceMinFilter(f64) => Op::Gte, approach_distance;
    /// Matches approaches at most this far from Earth, in au.
    DistanceMaxFilter(f64) => Op::Lte, approach_distance;
    /// Matches approaches at least this fast, in km/s.
    VelocityMinFilter(f64) => Op::Gte, approach_velocity;
    /// Matches approaches at most this fast, in km/s.
    VelocityMaxFilter(f64) => Op::Lte, approach_velocity;
    /// Matches approaches of bodies at least this wide, in km.
    ///
    /// Bodies with an unknown diameter never match.
    DiameterMinFilter(f64) => Op::Gte, neo_diameter;
    /// Matches approaches of bodies at most this wide, in km.
    ///
    /// Bodies with an unknown diameter never match.
    DiameterMaxFilter(f64) => Op::Lte, neo_diameter;
    /// Matches approaches of bodies with the given hazard classification.
    HazardousFilter(bool) => Op::Eq, neo_hazardous;
}
