//! Runtime value types for attribute comparison.
//!
//! A [`Value`] is what a filter's accessor reads off a close approach, and
//! also what the filter stores as its reference value.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

/// Attribute value extracted from a close approach.
///
/// Equality is structural, so `Value::None == Value::None`. Ordering is only
/// available through [`Value::compare`], which treats unknown values, NaN and
/// mismatched kinds as unordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Calendar date.
    Date(NaiveDate),
    /// Real number (distance, velocity, diameter).
    Number(f64),
    /// Boolean flag.
    Bool(bool),
    /// Attribute unknown, such as a body with no measured diameter.
    None,
}

impl Value {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Extracts the date, if present.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Extracts the number, if present.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Compares two values of the same kind.
    ///
    /// Returns `None` for mismatched kinds, for `Value::None` on either side,
    /// and for NaN numbers.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Date(d) => write!(f, "{}", d),
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::None => write!(f, "none"),
        }
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Option<f64>> for Value {
    fn from(n: Option<f64>) -> Self {
        n.map_or(Value::None, Value::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_extractors() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(Value::Date(date).as_date(), Some(date));
        assert_eq!(Value::Number(1.5).as_number(), Some(1.5));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));

        assert_eq!(Value::Number(1.5).as_date(), None);
        assert_eq!(Value::Bool(true).as_number(), None);
        assert_eq!(Value::None.as_bool(), None);
        assert!(Value::None.is_none());
    }

    #[test]
    fn compare_same_kind() {
        assert_eq!(
            Value::Number(1.0).compare(&Value::Number(2.0)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Bool(true).compare(&Value::Bool(true)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn compare_unorderable() {
        assert_eq!(Value::Number(f64::NAN).compare(&Value::Number(1.0)), None);
        assert_eq!(Value::None.compare(&Value::None), None);
        assert_eq!(Value::Bool(false).compare(&Value::Number(0.0)), None);
    }

    #[test]
    fn equality_is_structural_and_independent_of_compare() {
        assert_eq!(Value::None, Value::None);
        assert_eq!(Value::None.compare(&Value::None), None);

        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert_eq!(Value::Number(f64::NAN).compare(&Value::Number(f64::NAN)), None);

        assert_ne!(Value::Bool(false), Value::Number(0.0));
        assert_eq!(Value::Bool(false).compare(&Value::Number(0.0)), None);

        assert_eq!(Value::Number(2.0), Value::Number(2.0));
        assert_eq!(
            Value::Number(2.0).compare(&Value::Number(2.0)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn optional_number_conversion() {
        assert_eq!(Value::from(Some(0.25)), Value::Number(0.25));
        assert_eq!(Value::from(None::<f64>), Value::None);
    }

    #[test]
    fn display() {
        let date = NaiveDate::from_ymd_opt(2020, 3, 4).unwrap();
        assert_eq!(Value::Date(date).to_string(), "2020-03-04");
        assert_eq!(Value::Number(0.6).to_string(), "0.6");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::None.to_string(), "none");
    }
}
