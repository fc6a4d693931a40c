//! Lazy truncation of result streams.
//!
//! [`limit`] caps a stream at its first `n` items. Both "no limit" (`None`)
//! and a limit of zero mean "unlimited": the stream passes through untouched.

use std::iter::FusedIterator;

use tracing::warn;

use crate::error::{FilterError, Result};

/// Produces at most the first `n` items of `iter`.
///
/// `None` and `Some(0)` leave the stream unlimited. Once `n` items have been
/// produced the source is not pulled again, so expensive upstream work (such
/// as [`FilterSet::select`](crate::FilterSet::select)) stops early.
///
/// # Example
///
/// ```
/// use neo_seeker::limit;
///
/// let first: Vec<_> = limit(1..=10, Some(3)).collect();
/// assert_eq!(first, vec![1, 2, 3]);
///
/// let all: Vec<_> = limit(1..=4, Some(0)).collect();
/// assert_eq!(all, vec![1, 2, 3, 4]);
/// ```
pub fn limit<I: IntoIterator>(iter: I, n: Option<usize>) -> Limit<I::IntoIter> {
    Limit {
        iter: iter.into_iter(),
        remaining: n.filter(|&n| n > 0),
    }
}

/// Converts a signed result count into a limit for [`limit`].
///
/// `0` maps to `None` (unlimited). Negative counts are rejected.
///
/// ```
/// use neo_seeker::{checked_limit, FilterError};
///
/// assert_eq!(checked_limit(5).unwrap(), Some(5));
/// assert_eq!(checked_limit(0).unwrap(), None);
/// assert!(matches!(checked_limit(-1), Err(FilterError::NegativeLimit(-1))));
/// ```
pub fn checked_limit(n: i64) -> Result<Option<usize>> {
    match usize::try_from(n) {
        Ok(0) => Ok(None),
        Ok(n) => Ok(Some(n)),
        Err(_) if n < 0 => {
            warn!(limit = n, "rejecting negative result limit");
            Err(FilterError::NegativeLimit(n))
        }
        // Larger than the address space: no collection can exceed it.
        Err(_) => Ok(None),
    }
}

/// Iterator returned by [`limit`].
#[derive(Debug, Clone)]
pub struct Limit<I> {
    iter: I,
    remaining: Option<usize>,
}

impl<I> Limit<I> {
    /// Items still allowed through, or `None` when unlimited.
    pub fn remaining(&self) -> Option<usize> {
        self.remaining
    }
}

impl<I: Iterator> Iterator for Limit<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.remaining {
            None => self.iter.next(),
            Some(0) => None,
            Some(ref mut n) => {
                *n -= 1;
                self.iter.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        match self.remaining {
            None => (lower, upper),
            Some(n) => (
                lower.min(n),
                Some(upper.map_or(n, |upper| upper.min(n))),
            ),
        }
    }
}

impl<I: FusedIterator> FusedIterator for Limit<I> {}

/// Extension adding [`limit_to`](LimitExt::limit_to) to every iterator.
pub trait LimitExt: Iterator + Sized {
    /// Same as [`limit(self, n)`](limit).
    fn limit_to(self, n: Option<usize>) -> Limit<Self> {
        limit(self, n)
    }
}

impl<I: Iterator> LimitExt for I {}
