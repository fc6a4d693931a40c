//! Conjunctions of attribute filters.
//!
//! A [`FilterSet`] holds the filters built for one query and accepts a close
//! approach only if every filter accepts it. An empty set accepts everything.

use std::fmt;

use tracing::trace;

use crate::error::Result;
use crate::filter::AttributeFilter;
use crate::traits::Approach;

/// An ordered collection of filters combined with logical AND.
///
/// Order is kept for display purposes only; it never changes which approaches
/// match.
///
/// # Example
///
/// ```
/// use neo_seeker::{DistanceMaxFilter, DistanceMinFilter, FilterSet};
///
/// let filters = FilterSet::new()
///     .with_filter(DistanceMinFilter::new(0.1))
///     .with_filter(DistanceMaxFilter::new(0.5));
///
/// assert_eq!(filters.len(), 2);
/// assert_eq!(
///     filters.to_string(),
///     "DistanceMinFilter(op=ge, value=0.1), DistanceMaxFilter(op=le, value=0.5)"
/// );
/// ```
#[derive(Debug, Default)]
pub struct FilterSet {
    filters: Vec<Box<dyn AttributeFilter>>,
}

impl FilterSet {
    /// Creates an empty set, which matches every approach.
    pub fn new() -> Self {
        FilterSet::default()
    }

    /// Adds a filter (builder pattern).
    pub fn with_filter(mut self, filter: impl AttributeFilter + 'static) -> Self {
        self.push(filter);
        self
    }

    /// Adds a filter.
    pub fn push(&mut self, filter: impl AttributeFilter + 'static) {
        self.filters.push(Box::new(filter));
    }

    /// Adds an already boxed filter.
    pub fn push_boxed(&mut self, filter: Box<dyn AttributeFilter>) {
        self.filters.push(filter);
    }

    /// Returns the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if the set holds no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterates over the filters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn AttributeFilter + 'static)> + '_ {
        self.filters.iter().map(|f| f.as_ref())
    }

    /// Tests whether an approach satisfies every filter.
    ///
    /// Stops at the first filter that rejects the approach or fails.
    pub fn matches(&self, approach: &dyn Approach) -> Result<bool> {
        for filter in &self.filters {
            if !filter.call(approach)? {
                trace!(filter = %filter.describe(), "approach rejected");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Lazily selects the approaches that satisfy every filter.
    ///
    /// Items are pulled from `items` only as the returned iterator is
    /// advanced, so it composes with [`limit`](crate::limit). An evaluation
    /// error is yielded in place of the item that caused it.
    pub fn select<I>(&self, items: I) -> Select<'_, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: Approach,
    {
        Select {
            filters: self,
            items: items.into_iter(),
        }
    }
}

impl fmt::Display for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", filter.describe())?;
        }
        Ok(())
    }
}

impl<F: AttributeFilter + 'static> Extend<F> for FilterSet {
    fn extend<T: IntoIterator<Item = F>>(&mut self, iter: T) {
        for filter in iter {
            self.push(filter);
        }
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a Box<dyn AttributeFilter>;
    type IntoIter = std::slice::Iter<'a, Box<dyn AttributeFilter>>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

/// Iterator returned by [`FilterSet::select`].
#[derive(Debug)]
pub struct Select<'f, I> {
    filters: &'f FilterSet,
    items: I,
}

impl<I> Iterator for Select<'_, I>
where
    I: Iterator,
    I::Item: Approach,
{
    type Item = Result<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.items.by_ref() {
            match self.filters.matches(&item) {
                Ok(true) => return Some(Ok(item)),
                Ok(false) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}
