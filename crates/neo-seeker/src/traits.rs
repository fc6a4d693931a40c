//! Record interface consumed by the filters.
//!
//! Filters never see a concrete record type. Anything that can answer the
//! questions in [`Approach`] and [`Body`] can be filtered, whether it is the
//! bundled [`CloseApproach`](crate::CloseApproach) model or a caller's own
//! database row.

use chrono::NaiveDateTime;

/// A single close approach of a near-Earth body to Earth.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveDateTime};
/// use neo_seeker::{Approach, Body};
///
/// struct Rock;
///
/// impl Body for Rock {
///     fn diameter(&self) -> Option<f64> {
///         Some(0.3)
///     }
///
///     fn hazardous(&self) -> bool {
///         false
///     }
/// }
///
/// struct Pass {
///     time: NaiveDateTime,
///     rock: Rock,
/// }
///
/// impl Approach for Pass {
///     fn time(&self) -> NaiveDateTime {
///         self.time
///     }
///
///     fn distance(&self) -> f64 {
///         0.05
///     }
///
///     fn velocity(&self) -> f64 {
///         12.5
///     }
///
///     fn neo(&self) -> &dyn Body {
///         &self.rock
///     }
/// }
///
/// let time = NaiveDate::from_ymd_opt(2020, 1, 1)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
/// let pass = Pass { time, rock: Rock };
/// assert_eq!(pass.neo().diameter(), Some(0.3));
/// ```
pub trait Approach {
    /// Time of closest approach, in UTC.
    fn time(&self) -> NaiveDateTime;

    /// Nominal approach distance, in astronomical units.
    fn distance(&self) -> f64;

    /// Velocity relative to Earth, in kilometers per second.
    fn velocity(&self) -> f64;

    /// The body making this approach.
    fn neo(&self) -> &dyn Body;
}

/// Static attributes of a near-Earth body.
pub trait Body {
    /// Diameter in kilometers, or `None` when it has not been measured.
    fn diameter(&self) -> Option<f64>;

    /// Whether the body is classified as potentially hazardous.
    fn hazardous(&self) -> bool;
}

impl<A: Approach + ?Sized> Approach for &A {
    fn time(&self) -> NaiveDateTime {
        (**self).time()
    }

    fn distance(&self) -> f64 {
        (**self).distance()
    }

    fn velocity(&self) -> f64 {
        (**self).velocity()
    }

    fn neo(&self) -> &dyn Body {
        (**self).neo()
    }
}
