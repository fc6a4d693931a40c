//! User search criteria and the filter factory.
//!
//! [`Criteria`] gathers the ten optional constraints a caller may supply.
//! [`create_filters`] turns whichever of them are present into a
//! [`FilterSet`].
//!
//! Presence is always decided by `Option`, never by the value itself: a
//! minimum distance of `0.0` is a real bound, and `hazardous: Some(false)`
//! selects only non-hazardous bodies, which is different from leaving the
//! hazard criterion out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{FilterError, Result};
use crate::filter::{
    DateFilter, DiameterMaxFilter, DiameterMinFilter, DistanceMaxFilter, DistanceMinFilter,
    EndDateFilter, HazardousFilter, StartDateFilter, VelocityMaxFilter, VelocityMinFilter,
};
use crate::set::FilterSet;

/// Optional search criteria for close approaches.
///
/// Every field left as `None` imposes no constraint. Dates are calendar dates
/// and are compared against the date part of an approach's time.
///
/// Criteria can be written directly, built with the `with_*` setters, or
/// loaded from a JSON or YAML document:
///
/// ```
/// use neo_seeker::Criteria;
///
/// let criteria = Criteria::from_yaml("
/// start_date: 2020-01-01
/// distance_max: 0.1
/// hazardous: false
/// ").unwrap();
///
/// assert_eq!(criteria.distance_max, Some(0.1));
/// assert_eq!(criteria.hazardous, Some(false));
/// assert_eq!(criteria.velocity_min, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Criteria {
    /// Approach occurs on exactly this date.
    pub date: Option<NaiveDate>,
    /// Approach occurs on or after this date.
    pub start_date: Option<NaiveDate>,
    /// Approach occurs on or before this date.
    pub end_date: Option<NaiveDate>,
    /// Minimum nominal approach distance, in au.
    pub distance_min: Option<f64>,
    /// Maximum nominal approach distance, in au.
    pub distance_max: Option<f64>,
    /// Minimum relative velocity, in km/s.
    pub velocity_min: Option<f64>,
    /// Maximum relative velocity, in km/s.
    pub velocity_max: Option<f64>,
    /// Minimum body diameter, in km.
    pub diameter_min: Option<f64>,
    /// Maximum body diameter, in km.
    pub diameter_max: Option<f64>,
    /// Required hazard classification of the body.
    pub hazardous: Option<bool>,
}

impl Criteria {
    /// Creates criteria with nothing specified.
    pub fn new() -> Self {
        Criteria::default()
    }

    /// Parses criteria from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses criteria from a YAML mapping.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Requires approaches on this calendar date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Requires approaches on or after this date.
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Requires approaches on or before this date.
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Requires approaches at least this far away, in au.
    pub fn with_distance_min(mut self, distance: f64) -> Self {
        self.distance_min = Some(distance);
        self
    }

    /// Requires approaches at most this far away, in au.
    pub fn with_distance_max(mut self, distance: f64) -> Self {
        self.distance_max = Some(distance);
        self
    }

    /// Requires approaches at least this fast, in km/s.
    pub fn with_velocity_min(mut self, velocity: f64) -> Self {
        self.velocity_min = Some(velocity);
        self
    }

    /// Requires approaches at most this fast, in km/s.
    pub fn with_velocity_max(mut self, velocity: f64) -> Self {
        self.velocity_max = Some(velocity);
        self
    }

    /// Requires bodies at least this wide, in km.
    pub fn with_diameter_min(mut self, diameter: f64) -> Self {
        self.diameter_min = Some(diameter);
        self
    }

    /// Requires bodies at most this wide, in km.
    pub fn with_diameter_max(mut self, diameter: f64) -> Self {
        self.diameter_max = Some(diameter);
        self
    }

    /// Requires bodies with this hazard classification; `false` keeps only non-hazardous ones.
    pub fn with_hazardous(mut self, hazardous: bool) -> Self {
        self.hazardous = Some(hazardous);
        self
    }

    /// Returns `true` if no criterion is specified.
    pub fn is_empty(&self) -> bool {
        *self == Criteria::default()
    }

    /// Checks that every min/max pair and the date range are not inverted.
    ///
    /// [`create_filters`] does not call this; inverted bounds there simply
    /// match nothing. Callers that want to report the mistake can validate
    /// first.
    pub fn validate(&self) -> Result<()> {
        check_range("date", self.start_date, self.end_date)?;
        check_range("distance", self.distance_min, self.distance_max)?;
        check_range("velocity", self.velocity_min, self.velocity_max)?;
        check_range("diameter", self.diameter_min, self.diameter_max)?;
        Ok(())
    }
}

fn check_range<T>(criterion: &'static str, min: Option<T>, max: Option<T>) -> Result<()>
where
    T: PartialOrd + ToString,
{
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(FilterError::InvalidRange {
            criterion,
            min: min.to_string(),
            max: max.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Builds the filters for every criterion that is present.
///
/// Filters are added in a fixed order: date, start date, end date, distance
/// min/max, velocity min/max, diameter min/max, hazardous. The resulting set
/// accepts an approach only if all filters do; with no criteria it accepts
/// everything.
///
/// # Example
///
/// ```
/// use neo_seeker::{create_filters, Criteria};
///
/// let filters = create_filters(&Criteria::new().with_distance_min(0.0).with_hazardous(false));
/// assert_eq!(filters.len(), 2);
/// assert_eq!(
///     filters.to_string(),
///     "DistanceMinFilter(op=ge, value=0), HazardousFilter(op=eq, value=false)"
/// );
///
/// assert!(create_filters(&Criteria::new()).is_empty());
/// ```
pub fn create_filters(criteria: &Criteria) -> FilterSet {
    let mut filters = FilterSet::new();

    if let Some(date) = criteria.date {
        filters.push(DateFilter::new(date));
    }
    if let Some(date) = criteria.start_date {
        filters.push(StartDateFilter::new(date));
    }
    if let Some(date) = criteria.end_date {
        filters.push(EndDateFilter::new(date));
    }
    if let Some(distance) = criteria.distance_min {
        filters.push(DistanceMinFilter::new(distance));
    }
    if let Some(distance) = criteria.distance_max {
        filters.push(DistanceMaxFilter::new(distance));
    }
    if let Some(velocity) = criteria.velocity_min {
        filters.push(VelocityMinFilter::new(velocity));
    }
    if let Some(velocity) = criteria.velocity_max {
        filters.push(VelocityMaxFilter::new(velocity));
    }
    if let Some(diameter) = criteria.diameter_min {
        filters.push(DiameterMinFilter::new(diameter));
    }
    if let Some(diameter) = criteria.diameter_max {
        filters.push(DiameterMaxFilter::new(diameter));
    }
    if let Some(hazardous) = criteria.hazardous {
        filters.push(HazardousFilter::new(hazardous));
    }

    debug!(count = filters.len(), "created close approach filters");
    for filter in filters.iter() {
        trace!(filter = %filter.describe(), "added filter");
    }

    filters
}
