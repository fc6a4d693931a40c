//! Neo Seeker - Composable filters for near-Earth object close approaches.
//!
//! Neo Seeker turns optional search criteria into a set of independent
//! predicates and evaluates them against close-approach records. It provides:
//!
//! - Ten attribute filters: date, date range, distance, velocity, diameter, hazard
//! - A factory that builds only the filters whose criteria are present
//! - AND-composition with lazy selection over any iterator of records
//! - A lazy limiter where zero and "unspecified" both mean unlimited
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use neo_seeker::{create_filters, limit, CloseApproach, Criteria, NearEarthObject};
//!
//! let neo = Arc::new(NearEarthObject::new("433").with_name("Eros").with_diameter(16.84));
//! let at = |d| NaiveDate::from_ymd_opt(2020, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//! let approaches = vec![
//!     CloseApproach::new(neo.clone(), at(1), 0.2, 5.0),
//!     CloseApproach::new(neo.clone(), at(2), 0.6, 6.0),
//!     CloseApproach::new(neo.clone(), at(3), 1.1, 7.0),
//! ];
//!
//! let criteria = Criteria::new().with_distance_max(0.6);
//! let filters = create_filters(&criteria);
//!
//! let first: Vec<_> = limit(filters.select(&approaches), Some(1))
//!     .collect::<neo_seeker::Result<_>>()
//!     .unwrap();
//! assert_eq!(first.len(), 1);
//! assert_eq!(first[0].distance, 0.2);
//! ```
//!
//! # Filter Semantics
//!
//! A [`FilterSet`] accepts an approach only if every filter in it does:
//!
//! ```text
//! match = filter_1(approach) ∧ filter_2(approach) ∧ … ∧ filter_n(approach)
//! ```
//!
//! An empty set accepts every approach. Bounds are inclusive. Bodies with an
//! unknown diameter never satisfy a diameter bound.
//!
//! # Records
//!
//! Filters read records through the [`Approach`] and [`Body`] traits, so any
//! storage type can be filtered. [`CloseApproach`] and [`NearEarthObject`] are
//! ready-made implementations.

mod criteria;
mod error;
mod filter;
mod limit;
mod model;
mod op;
mod set;
mod traits;
mod value;

// Re-export public API
pub use criteria::{create_filters, Criteria};
pub use error::{FilterError, Result};
pub use filter::{
    Accessor, AttributeFilter, DateFilter, DiameterMaxFilter, DiameterMinFilter,
    DistanceMaxFilter, DistanceMinFilter, EndDateFilter, HazardousFilter, StartDateFilter,
    VelocityMaxFilter, VelocityMinFilter,
};
pub use limit::{checked_limit, limit, Limit, LimitExt};
pub use model::{CloseApproach, NearEarthObject};
pub use op::Op;
pub use set::{FilterSet, Select};
pub use traits::{Approach, Body};
pub use value::Value;
