//! Reference record types.
//!
//! [`NearEarthObject`] and [`CloseApproach`] are plain data holders that
//! implement the [`Approach`] and [`Body`] interfaces. Callers with their own
//! storage types can ignore them.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::traits::{Approach, Body};

/// A near-Earth object and its static attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearEarthObject {
    /// Primary designation, e.g. `"433"`.
    pub designation: String,
    /// IAU name, if the body has one.
    #[serde(default)]
    pub name: Option<String>,
    /// Diameter in kilometers, if known.
    #[serde(default)]
    pub diameter: Option<f64>,
    /// Whether the body is potentially hazardous.
    #[serde(default)]
    pub hazardous: bool,
}

impl NearEarthObject {
    /// Creates a body with no name and unknown diameter.
    pub fn new(designation: impl Into<String>) -> Self {
        NearEarthObject {
            designation: designation.into(),
            name: None,
            diameter: None,
            hazardous: false,
        }
    }

    /// Sets the IAU name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the diameter in kilometers.
    pub fn with_diameter(mut self, diameter: f64) -> Self {
        self.diameter = Some(diameter);
        self
    }

    /// Sets the hazard classification.
    pub fn with_hazardous(mut self, hazardous: bool) -> Self {
        self.hazardous = hazardous;
        self
    }

    /// Designation followed by the name in parentheses, when there is one.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }
}

impl Body for NearEarthObject {
    fn diameter(&self) -> Option<f64> {
        self.diameter
    }

    fn hazardous(&self) -> bool {
        self.hazardous
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {}", self.fullname())?;
        match self.diameter {
            Some(d) => write!(f, " has a diameter of {:.3} km", d)?,
            None => write!(f, " has an unknown diameter")?,
        }
        if self.hazardous {
            write!(f, " and is potentially hazardous")
        } else {
            write!(f, " and is not potentially hazardous")
        }
    }
}

/// A single close approach of a [`NearEarthObject`].
///
/// The body is shared behind an `Arc` because one body typically has many
/// approaches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseApproach {
    /// Time of closest approach, in UTC.
    pub time: NaiveDateTime,
    /// Nominal approach distance, in astronomical units.
    pub distance: f64,
    /// Relative velocity, in kilometers per second.
    pub velocity: f64,
    /// The approaching body.
    pub neo: Arc<NearEarthObject>,
}

impl CloseApproach {
    /// Creates an approach of `neo`.
    pub fn new(
        neo: Arc<NearEarthObject>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Self {
        CloseApproach {
            time,
            distance,
            velocity,
            neo,
        }
    }

    /// Designation of the approaching body.
    pub fn designation(&self) -> &str {
        &self.neo.designation
    }

    /// Approach time formatted as `YYYY-MM-DD HH:MM`.
    pub fn time_str(&self) -> String {
        self.time.format("%Y-%m-%d %H:%M").to_string()
    }
}

impl Approach for CloseApproach {
    fn time(&self) -> NaiveDateTime {
        self.time
    }

    fn distance(&self) -> f64 {
        self.distance
    }

    fn velocity(&self) -> f64 {
        self.velocity
    }

    fn neo(&self) -> &dyn Body {
        self.neo.as_ref()
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s",
            self.time_str(),
            self.neo.fullname(),
            self.distance,
            self.velocity
        )
    }
}
