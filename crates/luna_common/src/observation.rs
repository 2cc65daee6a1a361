//! Sleep observation - one user-submitted record of a night's conditions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ObservationError;

/// Binary condition flag, serialized as the lowercase strings `"yes"`/`"no"`
/// that the session payload carries on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YesNo::Yes => write!(f, "yes"),
            YesNo::No => write!(f, "no"),
        }
    }
}

impl FromStr for YesNo {
    type Err = ObservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" => Ok(YesNo::Yes),
            "no" | "n" => Ok(YesNo::No),
            other => Err(ObservationError::InvalidFlag {
                value: other.to_string(),
            }),
        }
    }
}

/// A validated nightly sleep observation. All fields are required; the
/// scorer is total over any value constructed through [`SleepObservation::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepObservation {
    /// Hours slept, 0-24.
    pub sleep_hours: f64,

    /// Number of times sleep was interrupted.
    pub disturbances: u32,

    /// Bedroom temperature in degrees Celsius.
    pub temperature: f64,

    /// Whether light reached the sleeper during the night.
    pub light_exposure: YesNo,

    /// Whether noise disturbed the night.
    pub noise_level: YesNo,
}

impl SleepObservation {
    /// Validate a raw entry. Rejects non-finite or out-of-range hours and
    /// non-finite temperatures; counts are non-negative by construction.
    pub fn new(
        sleep_hours: f64,
        disturbances: u32,
        temperature: f64,
        light_exposure: YesNo,
        noise_level: YesNo,
    ) -> Result<Self, ObservationError> {
        if !sleep_hours.is_finite() || !(0.0..=24.0).contains(&sleep_hours) {
            return Err(ObservationError::InvalidHours { value: sleep_hours });
        }
        if !temperature.is_finite() {
            return Err(ObservationError::InvalidTemperature { value: temperature });
        }

        Ok(Self {
            sleep_hours,
            disturbances,
            temperature,
            light_exposure,
            noise_level,
        })
    }
}
