//! Wind observation model and the weather-provider boundary.
//!
//! The analysis core never fetches anything itself; it consumes one
//! `WindObservation` supplied by a collaborator implementing
//! `WeatherProvider`. Network clients, caching, and retries all belong on
//! the provider side of this boundary.

use std::fs::File;
use std::path::Path;

use routewind_geo::coord::Coordinate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Single wind observation taken at a route's representative location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindObservation {
    /// Compass bearing the wind originates from, degrees in [0, 360).
    pub direction_deg: i32,
    /// Wind speed in metres per second.
    pub speed_ms: f64,
    /// Air temperature in degrees Celsius.
    pub temperature_c: f64,
}

/// Failure reported by a weather-fetch collaborator.
///
/// Callers receive these without reinterpretation; the analyzer never masks
/// an upstream failure as one of its own.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("weather provider failure: {0}")]
    Upstream(String),
}

/// Boundary for the collaborator that supplies wind observations.
pub trait WeatherProvider {
    fn observe(&self, location: &Coordinate) -> Result<WindObservation, FetchError>;
}

/// Provider returning a preset observation, for manual input and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedProvider(pub WindObservation);

impl WeatherProvider for FixedProvider {
    fn observe(&self, _location: &Coordinate) -> Result<WindObservation, FetchError> {
        Ok(self.0)
    }
}

/// Errors raised while loading an observation file.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("failed to read YAML: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("wind direction {0} outside [0, 360)")]
    DirectionOutOfRange(i32),
    #[error("wind speed {0} must be non-negative")]
    NegativeSpeed(f64),
}

/// Load a wind observation from a YAML file and validate its fields.
pub fn load_observation<P: AsRef<Path>>(path: P) -> Result<WindObservation, WeatherError> {
    let file = File::open(path)?;
    let observation: WindObservation = serde_yaml::from_reader(file)?;
    validate(&observation)?;
    Ok(observation)
}

/// Check observation fields against their documented ranges.
pub fn validate(observation: &WindObservation) -> Result<(), WeatherError> {
    if !(0..360).contains(&observation.direction_deg) {
        return Err(WeatherError::DirectionOutOfRange(observation.direction_deg));
    }
    if observation.speed_ms < 0.0 {
        return Err(WeatherError::NegativeSpeed(observation.speed_ms));
    }
    Ok(())
}
