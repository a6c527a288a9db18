//! Per-segment orchestration and whole-path aggregation.

use routewind_weather::WindObservation;
use serde::Serialize;
use thiserror::Error;

use crate::angle::resolve_relative_angle;
use crate::impact::{self, SegmentWindImpact};

/// Errors the analysis core can raise on its own.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Aggregation over zero segments is undefined; rejected explicitly
    /// instead of producing NaN means.
    #[error("path contains no segments")]
    EmptyPath,
}

/// Whole-path summary: unweighted percentage means plus the observation's
/// raw temperature and speed passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathWindImpact {
    pub temperature_c: f64,
    pub wind_speed_ms: f64,
    pub headwind_pct: f64,
    pub tailwind_pct: f64,
    pub crosswind_pct: f64,
}

/// Bundled result of a full analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteAnalysis {
    pub segments: Vec<SegmentWindImpact>,
    pub summary: PathWindImpact,
}

/// Classify every heading against the observation, one impact per heading
/// in input order.
///
/// Rejects an empty heading sequence regardless of any caller-side
/// validation.
pub fn compute_segment_impacts(
    headings_deg: &[i32],
    observation: &WindObservation,
) -> Result<Vec<SegmentWindImpact>, AnalysisError> {
    if headings_deg.is_empty() {
        return Err(AnalysisError::EmptyPath);
    }
    Ok(headings_deg
        .iter()
        .map(|&heading| {
            let relative = resolve_relative_angle(heading, observation.direction_deg);
            impact::classify(f64::from(relative))
        })
        .collect())
}

/// Reduce per-segment impacts to the arithmetic mean of each percentage.
///
/// The mean is unweighted: segment lengths do not factor in. Temperature
/// and wind speed are copied from the observation exactly.
pub fn aggregate(
    impacts: &[SegmentWindImpact],
    observation: &WindObservation,
) -> Result<PathWindImpact, AnalysisError> {
    if impacts.is_empty() {
        return Err(AnalysisError::EmptyPath);
    }

    let count = impacts.len() as f64;
    let mut headwind = 0.0;
    let mut tailwind = 0.0;
    let mut crosswind = 0.0;
    for impact in impacts {
        headwind += impact.headwind_pct;
        tailwind += impact.tailwind_pct;
        crosswind += impact.crosswind_pct;
    }

    Ok(PathWindImpact {
        temperature_c: observation.temperature_c,
        wind_speed_ms: observation.speed_ms,
        headwind_pct: headwind / count,
        tailwind_pct: tailwind / count,
        crosswind_pct: crosswind / count,
    })
}

/// Run the per-segment pass and the aggregation in one call.
pub fn compute_full_analysis(
    headings_deg: &[i32],
    observation: &WindObservation,
) -> Result<RouteAnalysis, AnalysisError> {
    let segments = compute_segment_impacts(headings_deg, observation)?;
    let summary = aggregate(&segments, observation)?;
    Ok(RouteAnalysis { segments, summary })
}
