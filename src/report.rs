//! Orchestration of route, weather provider, and analysis core.

use routewind_analysis::{AnalysisError, PathWindImpact, SegmentWindImpact, compute_full_analysis};
use routewind_route::Route;
use routewind_weather::{FetchError, WeatherProvider, WindObservation};
use thiserror::Error;

/// Full report for one route under one wind observation.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteWindReport {
    pub observation: WindObservation,
    pub segments: Vec<SegmentWindImpact>,
    pub summary: PathWindImpact,
}

/// Top-level report error, discriminated so callers can route on kind.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The route yields no location to observe the wind at.
    #[error("route does not yield a representative location")]
    NoRepresentativeLocation,
    #[error("analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
    /// Collaborator fetch failure, surfaced without reinterpretation.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Observe the wind at the route's representative location and run the full
/// analysis.
///
/// Never returns partial results alongside an error: either the whole report
/// is produced or the first failure is returned.
pub fn analyze_route(
    route: &Route,
    provider: &dyn WeatherProvider,
) -> Result<RouteWindReport, ReportError> {
    let location = route
        .representative_coordinate()
        .ok_or(ReportError::NoRepresentativeLocation)?;
    let observation = provider.observe(&location)?;
    let analysis = compute_full_analysis(&route.segment_headings(), &observation)?;
    Ok(RouteWindReport {
        observation,
        segments: analysis.segments,
        summary: analysis.summary,
    })
}
