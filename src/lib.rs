//! Wind impact analysis for planned travel routes.
//!
//! Library façade over the workspace crates so multiple front-ends (CLI,
//! services) share one entry point: the route and weather boundaries, the
//! pure analysis core, and the export helpers.

pub mod report;

pub use routewind_analysis as analysis;
pub use routewind_export as export;
pub use routewind_geo as geo;
pub use routewind_route as route;
pub use routewind_weather as weather;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
