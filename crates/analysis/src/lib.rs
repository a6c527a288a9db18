//! Per-segment and whole-path wind impact analysis.
//!
//! Callers supply an ordered sequence of segment headings plus one wind
//! observation and receive per-segment headwind/tailwind/crosswind
//! indicators and an unweighted path summary. Everything here is a pure,
//! stateless computation; fetching observations and representing routes
//! live in sibling crates.

pub mod angle;
pub mod impact;
pub mod path;

pub use angle::resolve_relative_angle;
pub use impact::{SegmentWindImpact, classify, crosswind_pct, headwind_pct, tailwind_pct};
pub use path::{
    AnalysisError, PathWindImpact, RouteAnalysis, aggregate, compute_full_analysis,
    compute_segment_impacts,
};
