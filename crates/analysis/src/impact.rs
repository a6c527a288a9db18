//! Cosine-weighted headwind/tailwind/crosswind classification.
//!
//! All three indicators derive from one half-cosine primitive so the
//! perceived wind effect transitions smoothly as the heading changes by a
//! degree, instead of jumping across a hard threshold. They are independent
//! indicators, not a partition: they are not constrained to sum to 100.

use serde::Serialize;

/// Half-cosine falloff: 1.0 at 0 degrees, 0.0 at 180 degrees.
fn cosine_weight(angle_deg: f64) -> f64 {
    (1.0 + angle_deg.to_radians().cos()) / 2.0
}

/// Headwind indicator in [0, 100] for a relative wind angle in [0, 360).
///
/// Applies on the open intervals (260, 360) and (0, 90). The exact boundary
/// angles, including 0, yield 0; existing expected outputs depend on these
/// open bounds, so they are kept as-is.
pub fn headwind_pct(relative_angle_deg: f64) -> f64 {
    let a = relative_angle_deg;
    if (a > 260.0 && a < 360.0) || (a > 0.0 && a < 90.0) {
        (cosine_weight(a) * 100.0).round()
    } else {
        0.0
    }
}

/// Tailwind indicator in [0, 100] on the open interval (90, 260).
///
/// The same half-cosine primitive referenced to the 180-degree tailwind
/// point, so a dead-astern wind scores 100.
pub fn tailwind_pct(relative_angle_deg: f64) -> f64 {
    let a = relative_angle_deg;
    if a > 90.0 && a < 260.0 {
        (cosine_weight(a - 180.0) * 100.0).round()
    } else {
        0.0
    }
}

/// Crosswind indicator in [0, 100], computed for every angle.
///
/// Doubled-angle weighting: peaks at 90 and 270 degrees, zero at 0 and 180.
pub fn crosswind_pct(relative_angle_deg: f64) -> f64 {
    let doubled = (2.0 * relative_angle_deg).to_radians();
    ((1.0 - doubled.cos()) / 2.0 * 100.0).round()
}

/// Wind impact for a single path segment.
///
/// Headwind and tailwind are mutually exclusive by construction: their
/// applicability intervals do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentWindImpact {
    pub relative_angle_deg: f64,
    pub headwind_pct: f64,
    pub tailwind_pct: f64,
    pub crosswind_pct: f64,
}

/// Classify one relative wind angle into a segment impact.
pub fn classify(relative_angle_deg: f64) -> SegmentWindImpact {
    SegmentWindImpact {
        relative_angle_deg,
        headwind_pct: headwind_pct(relative_angle_deg),
        tailwind_pct: tailwind_pct(relative_angle_deg),
        crosswind_pct: crosswind_pct(relative_angle_deg),
    }
}
