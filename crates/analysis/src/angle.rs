//! Relative wind angle resolution.

use routewind_geo::angles::normalize_deg;

/// Express a wind's direction of origin relative to a segment's travel
/// heading, degrees in [0, 360).
///
/// 0 means the wind origin is aligned with the heading (the headwind
/// reference point). Total over all integers: out-of-range inputs are
/// normalized by the same modulo step.
pub fn resolve_relative_angle(heading_deg: i32, wind_direction_deg: i32) -> i32 {
    normalize_deg(wind_direction_deg - heading_deg)
}
