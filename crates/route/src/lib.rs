//! Route polyline representation for wind analysis.
//!
//! A route is an ordered polyline of geographic points. Segment headings are
//! the great-circle initial bearings between consecutive points, rounded to
//! whole compass degrees.

use routewind_geo::angles;
use routewind_geo::coord::{Coordinate, initial_bearing_deg};

/// Ordered polyline of geographic points.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<Coordinate>,
}

impl Route {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Number of directional segments: one fewer than points, zero when the
    /// polyline has fewer than two points.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Initial bearing of each segment, whole degrees in [0, 360), in
    /// polyline order.
    pub fn segment_headings(&self) -> Vec<i32> {
        self.points
            .windows(2)
            .map(|pair| {
                let bearing = initial_bearing_deg(&pair[0], &pair[1]);
                angles::normalize_deg(bearing.round() as i32)
            })
            .collect()
    }

    /// Representative location for a single wind observation: the midpoint
    /// point of the polyline. `None` for an empty route.
    pub fn representative_coordinate(&self) -> Option<Coordinate> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points[self.points.len() / 2])
    }
}
