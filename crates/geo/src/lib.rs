//! Compass angles, coordinates, and shared primitives for the Route Wind Analyzer workspace.

/// Compass-angle normalization helpers.
pub mod angles {
    /// Normalize an integer bearing into [0, 360).
    #[inline]
    pub fn normalize_deg(deg: i32) -> i32 {
        deg.rem_euclid(360)
    }

    /// Normalize a floating bearing into [0.0, 360.0).
    #[inline]
    pub fn normalize_deg_f64(deg: f64) -> f64 {
        deg.rem_euclid(360.0)
    }
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert metres per second to kilometres per hour.
    #[inline]
    pub fn ms_to_kmh(v: f64) -> f64 {
        v * 3.6
    }

    /// Convert kilometres per hour to metres per second.
    #[inline]
    pub fn kmh_to_ms(v: f64) -> f64 {
        v / 3.6
    }
}

/// Geographic coordinates and great-circle bearings.
pub mod coord {
    use super::angles;

    /// Geographic position in decimal degrees.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Coordinate {
        pub latitude_deg: f64,
        pub longitude_deg: f64,
    }

    impl Coordinate {
        pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
            Self {
                latitude_deg,
                longitude_deg,
            }
        }
    }

    /// Initial great-circle bearing from `from` to `to`, degrees in [0, 360)
    /// with 0 pointing north.
    pub fn initial_bearing_deg(from: &Coordinate, to: &Coordinate) -> f64 {
        let phi1 = from.latitude_deg.to_radians();
        let phi2 = to.latitude_deg.to_radians();
        let dlam = (to.longitude_deg - from.longitude_deg).to_radians();

        let y = dlam.sin() * phi2.cos();
        let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlam.cos();
        angles::normalize_deg_f64(y.atan2(x).to_degrees())
    }
}
