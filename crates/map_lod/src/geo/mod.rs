//! Geographic primitives: coordinates, great-circle distance, viewports and framing.
pub mod distance;
pub mod framing;
pub mod viewport;

pub use distance::{distance_km, EARTH_RADIUS_KM};
pub use framing::{frame_points, FramingConfig};
pub use viewport::{Viewport, VisibleBounds};

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Latitude in degrees, valid range [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, valid range [-180, 180].
    pub longitude: f64,
}

impl Coordinate {
    /// Fallback location published for clusters whose members carry no usable
    /// coordinate ("null island"). Consumers should hide anything flagged as
    /// degenerate rather than render it here.
    pub const SENTINEL: Coordinate = Coordinate {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true when both components are finite and within range.
    /// NaN is rejected by the range comparisons.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}
