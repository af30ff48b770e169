//! Viewports and their derived edge bounds.
//!
//! A [Viewport] is the camera description supplied by the map host on every
//! pan or zoom gesture: a center coordinate plus visible angular spans.
//! [VisibleBounds] is the algebraic edge form, `south = center.latitude -
//! latitude_span / 2` and so on, with edges clamped to the coordinate range.
//! Longitude is clamped rather than wrapped at the antimeridian; a viewport
//! straddling 180° is cut off at the edge instead of producing inverted
//! bounds.
use crate::error::{Error, Result};
use crate::geo::Coordinate;

/// Camera description of a map view: center plus visible angular spans.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub center: Coordinate,
    /// Visible latitude span in degrees. Must be positive.
    pub latitude_span: f64,
    /// Visible longitude span in degrees. Must be positive.
    pub longitude_span: f64,
}

impl Viewport {
    pub fn new(center: Coordinate, latitude_span: f64, longitude_span: f64) -> Self {
        Self {
            center,
            latitude_span,
            longitude_span,
        }
    }

    /// Validates the viewport, returning an error if invalid.
    ///
    /// A non-positive or non-finite span is a caller programming error and
    /// fails loudly rather than being coerced.
    pub fn validate(&self) -> Result<()> {
        if !self.center.is_valid() {
            return Err(Error::InvalidViewport(format!(
                "center ({}, {}) is out of range",
                self.center.latitude, self.center.longitude
            )));
        }
        if !(self.latitude_span > 0.0 && self.latitude_span.is_finite()) {
            return Err(Error::InvalidViewport(format!(
                "latitude_span must be positive and finite, got {}",
                self.latitude_span
            )));
        }
        if !(self.longitude_span > 0.0 && self.longitude_span.is_finite()) {
            return Err(Error::InvalidViewport(format!(
                "longitude_span must be positive and finite, got {}",
                self.longitude_span
            )));
        }
        Ok(())
    }

    /// Returns a viewport with both spans grown by `fraction` on each side,
    /// used to pre-fetch content just outside the visible edge while panning.
    pub fn padded(&self, fraction: f64) -> Viewport {
        let factor = 1.0 + 2.0 * fraction.max(0.0);
        Viewport {
            center: self.center,
            latitude_span: self.latitude_span * factor,
            longitude_span: self.longitude_span * factor,
        }
    }

    /// Edge bounds of this viewport, clamped to the coordinate range.
    pub fn bounds(&self) -> VisibleBounds {
        let half_lat = self.latitude_span / 2.0;
        let half_lon = self.longitude_span / 2.0;
        VisibleBounds {
            north: (self.center.latitude + half_lat).min(90.0),
            south: (self.center.latitude - half_lat).max(-90.0),
            east: (self.center.longitude + half_lon).min(180.0),
            west: (self.center.longitude - half_lon).max(-180.0),
        }
    }
}

/// North/south/east/west edges derived from a [Viewport].
///
/// Invariant: `north >= south` and `east >= west` (clamped, never wrapped).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl VisibleBounds {
    /// Returns true when the coordinate lies inside the bounds, edges included.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.latitude >= self.south
            && coordinate.latitude <= self.north
            && coordinate.longitude >= self.west
            && coordinate.longitude <= self.east
    }

    /// Returns true when the two rectangles overlap, edges included.
    pub fn intersects(&self, other: &VisibleBounds) -> bool {
        self.south <= other.north
            && other.south <= self.north
            && self.west <= other.east
            && other.west <= self.east
    }
}
