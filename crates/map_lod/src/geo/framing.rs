//! Framing: derive a viewport that fits a set of coordinates.
//!
//! Used for "frame this cluster" camera animations. The spread is padded by a
//! small fraction on each side and floor-clamped so a single point still
//! yields a usable zoom level instead of a zero-span viewport.
use crate::error::{Error, Result};
use crate::geo::{Coordinate, Viewport};

/// Configuration for [frame_points].
#[derive(Debug, Clone, Copy)]
pub struct FramingConfig {
    /// Fraction of the spread added as margin on each side.
    pub padding_fraction: f64,
    /// Minimum span in degrees for either axis.
    pub min_span: f64,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            padding_fraction: 0.05,
            min_span: 0.01,
        }
    }
}

impl FramingConfig {
    /// Sets the padding fraction.
    pub fn with_padding_fraction(mut self, padding_fraction: f64) -> Self {
        self.padding_fraction = padding_fraction;
        self
    }

    /// Sets the minimum span.
    pub fn with_min_span(mut self, min_span: f64) -> Self {
        self.min_span = min_span;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(self.padding_fraction >= 0.0 && self.padding_fraction.is_finite()) {
            return Err(Error::InvalidPolicy(format!(
                "padding_fraction must be non-negative and finite, got {}",
                self.padding_fraction
            )));
        }
        if !(self.min_span > 0.0 && self.min_span.is_finite()) {
            return Err(Error::InvalidPolicy(format!(
                "min_span must be positive and finite, got {}",
                self.min_span
            )));
        }
        Ok(())
    }
}

/// Computes a viewport framing all given coordinates, or `None` for an empty
/// set. Every coordinate must already be valid; pre-filter before calling.
pub fn frame_points(coordinates: &[Coordinate], config: &FramingConfig) -> Option<Viewport> {
    debug_assert!(
        coordinates.iter().all(Coordinate::is_valid),
        "frame_points requires pre-filtered valid coordinates"
    );
    debug_assert!(
        config.validate().is_ok(),
        "frame_points requires a validated framing config"
    );

    let first = coordinates.first()?;
    let mut south = first.latitude;
    let mut north = first.latitude;
    let mut west = first.longitude;
    let mut east = first.longitude;
    for c in &coordinates[1..] {
        south = south.min(c.latitude);
        north = north.max(c.latitude);
        west = west.min(c.longitude);
        east = east.max(c.longitude);
    }

    let pad = 1.0 + 2.0 * config.padding_fraction;
    let latitude_span = ((north - south) * pad).max(config.min_span);
    let longitude_span = ((east - west) * pad).max(config.min_span);

    Some(Viewport::new(
        Coordinate::new((north + south) / 2.0, (east + west) / 2.0),
        latitude_span,
        longitude_span,
    ))
}
