//! Points of interest and their grouping into region clusters.
use crate::geo::{Coordinate, VisibleBounds};

pub mod criteria;
pub mod grouper;
pub mod proximity;

pub use criteria::MatchCriteria;
pub use grouper::{GrouperConfig, RegionGrouper};
pub use proximity::{nearby_points, NearbyPoint};

pub type PoiId = String;

/// A geo-located entity with identity, display name, and optional coordinate.
///
/// Both the coordinate and the administrative group key come from external
/// data and may be missing or out of range; every consumer in this crate
/// tolerates that instead of assuming clean input.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    pub id: PoiId,
    pub name: String,
    pub coordinate: Option<Coordinate>,
    /// Administrative region code used for clustering, e.g. a department or
    /// postal prefix. Points without one are individual-display candidates
    /// only.
    pub group_key: Option<String>,
}

impl PointOfInterest {
    pub fn new(id: impl Into<PoiId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinate: None,
            group_key: None,
        }
    }

    /// Sets the coordinate.
    pub fn with_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = Some(coordinate);
        self
    }

    /// Sets the administrative group key.
    pub fn with_group_key(mut self, group_key: impl Into<String>) -> Self {
        self.group_key = Some(group_key.into());
        self
    }

    /// Returns the coordinate only when present and structurally valid.
    pub fn valid_coordinate(&self) -> Option<Coordinate> {
        self.coordinate.filter(Coordinate::is_valid)
    }
}

/// An aggregate of points sharing one administrative group key.
///
/// `count` and `members` cover only the members with a valid coordinate; the
/// centroid is their arithmetic mean. A cluster whose key has no usable
/// coordinate at all is published with [Coordinate::SENTINEL] and
/// `degenerate = true` so the host can hide it instead of rendering NaN.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cluster {
    pub group_key: String,
    pub count: usize,
    pub centroid: Coordinate,
    pub degenerate: bool,
    pub members: Vec<PointOfInterest>,
}

impl Cluster {
    /// Bounding box of the member coordinates, or `None` for a degenerate
    /// cluster with nothing to place on the map.
    pub fn bounds(&self) -> Option<VisibleBounds> {
        let mut coordinates = self
            .members
            .iter()
            .filter_map(PointOfInterest::valid_coordinate);
        let first = coordinates.next()?;
        let mut bounds = VisibleBounds {
            north: first.latitude,
            south: first.latitude,
            east: first.longitude,
            west: first.longitude,
        };
        for c in coordinates {
            bounds.north = bounds.north.max(c.latitude);
            bounds.south = bounds.south.min(c.latitude);
            bounds.east = bounds.east.max(c.longitude);
            bounds.west = bounds.west.min(c.longitude);
        }
        Some(bounds)
    }
}
