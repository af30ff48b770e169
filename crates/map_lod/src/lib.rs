#![forbid(unsafe_code)]
//! map_lod: Geospatial clustering and level-of-detail selection for interactive map viewports.
//!
//! Modules:
//! - geo: coordinates, haversine distance, viewports, bounds, and framing
//! - cluster: points of interest, region grouping, proximity queries, match criteria
//! - lod: zoom-tier policy and the per-viewport display decision
//! - compose: cached cluster snapshot plus the query surface for map hosts
//!
//! The crate is a pure in-process library: it consumes an in-memory point
//! list and a viewport description and returns display instructions. It
//! performs no I/O and keeps no state beyond the one cluster snapshot cached
//! in [compose::MapDataComposer].
pub mod cluster;
pub mod compose;
pub mod error;
pub mod geo;
pub mod lod;

/// Convenient re-exports for common types. Import with `use map_lod::prelude::*;`.
pub mod prelude {
    pub use crate::cluster::{
        nearby_points, Cluster, GrouperConfig, MatchCriteria, NearbyPoint, PointOfInterest, PoiId,
        RegionGrouper,
    };
    pub use crate::compose::{MapDataComposer, Snapshot};
    pub use crate::error::{Error, Result};
    pub use crate::geo::{
        distance_km, frame_points, Coordinate, FramingConfig, Viewport, VisibleBounds,
        EARTH_RADIUS_KM,
    };
    pub use crate::lod::{
        select, DisplayInstruction, DisplayMode, LodPolicy, TierClass, ZoomTier,
    };
}
