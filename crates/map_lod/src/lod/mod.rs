//! Level-of-detail selection: deciding what to render for a viewport.
use crate::cluster::{Cluster, PointOfInterest};

pub mod policy;
pub mod selector;

pub use policy::{LodPolicy, TierClass};
pub use selector::select;

/// Coarse zoom tier index. Tier 0 is the coarsest (world) view; larger
/// indices are closer views.
pub type ZoomTier = usize;

/// What kinds of markers a [DisplayInstruction] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayMode {
    /// Aggregated clusters only.
    ClustersOnly,
    /// Individually visible points only.
    IndividualOnly,
    /// Clusters plus points near the user's location.
    Hybrid,
}

/// What the rendering host should paint for the current viewport.
///
/// Outside [DisplayMode::Hybrid] at most one of `clusters` and `points` is
/// non-empty.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayInstruction {
    /// Effective tier the decision was made at, after any density fallback.
    pub tier: ZoomTier,
    pub mode: DisplayMode,
    pub clusters: Vec<Cluster>,
    pub points: Vec<PointOfInterest>,
}
