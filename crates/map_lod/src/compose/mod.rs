//! Orchestration: cached cluster snapshot plus per-viewport LOD queries.
use std::sync::Arc;

use tracing::{debug, info};

use crate::cluster::{Cluster, GrouperConfig, PointOfInterest, RegionGrouper};
use crate::error::Result;
use crate::geo::{frame_points, Coordinate, FramingConfig, Viewport};
use crate::lod::{select, DisplayInstruction, LodPolicy};

/// Immutable view of one data refresh: the point list and its clusters.
///
/// A snapshot is built once per [MapDataComposer::rebuild] and shared behind
/// an [Arc]; it is replaced wholesale, never mutated in place, so a reader
/// holding one never observes a partial update.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub points: Vec<PointOfInterest>,
    pub clusters: Vec<Cluster>,
}

/// Orchestrates clustering and level-of-detail selection.
///
/// Clusters are computed once per explicit [rebuild](Self::rebuild) and
/// cached; viewport changes only re-run selection against the cached
/// snapshot. Publication is a single [Arc] swap, so a multi-threaded host
/// can keep answering queries from the previous snapshot while a new one is
/// prepared.
pub struct MapDataComposer {
    policy: LodPolicy,
    grouper: RegionGrouper,
    framing: FramingConfig,
    snapshot: Arc<Snapshot>,
}

impl MapDataComposer {
    /// Creates a composer with the given policy, validating it once up
    /// front so every later query works from a known-good configuration.
    pub fn try_new(policy: LodPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self {
            policy,
            grouper: RegionGrouper::default(),
            framing: FramingConfig::default(),
            snapshot: Arc::new(Snapshot::default()),
        })
    }

    /// Sets the grouping configuration.
    pub fn with_grouper_config(mut self, config: GrouperConfig) -> Self {
        self.grouper = RegionGrouper::new(config);
        self
    }

    /// Sets the framing configuration used by [frame_group](Self::frame_group),
    /// validating it the same way the policy is validated at construction.
    pub fn with_framing_config(mut self, config: FramingConfig) -> Result<Self> {
        config.validate()?;
        self.framing = config;
        Ok(self)
    }

    /// Rebuilds the cluster snapshot from a fresh point list.
    ///
    /// This is the only operation that recomputes clusters; viewport events
    /// never trigger it implicitly. The new snapshot is built completely and
    /// then published with a single pointer swap.
    pub fn rebuild(&mut self, points: Vec<PointOfInterest>) {
        let clusters = self.grouper.build(&points);
        info!(
            points = points.len(),
            clusters = clusters.len(),
            "rebuilt cluster snapshot"
        );
        self.snapshot = Arc::new(Snapshot { points, clusters });
    }

    /// Runs level-of-detail selection for one viewport event against the
    /// cached snapshot.
    pub fn instruction_for(
        &self,
        viewport: &Viewport,
        user_location: Option<Coordinate>,
    ) -> Result<DisplayInstruction> {
        let snapshot = &self.snapshot;
        let instruction = select(
            viewport,
            &snapshot.clusters,
            &snapshot.points,
            user_location,
            &self.policy,
        )?;
        debug!(
            tier = instruction.tier,
            clusters = instruction.clusters.len(),
            points = instruction.points.len(),
            "viewport instruction"
        );
        Ok(instruction)
    }

    /// Viewport framing the members of one cluster, for tap-to-expand
    /// camera animations. `None` when the key is unknown or the cluster has
    /// no usable coordinates.
    pub fn frame_group(&self, group_key: &str) -> Option<Viewport> {
        let cluster = self
            .snapshot
            .clusters
            .iter()
            .find(|c| c.group_key == group_key)?;
        let coordinates: Vec<Coordinate> = cluster
            .members
            .iter()
            .filter_map(PointOfInterest::valid_coordinate)
            .collect();
        frame_points(&coordinates, &self.framing)
    }

    /// The current snapshot. Hosts running queries on other threads can
    /// clone the [Arc] and read a stable snapshot across a rebuild.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    /// The policy this composer was built with.
    pub fn policy(&self) -> &LodPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lod::DisplayMode;

    fn poi(id: &str, lat: f64, lon: f64, key: &str) -> PointOfInterest {
        PointOfInterest::new(id, id)
            .with_coordinate(Coordinate::new(lat, lon))
            .with_group_key(key)
    }

    /// Five points across "75" (4 members) and "69" (1 member).
    fn sample_points() -> Vec<PointOfInterest> {
        vec![
            poi("a", 48.8566, 2.3522, "75"),
            poi("b", 48.8600, 2.3600, "75"),
            poi("c", 48.8530, 2.3499, "75"),
            poi("d", 48.8700, 2.3300, "75"),
            poi("e", 45.7640, 4.8357, "69"),
        ]
    }

    #[test]
    fn end_to_end_world_then_street_view() {
        let mut composer = MapDataComposer::try_new(LodPolicy::default()).expect("valid policy");
        composer.rebuild(sample_points());

        let snapshot = composer.snapshot();
        assert_eq!(snapshot.clusters.len(), 2);
        let counts: Vec<(String, usize)> = snapshot
            .clusters
            .iter()
            .map(|c| (c.group_key.clone(), c.count))
            .collect();
        assert_eq!(counts, vec![("69".into(), 1), ("75".into(), 4)]);

        let paris = &snapshot.clusters[1];
        assert!((paris.centroid.latitude - (48.8566 + 48.8600 + 48.8530 + 48.8700) / 4.0).abs()
            < 1e-12);
        assert!((paris.centroid.longitude - (2.3522 + 2.3600 + 2.3499 + 2.3300) / 4.0).abs()
            < 1e-12);

        let world = Viewport::new(Coordinate::new(20.0, 0.0), 120.0, 240.0);
        let instruction = composer.instruction_for(&world, None).expect("valid");
        assert_eq!(instruction.mode, DisplayMode::ClustersOnly);
        assert_eq!(instruction.clusters.len(), 2);
        assert!(instruction.points.is_empty());

        let street = Viewport::new(Coordinate::new(45.7640, 4.8357), 0.02, 0.03);
        let instruction = composer.instruction_for(&street, None).expect("valid");
        assert_eq!(instruction.mode, DisplayMode::IndividualOnly);
        assert!(instruction.clusters.is_empty());
        assert_eq!(instruction.points.len(), 1);
        assert_eq!(instruction.points[0].id, "e");
    }

    #[test]
    fn rebuild_twice_with_identical_input_is_bit_for_bit_identical() {
        let mut composer = MapDataComposer::try_new(LodPolicy::default()).expect("valid policy");
        composer.rebuild(sample_points());
        let first = composer.snapshot();
        composer.rebuild(sample_points());
        let second = composer.snapshot();
        assert_eq!(first.clusters, second.clusters);
        assert_eq!(first.points, second.points);
    }

    #[test]
    fn rebuild_replaces_the_snapshot_wholesale() {
        let mut composer = MapDataComposer::try_new(LodPolicy::default()).expect("valid policy");
        composer.rebuild(sample_points());
        let before = composer.snapshot();
        composer.rebuild(vec![poi("solo", 43.2965, 5.3698, "13")]);

        // The old snapshot is untouched; only the pointer moved.
        assert_eq!(before.clusters.len(), 2);
        assert_eq!(composer.snapshot().clusters.len(), 1);
    }

    #[test]
    fn viewport_events_do_not_retrigger_clustering() {
        let mut composer = MapDataComposer::try_new(LodPolicy::default()).expect("valid policy");
        composer.rebuild(sample_points());
        let snapshot = composer.snapshot();

        let world = Viewport::new(Coordinate::new(20.0, 0.0), 120.0, 240.0);
        composer.instruction_for(&world, None).expect("valid");
        composer.instruction_for(&world, None).expect("valid");

        assert!(Arc::ptr_eq(&snapshot, &composer.snapshot()));
    }

    #[test]
    fn frame_group_fits_the_cluster_members() {
        let mut composer = MapDataComposer::try_new(LodPolicy::default()).expect("valid policy");
        composer.rebuild(sample_points());

        let viewport = composer.frame_group("75").expect("known group");
        assert!(viewport.validate().is_ok());
        let bounds = viewport.bounds();
        for point in sample_points().iter().filter(|p| p.group_key.as_deref() == Some("75")) {
            assert!(bounds.contains(point.coordinate.expect("fixture has coordinates")));
        }

        assert!(composer.frame_group("unknown").is_none());
    }

    #[test]
    fn invalid_framing_config_is_rejected() {
        let composer = MapDataComposer::try_new(LodPolicy::default()).expect("valid policy");
        let zero_span = FramingConfig::default().with_min_span(0.0);
        assert!(zero_span.validate().is_err());
        let result = composer.with_framing_config(zero_span);
        assert!(matches!(
            result,
            Err(crate::error::Error::InvalidPolicy(_))
        ));

        let composer = MapDataComposer::try_new(LodPolicy::default()).expect("valid policy");
        assert!(composer
            .with_framing_config(FramingConfig::default().with_min_span(0.05))
            .is_ok());
    }

    #[test]
    fn invalid_policy_is_rejected_at_construction() {
        let policy = LodPolicy::new(vec![1.0, 5.0]);
        assert!(MapDataComposer::try_new(policy).is_err());
    }
}
