//! Partitioning of points into one cluster per administrative group key.
use std::collections::BTreeMap;

use tracing::debug;

use crate::cluster::{Cluster, PointOfInterest};
use crate::geo::Coordinate;

/// Configuration for [RegionGrouper].
#[derive(Debug, Clone, Copy)]
pub struct GrouperConfig {
    /// Minimum number of valid-coordinate members a key needs to form a
    /// cluster. Keys below the threshold are dropped; their points remain
    /// individual-display candidates.
    pub min_members_for_cluster: usize,
}

impl Default for GrouperConfig {
    fn default() -> Self {
        Self {
            min_members_for_cluster: 1,
        }
    }
}

impl GrouperConfig {
    /// Sets the minimum cluster membership.
    pub fn with_min_members(mut self, min_members_for_cluster: usize) -> Self {
        self.min_members_for_cluster = min_members_for_cluster;
        self
    }
}

/// Groups points by administrative key and computes centroids.
///
/// The result is a pure function of the input set: a single pass partitions
/// into a key-ordered map, so the output never depends on input ordering
/// beyond floating-point summation over identical member sequences, and
/// rebuilding from the same list reproduces the same clusters bit for bit.
#[derive(Debug, Clone, Default)]
pub struct RegionGrouper {
    pub config: GrouperConfig,
}

impl RegionGrouper {
    pub fn new(config: GrouperConfig) -> Self {
        Self { config }
    }

    /// Builds one cluster per distinct group key, sorted by key.
    ///
    /// Points without a group key are skipped. Members with a missing or
    /// out-of-range coordinate are discarded locally; a key left with no
    /// valid member is published as a degenerate sentinel cluster regardless
    /// of the membership threshold, so the caller sees the flag instead of a
    /// silently vanishing group.
    pub fn build(&self, points: &[PointOfInterest]) -> Vec<Cluster> {
        let mut buckets: BTreeMap<&str, Vec<&PointOfInterest>> = BTreeMap::new();
        for point in points {
            if let Some(key) = point.group_key.as_deref() {
                buckets.entry(key).or_default().push(point);
            }
        }

        let mut clusters = Vec::with_capacity(buckets.len());
        for (key, bucket) in buckets {
            let mut members = Vec::new();
            let mut lat_sum = 0.0;
            let mut lon_sum = 0.0;
            for point in bucket {
                if let Some(c) = point.valid_coordinate() {
                    lat_sum += c.latitude;
                    lon_sum += c.longitude;
                    members.push(point.clone());
                }
            }

            if members.is_empty() {
                clusters.push(Cluster {
                    group_key: key.to_owned(),
                    count: 0,
                    centroid: Coordinate::SENTINEL,
                    degenerate: true,
                    members,
                });
                continue;
            }
            if members.len() < self.config.min_members_for_cluster {
                continue;
            }

            let n = members.len() as f64;

            clusters.push(Cluster {
                group_key: key.to_owned(),
                count: members.len(),
                centroid: Coordinate::new(lat_sum / n, lon_sum / n),
                degenerate: false,
                members,
            });
        }

        debug!(
            points = points.len(),
            clusters = clusters.len(),
            "grouped points by region"
        );

        clusters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poi(id: &str, lat: f64, lon: f64, key: &str) -> PointOfInterest {
        PointOfInterest::new(id, id)
            .with_coordinate(Coordinate::new(lat, lon))
            .with_group_key(key)
    }

    #[test]
    fn member_counts_cover_exactly_the_clusterable_points() {
        let points = vec![
            poi("a", 48.85, 2.35, "75"),
            poi("b", 48.86, 2.36, "75"),
            poi("c", 45.76, 4.83, "69"),
            // no group key: individual-display candidate only
            PointOfInterest::new("d", "d").with_coordinate(Coordinate::new(43.3, 5.4)),
            // invalid coordinate: discarded locally
            PointOfInterest::new("e", "e")
                .with_coordinate(Coordinate::new(999.0, 0.0))
                .with_group_key("75"),
        ];

        let clusters = RegionGrouper::default().build(&points);
        let total: usize = clusters.iter().map(|c| c.count).sum();
        assert_eq!(total, 3);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].group_key, "69");
        assert_eq!(clusters[1].group_key, "75");
    }

    #[test]
    fn single_member_centroid_equals_its_coordinate() {
        let clusters = RegionGrouper::default().build(&[poi("a", 45.7640, 4.8357, "69")]);
        assert_eq!(clusters.len(), 1);
        let centroid = clusters[0].centroid;
        assert!((centroid.latitude - 45.7640).abs() < f64::EPSILON);
        assert!((centroid.longitude - 4.8357).abs() < f64::EPSILON);
    }

    #[test]
    fn centroid_is_the_arithmetic_mean() {
        let clusters = RegionGrouper::default().build(&[
            poi("a", 48.0, 2.0, "75"),
            poi("b", 50.0, 4.0, "75"),
        ]);
        assert_eq!(clusters[0].centroid, Coordinate::new(49.0, 3.0));
    }

    #[test]
    fn all_invalid_key_is_flagged_degenerate_with_sentinel() {
        let points = vec![PointOfInterest::new("x", "x")
            .with_coordinate(Coordinate::new(f64::NAN, 0.0))
            .with_group_key("13")];
        let clusters = RegionGrouper::default().build(&points);
        assert_eq!(clusters.len(), 1);
        assert!(clusters[0].degenerate);
        assert_eq!(clusters[0].count, 0);
        assert_eq!(clusters[0].centroid, Coordinate::SENTINEL);
    }

    #[test]
    fn membership_threshold_drops_small_groups() {
        let config = GrouperConfig::default().with_min_members(2);
        let clusters = RegionGrouper::new(config).build(&[
            poi("a", 48.85, 2.35, "75"),
            poi("b", 48.86, 2.36, "75"),
            poi("c", 45.76, 4.83, "69"),
        ]);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].group_key, "75");
    }

    #[test]
    fn result_does_not_depend_on_input_order() {
        let mut points = vec![
            poi("a", 48.85, 2.35, "75"),
            poi("b", 48.86, 2.36, "75"),
            poi("c", 45.76, 4.83, "69"),
        ];
        let grouper = RegionGrouper::default();
        let forward = grouper.build(&points);
        points.reverse();
        let backward = grouper.build(&points);

        assert_eq!(forward.len(), backward.len());
        for (f, b) in forward.iter().zip(&backward) {
            assert_eq!(f.group_key, b.group_key);
            assert_eq!(f.count, b.count);
            assert!((f.centroid.latitude - b.centroid.latitude).abs() < 1e-12);
            assert!((f.centroid.longitude - b.centroid.longitude).abs() < 1e-12);
        }
    }

    #[test]
    fn identical_input_rebuilds_identically() {
        let points = vec![
            poi("a", 48.85, 2.35, "75"),
            poi("b", 48.86, 2.36, "75"),
            poi("c", 45.76, 4.83, "69"),
        ];
        let grouper = RegionGrouper::default();
        assert_eq!(grouper.build(&points), grouper.build(&points));
    }

    #[test]
    fn empty_input_yields_no_clusters() {
        assert!(RegionGrouper::default().build(&[]).is_empty());
    }
}
