use std::time::Duration;

use criterion::{Criterion, Throughput};
use map_lod::prelude::{Coordinate, PointOfInterest};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Deterministic synthetic points spread over metropolitan France, cycling
/// through `keys` distinct group keys; every 17th point has no coordinate
/// and every 23rd no group key, to keep the tolerant paths exercised.
pub fn synthetic_points(count: usize, keys: usize) -> Vec<PointOfInterest> {
    (0..count)
        .map(|i| {
            let lat = 42.0 + ((i * 7919) % 7000) as f64 / 1000.0;
            let lon = -4.0 + ((i * 104_729) % 12_000) as f64 / 1000.0;
            let mut point = PointOfInterest::new(format!("poi-{i}"), format!("Point {i}"));
            if i % 17 != 0 {
                point = point.with_coordinate(Coordinate::new(lat, lon));
            }
            if i % 23 != 0 {
                point = point.with_group_key(format!("{:02}", i % keys));
            }
            point
        })
        .collect()
}
