//! Radius queries around a reference location, nearest-first.
use crate::cluster::PointOfInterest;
use crate::geo::{distance_km, Coordinate};

/// A point returned by [nearby_points], paired with its great-circle
/// distance from the reference location.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyPoint {
    pub point: PointOfInterest,
    pub distance_km: f64,
}

/// Returns the points within `radius_km` of `reference`, sorted ascending by
/// distance. Points without a valid coordinate are excluded. Ties keep input
/// order (stable sort), so results are deterministic.
pub fn nearby_points(
    points: &[PointOfInterest],
    reference: Coordinate,
    radius_km: f64,
) -> Vec<NearbyPoint> {
    debug_assert!(
        reference.is_valid(),
        "nearby_points requires a valid reference coordinate"
    );

    let mut result: Vec<NearbyPoint> = points
        .iter()
        .filter_map(|point| {
            let coordinate = point.valid_coordinate()?;
            let distance = distance_km(reference, coordinate);
            (distance <= radius_km).then(|| NearbyPoint {
                point: point.clone(),
                distance_km: distance,
            })
        })
        .collect();

    result.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    result
}
