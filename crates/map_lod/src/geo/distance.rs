//! Great-circle distance via the haversine formula.
use crate::geo::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers.
///
/// Pure and total over valid input: symmetric, zero for coincident points,
/// monotonic in angular separation. Both coordinates must be structurally
/// valid; validity is the caller's responsibility.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    debug_assert!(a.is_valid(), "distance_km requires a valid first coordinate");
    debug_assert!(
        b.is_valid(),
        "distance_km requires a valid second coordinate"
    );

    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
