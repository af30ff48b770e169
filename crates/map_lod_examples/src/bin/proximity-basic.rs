use map_lod::prelude::*;
use map_lod_examples::init_tracing;

/// Radius query around a reference location, nearest-first, plus a criteria
/// filter over the same list.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let points = vec![
        PointOfInterest::new("louvre", "Musée du Louvre")
            .with_coordinate(Coordinate::new(48.8606, 2.3376)),
        PointOfInterest::new("marais", "Marché du Marais")
            .with_coordinate(Coordinate::new(48.8600, 2.3600)),
        PointOfInterest::new("confluences", "Musée des Confluences")
            .with_coordinate(Coordinate::new(45.7327, 4.8186)),
        PointOfInterest::new("no-fix", "Sans coordonnées"),
    ];

    let reference = Coordinate::new(48.8566, 2.3522);
    for nearby in nearby_points(&points, reference, 10.0) {
        println!(
            "{:>12}: {:.3} km",
            nearby.point.id, nearby.distance_km
        );
    }

    let museums = MatchCriteria::new()
        .with_name_contains("musée")
        .with_coordinate_required();
    for point in museums.filter(&points) {
        println!("museum match: {}", point.name);
    }

    Ok(())
}
