use map_lod::prelude::*;
use map_lod_examples::init_tracing;

/// Rebuild a snapshot from a small point list, then walk the zoom ladder
/// from a world view down to a street view and print what each tier renders.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let points = vec![
        PointOfInterest::new("louvre", "Musée du Louvre")
            .with_coordinate(Coordinate::new(48.8606, 2.3376))
            .with_group_key("75"),
        PointOfInterest::new("orsay", "Musée d'Orsay")
            .with_coordinate(Coordinate::new(48.8600, 2.3266))
            .with_group_key("75"),
        PointOfInterest::new("tour-eiffel", "Tour Eiffel")
            .with_coordinate(Coordinate::new(48.8584, 2.2945))
            .with_group_key("75"),
        PointOfInterest::new("confluences", "Musée des Confluences")
            .with_coordinate(Coordinate::new(45.7327, 4.8186))
            .with_group_key("69"),
        PointOfInterest::new("mucem", "Mucem")
            .with_coordinate(Coordinate::new(43.2965, 5.3608))
            .with_group_key("13"),
    ];

    let mut composer = MapDataComposer::try_new(LodPolicy::default())?;
    composer.rebuild(points);

    let paris = Coordinate::new(48.8584, 2.3200);
    let ladder = [
        ("world", Viewport::new(Coordinate::new(46.0, 3.0), 120.0, 240.0)),
        ("country", Viewport::new(Coordinate::new(46.0, 3.0), 10.0, 12.0)),
        ("city", Viewport::new(paris, 1.0, 1.5)),
        ("street", Viewport::new(paris, 0.05, 0.08)),
    ];

    for (label, viewport) in ladder {
        let instruction = composer.instruction_for(&viewport, Some(paris))?;
        println!(
            "{label:>8}: tier {} {:?} -> {} clusters, {} points",
            instruction.tier,
            instruction.mode,
            instruction.clusters.len(),
            instruction.points.len()
        );
        for cluster in &instruction.clusters {
            println!(
                "          cluster {} ({} members) at ({:.4}, {:.4})",
                cluster.group_key, cluster.count, cluster.centroid.latitude,
                cluster.centroid.longitude
            );
        }
        for point in &instruction.points {
            println!("          point {} ({})", point.id, point.name);
        }
    }

    if let Some(frame) = composer.frame_group("75") {
        println!(
            "frame '75': center ({:.4}, {:.4}), span {:.4} x {:.4}",
            frame.center.latitude, frame.center.longitude, frame.latitude_span,
            frame.longitude_span
        );
    }

    Ok(())
}
