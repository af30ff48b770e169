//! The central decision function mapping a viewport to a display instruction.
use tracing::{debug, warn};

use crate::cluster::{nearby_points, Cluster, PointOfInterest};
use crate::error::Result;
use crate::geo::{Coordinate, Viewport};
use crate::lod::policy::{LodPolicy, TierClass};
use crate::lod::{DisplayInstruction, DisplayMode};

/// Decides what to render for the current viewport.
///
/// The viewport's latitude span selects a zoom tier through the policy's
/// cutoff table:
/// - coarse tiers return every cluster (degenerate ones flagged, never
///   dropped, so the host can hide them);
/// - intermediate tiers return the clusters whose member bounding box
///   intersects the padded visible bounds, plus nearby individual points in
///   hybrid mode when a user location is supplied;
/// - fine tiers return the individually visible points; when those exceed
///   the density ceiling the decision falls back one tier coarser, which is
///   the anti-overdraw guard.
///
/// An empty point list yields a valid empty clusters-only instruction. A
/// viewport with a non-positive span is a caller programming error and
/// fails loudly.
pub fn select(
    viewport: &Viewport,
    clusters: &[Cluster],
    points: &[PointOfInterest],
    user_location: Option<Coordinate>,
    policy: &LodPolicy,
) -> Result<DisplayInstruction> {
    viewport.validate()?;
    policy.validate()?;

    let padded = viewport.padded(policy.padding_fraction).bounds();
    let mut tier = policy.tier_for_span(viewport.latitude_span);

    loop {
        match policy.class_of(tier) {
            TierClass::Coarse => {
                debug!(tier, clusters = clusters.len(), "coarse tier: all clusters");
                return Ok(DisplayInstruction {
                    tier,
                    mode: DisplayMode::ClustersOnly,
                    clusters: clusters.to_vec(),
                    points: Vec::new(),
                });
            }
            TierClass::Intermediate => {
                let visible: Vec<Cluster> = clusters
                    .iter()
                    .filter(|c| c.bounds().is_some_and(|b| padded.intersects(&b)))
                    .cloned()
                    .collect();

                let nearby: Vec<PointOfInterest> = user_location
                    .filter(Coordinate::is_valid)
                    .map(|location| {
                        nearby_points(points, location, policy.proximity_radius_km)
                            .into_iter()
                            .map(|n| n.point)
                            .collect()
                    })
                    .unwrap_or_default();

                let mode = if nearby.is_empty() {
                    DisplayMode::ClustersOnly
                } else {
                    DisplayMode::Hybrid
                };
                debug!(
                    tier,
                    clusters = visible.len(),
                    nearby = nearby.len(),
                    "intermediate tier"
                );
                return Ok(DisplayInstruction {
                    tier,
                    mode,
                    clusters: visible,
                    points: nearby,
                });
            }
            TierClass::Fine => {
                let visible: Vec<PointOfInterest> = points
                    .iter()
                    .filter(|p| p.valid_coordinate().is_some_and(|c| padded.contains(c)))
                    .cloned()
                    .collect();

                if visible.len() > policy.density_ceiling && tier > 0 {
                    warn!(
                        tier,
                        visible = visible.len(),
                        ceiling = policy.density_ceiling,
                        "density ceiling exceeded; falling back one tier"
                    );
                    tier -= 1;
                    continue;
                }

                debug!(tier, points = visible.len(), "fine tier: individual points");
                return Ok(DisplayInstruction {
                    tier,
                    mode: DisplayMode::IndividualOnly,
                    clusters: Vec::new(),
                    points: visible,
                });
            }
        }
    }
}
