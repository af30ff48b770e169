//! Deployment-tunable policy for level-of-detail decisions.
//!
//! Tier cutoffs, proximity radius, density ceiling and padding are
//! configuration data supplied at construction, never embedded constants.
use crate::error::{Error, Result};
use crate::lod::ZoomTier;

/// Behavior class of a zoom tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierClass {
    /// Render all clusters, no individual points.
    Coarse,
    /// Render visible clusters, optionally nearby points.
    Intermediate,
    /// Render individually visible points, no clusters.
    Fine,
}

/// Policy for [crate::lod::select].
///
/// The latitude span of the viewport is mapped to a tier through
/// `span_cutoffs`: an ordered, strictly descending table where a span larger
/// than `span_cutoffs[i]` lands in tier `i`, and a span at or below the last
/// cutoff lands in the finest tier `span_cutoffs.len()`.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct LodPolicy {
    /// Latitude-span cutoffs in degrees, strictly descending.
    pub span_cutoffs: Vec<f64>,
    /// Number of coarsest tiers rendered as clusters-only.
    pub coarse_tiers: usize,
    /// Number of finest tiers rendered as individual points.
    pub fine_tiers: usize,
    /// Radius in kilometers for surfacing points near the user's location.
    pub proximity_radius_km: f64,
    /// Maximum individually visible points before falling back a tier.
    pub density_ceiling: usize,
    /// Fraction added to each viewport edge when filtering to bounds, so
    /// content just off-screen is ready while panning.
    pub padding_fraction: f64,
}

impl Default for LodPolicy {
    fn default() -> Self {
        // World / region / city / street.
        Self {
            span_cutoffs: vec![20.0, 5.0, 0.5],
            coarse_tiers: 1,
            fine_tiers: 1,
            proximity_radius_km: 10.0,
            density_ceiling: 200,
            padding_fraction: 0.05,
        }
    }
}

impl LodPolicy {
    pub fn new(span_cutoffs: Vec<f64>) -> Self {
        Self {
            span_cutoffs,
            ..Default::default()
        }
    }

    /// Sets the number of coarsest clusters-only tiers.
    pub fn with_coarse_tiers(mut self, coarse_tiers: usize) -> Self {
        self.coarse_tiers = coarse_tiers;
        self
    }

    /// Sets the number of finest individual-only tiers.
    pub fn with_fine_tiers(mut self, fine_tiers: usize) -> Self {
        self.fine_tiers = fine_tiers;
        self
    }

    /// Sets the user-proximity radius in kilometers.
    pub fn with_proximity_radius_km(mut self, proximity_radius_km: f64) -> Self {
        self.proximity_radius_km = proximity_radius_km;
        self
    }

    /// Sets the density ceiling.
    pub fn with_density_ceiling(mut self, density_ceiling: usize) -> Self {
        self.density_ceiling = density_ceiling;
        self
    }

    /// Sets the bounds padding fraction.
    pub fn with_padding_fraction(mut self, padding_fraction: f64) -> Self {
        self.padding_fraction = padding_fraction;
        self
    }

    /// Validates the policy, returning an error if invalid.
    ///
    /// Inverted or non-finite cutoffs and overlapping tier bands are caller
    /// programming errors and fail loudly.
    pub fn validate(&self) -> Result<()> {
        if self.span_cutoffs.is_empty() {
            return Err(Error::InvalidPolicy("span_cutoffs must not be empty".into()));
        }
        for cutoff in &self.span_cutoffs {
            if !(cutoff.is_finite() && *cutoff > 0.0) {
                return Err(Error::InvalidPolicy(format!(
                    "span cutoff {cutoff} must be positive and finite"
                )));
            }
        }
        for pair in self.span_cutoffs.windows(2) {
            if pair[1] >= pair[0] {
                return Err(Error::InvalidPolicy(format!(
                    "span_cutoffs must be strictly descending, got {} before {}",
                    pair[0], pair[1]
                )));
            }
        }
        if self.coarse_tiers == 0 || self.fine_tiers == 0 {
            return Err(Error::InvalidPolicy(
                "coarse_tiers and fine_tiers must each cover at least one tier".into(),
            ));
        }
        if self.coarse_tiers + self.fine_tiers > self.tier_count() {
            return Err(Error::InvalidPolicy(format!(
                "coarse_tiers ({}) + fine_tiers ({}) exceed the {} available tiers",
                self.coarse_tiers,
                self.fine_tiers,
                self.tier_count()
            )));
        }
        if !(self.proximity_radius_km >= 0.0 && self.proximity_radius_km.is_finite()) {
            return Err(Error::InvalidPolicy(format!(
                "proximity_radius_km must be non-negative and finite, got {}",
                self.proximity_radius_km
            )));
        }
        if self.density_ceiling == 0 {
            return Err(Error::InvalidPolicy("density_ceiling must be at least 1".into()));
        }
        if !(self.padding_fraction >= 0.0 && self.padding_fraction.is_finite()) {
            return Err(Error::InvalidPolicy(format!(
                "padding_fraction must be non-negative and finite, got {}",
                self.padding_fraction
            )));
        }
        Ok(())
    }

    /// Total number of tiers described by the cutoff table.
    pub fn tier_count(&self) -> usize {
        self.span_cutoffs.len() + 1
    }

    /// Maps a viewport latitude span to its tier. Smaller spans land in
    /// closer (higher-index) tiers.
    pub fn tier_for_span(&self, latitude_span: f64) -> ZoomTier {
        self.span_cutoffs
            .iter()
            .position(|cutoff| latitude_span > *cutoff)
            .unwrap_or(self.span_cutoffs.len())
    }

    /// Behavior class of a tier.
    pub fn class_of(&self, tier: ZoomTier) -> TierClass {
        if tier < self.coarse_tiers {
            TierClass::Coarse
        } else if tier + self.fine_tiers >= self.tier_count() {
            TierClass::Fine
        } else {
            TierClass::Intermediate
        }
    }
}
