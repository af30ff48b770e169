//! A single match predicate for querying points.
//!
//! Every query path goes through [MatchCriteria::matches] instead of
//! repeating case handling at each call site.
use crate::cluster::PointOfInterest;

/// Criteria for matching a [PointOfInterest].
///
/// All set fields must match. An empty criteria matches everything.
#[derive(Debug, Clone, Default)]
pub struct MatchCriteria {
    /// Case-insensitive substring required in the display name.
    pub name_contains: Option<String>,
    /// Exact administrative group key.
    pub group_key: Option<String>,
    /// Require a structurally valid coordinate.
    pub require_coordinate: bool,
}

impl MatchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the display name to contain `fragment`, case-insensitively.
    pub fn with_name_contains(mut self, fragment: impl Into<String>) -> Self {
        self.name_contains = Some(fragment.into());
        self
    }

    /// Requires an exact group key.
    pub fn with_group_key(mut self, group_key: impl Into<String>) -> Self {
        self.group_key = Some(group_key.into());
        self
    }

    /// Requires a valid coordinate.
    pub fn with_coordinate_required(mut self) -> Self {
        self.require_coordinate = true;
        self
    }

    /// Returns true when the point satisfies every set criterion.
    pub fn matches(&self, point: &PointOfInterest) -> bool {
        if let Some(fragment) = &self.name_contains {
            if !point
                .name
                .to_lowercase()
                .contains(&fragment.to_lowercase())
            {
                return false;
            }
        }
        if let Some(key) = &self.group_key {
            if point.group_key.as_deref() != Some(key.as_str()) {
                return false;
            }
        }
        if self.require_coordinate && point.valid_coordinate().is_none() {
            return false;
        }
        true
    }

    /// Filters a slice down to the matching points, preserving order.
    pub fn filter<'a>(&self, points: &'a [PointOfInterest]) -> Vec<&'a PointOfInterest> {
        points.iter().filter(|p| self.matches(p)).collect()
    }
}
