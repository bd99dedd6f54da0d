//! Count- and story-point-based completion rollups

use super::filter::LinkedSet;
use crate::domain::Issue;

/// A `done / total` pair. Both sides are non-negative and `done <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ratio {
    pub done: f64,
    pub total: f64,
}

impl Ratio {
    pub fn new(done: f64, total: f64) -> Self {
        let total = total.max(0.0);
        Self { done: done.clamp(0.0, total), total }
    }

    /// A zero denominator has no meaningful ratio and renders as a placeholder.
    pub fn has_data(&self) -> bool {
        self.total > 0.0
    }

    pub fn fraction(&self) -> Option<f64> {
        self.has_data().then(|| self.done / self.total)
    }
}

/// Progress of one epic within one rendering context.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rollup {
    pub issues: Ratio,
    pub points: Ratio,
    pub approved: bool,
}

impl Rollup {
    /// Roll up an already-filtered set of linked issues.
    pub fn from_linked(linked: &LinkedSet<'_>, approved: bool) -> Self {
        let done = linked.done();
        Self {
            issues: Ratio::new(done.len() as f64, linked.len() as f64),
            points: Ratio::new(done.story_points(), linked.story_points()),
            approved,
        }
    }

    /// Roll up `epic` for a component section, or for the unassigned section
    /// when `component` is `None`. Obsolete issues never count.
    pub fn for_epic(epic: &Issue, component: Option<&str>) -> Self {
        let mut linked = LinkedSet::of(&epic.linked).not_obsolete();
        if let Some(name) = component {
            linked = linked.by_component(name);
        }
        Self::from_linked(&linked, epic.approvals.approved())
    }
}
