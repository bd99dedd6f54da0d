//! Borrowed, filterable views over an epic's linked issues

use crate::domain::{IssueState, LinkedIssue};

/// A filtered view over linked issues.
///
/// Every filter returns a new view and leaves `self` (and the issues it
/// borrows) untouched.
#[derive(Debug, Clone, Default)]
pub struct LinkedSet<'a> {
    items: Vec<&'a LinkedIssue>,
}

impl<'a> LinkedSet<'a> {
    pub fn of(issues: &'a [LinkedIssue]) -> Self {
        Self { items: issues.iter().collect() }
    }

    pub fn not_obsolete(&self) -> Self {
        self.retain(|i| i.state != IssueState::Obsolete)
    }

    /// An empty name applies no filter.
    pub fn by_component(&self, name: &str) -> Self {
        if name.is_empty() {
            return self.clone();
        }
        self.retain(|i| i.has_component(name))
    }

    pub fn done(&self) -> Self {
        self.retain(|i| i.state == IssueState::Done)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn story_points(&self) -> f64 {
        self.items.iter().map(|i| i.story_points).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a LinkedIssue> + '_ {
        self.items.iter().copied()
    }

    fn retain(&self, keep: impl Fn(&LinkedIssue) -> bool) -> Self {
        Self { items: self.items.iter().copied().filter(|i| keep(*i)).collect() }
    }
}
