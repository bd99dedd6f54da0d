//! Epic and linked-issue model

use std::collections::BTreeSet;

use super::status::{IssueState, StatusSets};

/// A child issue referenced by an epic.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedIssue {
    pub key: String,
    pub status: String,
    pub resolution: Option<String>,
    pub state: IssueState,
    pub story_points: f64,
    pub components: BTreeSet<String>,
}

impl LinkedIssue {
    /// Build a linked issue, classifying its status once through `statuses`.
    ///
    /// Missing or negative story points are stored as zero so rollup totals can
    /// never go below zero.
    pub fn new(
        key: impl Into<String>,
        status: impl Into<String>,
        resolution: Option<String>,
        story_points: Option<f64>,
        components: impl IntoIterator<Item = String>,
        statuses: &StatusSets,
    ) -> Self {
        let status = status.into();
        let state = statuses.classify(&status, resolution.as_deref());
        let story_points = story_points.filter(|p| p.is_finite() && *p > 0.0).unwrap_or(0.0);

        Self {
            key: key.into(),
            status,
            resolution,
            state,
            story_points,
            components: normalize_names(components),
        }
    }

    pub fn has_component(&self, name: &str) -> bool {
        self.components.contains(name)
    }
}

/// Acknowledgements granted on an epic, checked against the required set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Approvals {
    pub granted: BTreeSet<String>,
    pub required: BTreeSet<String>,
}

impl Approvals {
    pub fn new(
        granted: impl IntoIterator<Item = String>,
        required: impl IntoIterator<Item = String>,
    ) -> Self {
        Self { granted: normalize_names(granted), required: normalize_names(required) }
    }

    /// With no required acknowledgements configured, any granted one counts.
    pub fn approved(&self) -> bool {
        if self.required.is_empty() {
            !self.granted.is_empty()
        } else {
            self.required.is_subset(&self.granted)
        }
    }

    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.required.difference(&self.granted).map(String::as_str)
    }
}

/// An epic as fetched from the tracker, with its linked issues resolved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Issue {
    pub key: String,
    pub link: String,
    pub summary: String,
    pub issue_type: String,
    pub priority: String,
    pub status: String,
    pub owner: String,
    pub assignee: String,
    pub qa_contact: Option<String>,
    pub approvals: Approvals,
    pub components: BTreeSet<String>,
    pub linked: Vec<LinkedIssue>,
}

impl Issue {
    pub fn new(key: impl Into<String>, link: impl Into<String>) -> Self {
        Self { key: key.into(), link: link.into(), ..Self::default() }
    }

    pub fn with_components(mut self, components: impl IntoIterator<Item = String>) -> Self {
        self.components = normalize_names(components);
        self
    }

    pub fn with_linked(mut self, linked: Vec<LinkedIssue>) -> Self {
        self.linked = linked;
        self
    }

    /// Person shown in the contact column: the QA contact when one is set,
    /// otherwise the assignee.
    pub fn contact(&self) -> &str {
        match self.qa_contact.as_deref() {
            Some(qa) if !qa.is_empty() => qa,
            _ => &self.assignee,
        }
    }

    pub fn is_unassigned(&self) -> bool {
        self.components.is_empty()
    }
}

/// Owner falls back to the assignee when the owner field is empty.
pub fn derive_owner(owner: Option<String>, assignee: &str) -> String {
    match owner {
        Some(o) if !o.trim().is_empty() => o,
        _ => assignee.to_string(),
    }
}

fn normalize_names(names: impl IntoIterator<Item = String>) -> BTreeSet<String> {
    names.into_iter().map(|n| n.trim().to_string()).filter(|n| !n.is_empty()).collect()
}
