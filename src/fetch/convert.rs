//! Conversion from raw Jira issues to the domain model

use super::wire::WireIssue;
use crate::domain::{
    derive_owner, Approvals, Config, FieldMap, Instance, Issue, LinkedIssue, StatusSets,
};

/// Everything needed to turn a [`WireIssue`] into an [`Issue`] or
/// [`LinkedIssue`].
#[derive(Debug, Clone)]
pub struct Converter {
    instance: Instance,
    fields: FieldMap,
    statuses: StatusSets,
    required_approvals: Vec<String>,
}

impl Converter {
    pub fn from_config(config: &Config) -> Self {
        Self {
            instance: config.instance.clone(),
            fields: config.fields.clone(),
            statuses: config.statuses.clone(),
            required_approvals: config.approvals.required.clone(),
        }
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn epic(&self, wire: &WireIssue, linked: Vec<LinkedIssue>) -> Issue {
        let assignee = wire.text("assignee");
        let owner = derive_owner(wire.optional_text(self.fields.owner.as_deref()), &assignee);
        let granted = self.fields.approvals.as_deref().map(|id| wire.names(id)).unwrap_or_default();

        let mut issue = Issue::new(wire.key.clone(), self.instance.browse_url(&wire.key))
            .with_components(wire.names("components"))
            .with_linked(linked);
        issue.summary = wire.text("summary");
        issue.issue_type = wire.text("issuetype");
        issue.priority = wire.text("priority");
        issue.status = wire.text("status");
        issue.owner = owner;
        issue.assignee = assignee;
        issue.qa_contact = wire.optional_text(self.fields.qa_contact.as_deref());
        issue.approvals = Approvals::new(granted, self.required_approvals.iter().cloned());

        if !issue.approvals.approved() {
            tracing::debug!(
                "{} is missing approvals: {}",
                issue.key,
                issue.approvals.missing().collect::<Vec<_>>().join(", ")
            );
        }
        issue
    }

    pub fn linked(&self, wire: &WireIssue) -> LinkedIssue {
        let points = self.fields.story_points.as_deref().and_then(|id| wire.number(id));
        if points.is_some_and(|p| p < 0.0) {
            tracing::warn!("{} has negative story points; counting as zero", wire.key);
        }
        LinkedIssue::new(
            wire.key.clone(),
            wire.text("status"),
            wire.optional_text(Some("resolution")),
            points,
            wire.names("components"),
            &self.statuses,
        )
    }
}
