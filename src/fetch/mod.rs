//! Issue fetching from the tracker

use anyhow::Result;

use crate::domain::Issue;

pub mod convert;
pub mod credentials;
pub mod jira;
pub mod wire;

pub use credentials::Credentials;
pub use jira::{JiraClient, JiraError};

/// Source of epics and project components.
///
/// Implementations return epics with their linked issues already resolved.
/// Any error aborts the whole report.
pub trait IssueSource {
    fn fetch_epics(&self, jql: &str) -> Result<Vec<Issue>>;

    fn fetch_components(&self, project: &str) -> Result<Vec<String>>;
}
