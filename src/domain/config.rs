//! Configuration model: tracker instance, field mapping and search profiles

use serde::Deserialize;
use std::fmt;

use super::status::StatusSets;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub instance: Instance,
    pub fields: FieldMap,
    pub statuses: StatusSets,
    pub approvals: ApprovalRules,
    pub profiles: Vec<Profile>,
}

impl Config {
    pub fn find_profile(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Instance {
    pub url: String,
    pub username: Option<String>,
}

impl Instance {
    /// Human link to an issue on this instance.
    pub fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.url.trim_end_matches('/'), key)
    }
}

/// Jira field ids for data that lives in custom fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldMap {
    pub story_points: Option<String>,
    pub owner: Option<String>,
    pub qa_contact: Option<String>,
    pub approvals: Option<String>,
    /// JQL name of the field linking a child issue to its epic.
    pub epic_link: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            story_points: None,
            owner: None,
            qa_contact: None,
            approvals: None,
            epic_link: "Epic Link".to_string(),
        }
    }
}

impl FieldMap {
    /// Field ids to request from the search endpoint, standard fields first.
    pub fn requested(&self) -> Vec<String> {
        let mut fields: Vec<String> = [
            "summary",
            "issuetype",
            "priority",
            "status",
            "resolution",
            "assignee",
            "components",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        for custom in [&self.story_points, &self.owner, &self.qa_contact, &self.approvals]
            .into_iter()
            .flatten()
        {
            if !fields.contains(custom) {
                fields.push(custom.clone());
            }
        }
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ApprovalRules {
    pub required: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub id: String,
    pub jql: String,
    pub project: Option<String>,
    /// Also seed one bucket per component the project declares in Jira.
    pub seed_from_project: bool,
    pub style: OutputStyle,
    pub components: ComponentRules,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ComponentRules {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// How links and progress cells are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Plain text: browse URLs and `[###-------] 3/10` bars.
    #[default]
    Plain,
    /// Google Sheets formulas: `=HYPERLINK(...)` and `=SPARKLINE(...)`.
    Sheets,
}

impl OutputStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputStyle::Plain => "plain",
            OutputStyle::Sheets => "sheets",
        }
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
