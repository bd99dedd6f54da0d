//! Blocking Jira REST client

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use super::convert::Converter;
use super::credentials::Credentials;
use super::wire::{SearchPage, WireComponent, WireIssue};
use super::IssueSource;
use crate::domain::{Config, Issue};

const PAGE_SIZE: u64 = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum JiraError {
    #[error("Invalid Jira instance URL '{0}'")]
    InvalidUrl(String),

    #[error("Request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}: {body}")]
    Status { url: String, status: StatusCode, body: String },

    #[error("Invalid response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub struct JiraClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
    converter: Converter,
}

impl JiraClient {
    pub fn new(config: &Config, credentials: Credentials) -> Result<Self, JiraError> {
        let base_url = config.instance.url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(JiraError::InvalidUrl(config.instance.url.clone()));
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("jiracsv/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| JiraError::Transport { url: base_url.clone(), source })?;

        Ok(Self { http, base_url, credentials, converter: Converter::from_config(config) })
    }

    /// Run a JQL search, following pagination until every match is read.
    pub fn search(&self, jql: &str, fields: &[String]) -> Result<Vec<WireIssue>, JiraError> {
        let fields = fields.join(",");
        let mut issues = Vec::new();
        let mut start_at: u64 = 0;

        loop {
            let page: SearchPage = self.get_json(
                "/rest/api/2/search",
                &[
                    ("jql", jql.to_string()),
                    ("fields", fields.clone()),
                    ("startAt", start_at.to_string()),
                    ("maxResults", PAGE_SIZE.to_string()),
                ],
            )?;

            let received = page.issues.len() as u64;
            tracing::debug!(
                "Search page at {} returned {} of {} issues",
                start_at,
                received,
                page.total
            );
            issues.extend(page.issues);
            start_at += received;

            if received == 0 || start_at >= page.total {
                break;
            }
        }

        Ok(issues)
    }

    fn children_jql(&self, epic_key: &str) -> String {
        format!("\"{}\" = {}", self.converter.fields().epic_link, epic_key)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, JiraError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.get(&url).query(query);
        if let Some(username) = self.credentials.username() {
            request = request.basic_auth(username, self.credentials.password());
        }

        let transport = |source| JiraError::Transport { url: url.clone(), source };
        let response = request.send().map_err(transport)?;
        let status = response.status();
        let body = response.text().map_err(transport)?;

        if !status.is_success() {
            return Err(JiraError::Status { url, status, body: truncate(&body, 300) });
        }

        serde_json::from_str(&body).map_err(|source| JiraError::Decode { url, source })
    }
}

impl IssueSource for JiraClient {
    fn fetch_epics(&self, jql: &str) -> anyhow::Result<Vec<Issue>> {
        let fields = self.converter.fields().requested();
        let epics = self.search(jql, &fields)?;
        tracing::info!("Found {} epics", epics.len());

        let mut issues = Vec::with_capacity(epics.len());
        for epic in &epics {
            let children = self.search(&self.children_jql(&epic.key), &fields)?;
            tracing::debug!("{} has {} linked issues", epic.key, children.len());
            let linked = children.iter().map(|c| self.converter.linked(c)).collect();
            issues.push(self.converter.epic(epic, linked));
        }
        Ok(issues)
    }

    fn fetch_components(&self, project: &str) -> anyhow::Result<Vec<String>> {
        let components: Vec<WireComponent> =
            self.get_json(&format!("/rest/api/2/project/{}/components", project), &[])?;
        tracing::info!("Project {} declares {} components", project, components.len());
        Ok(components.into_iter().map(|c| c.name).collect())
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        trimmed.to_string()
    } else {
        format!("{}...", trimmed.chars().take(max_chars).collect::<String>())
    }
}
