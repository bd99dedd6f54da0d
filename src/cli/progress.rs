//! Fetch spinner shown on stderr

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

use crate::domain::Issue;
use crate::fetch::IssueSource;

/// Wraps an [`IssueSource`] with a spinner while requests are in flight. The
/// spinner only exists when stderr is a terminal.
pub struct ProgressSource<'a, S: IssueSource> {
    inner: &'a S,
    spinner: Option<ProgressBar>,
}

impl<'a, S: IssueSource> ProgressSource<'a, S> {
    pub fn new(inner: &'a S) -> Self {
        let spinner = std::io::stderr().is_terminal().then(|| {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.enable_steady_tick(Duration::from_millis(120));
            spinner
        });
        Self { inner, spinner }
    }

    pub fn finish(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }

    fn status(&self, message: String) {
        if let Some(spinner) = &self.spinner {
            spinner.set_message(message);
        }
    }
}

impl<S: IssueSource> IssueSource for ProgressSource<'_, S> {
    fn fetch_epics(&self, jql: &str) -> Result<Vec<Issue>> {
        self.status("Fetching epics and linked issues...".to_string());
        let result = self.inner.fetch_epics(jql);
        self.status("Writing report...".to_string());
        result
    }

    fn fetch_components(&self, project: &str) -> Result<Vec<String>> {
        self.status(format!("Fetching components of {}...", project));
        self.inner.fetch_components(project)
    }
}

impl<S: IssueSource> Drop for ProgressSource<'_, S> {
    fn drop(&mut self) {
        self.finish();
    }
}
