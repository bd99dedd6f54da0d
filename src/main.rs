//! jiracsv: roll up Jira epics by component into a tab-separated report

use anyhow::Result;

fn main() -> Result<()> {
    jiracsv::cli::run()
}
