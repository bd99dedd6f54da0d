//! jiracsv: roll up Jira epics by component into a tab-separated report
//!
//! Epics matching a saved search are grouped by component, each epic's linked
//! issues are rolled up into count- and story-point-based progress, and the
//! result is written as TSV ready to paste into a spreadsheet.

pub mod cli;
pub mod config;
pub mod domain;
pub mod fetch;
pub mod partition;
pub mod pipeline;
pub mod render;
pub mod rollup;
