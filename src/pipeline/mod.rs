//! Fetch, partition and render one report

use anyhow::{Context, Result};
use std::io::Write;

use crate::domain::{OutputStyle, Profile};
use crate::fetch::IssueSource;
use crate::partition::ComponentPartition;
use crate::render::{ReportRenderer, ReportSummary, TsvWriter};

/// Everything a report run needs, resolved once from config and flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPlan {
    pub profile: Profile,
    pub exclude: Vec<String>,
    pub style: OutputStyle,
}

impl ReportPlan {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            profile: profile.clone(),
            exclude: profile.components.exclude.clone(),
            style: profile.style,
        }
    }

    pub fn exclude_more<I: IntoIterator<Item = String>>(mut self, extra: I) -> Self {
        for name in extra {
            if !self.exclude.contains(&name) {
                self.exclude.push(name);
            }
        }
        self
    }

    pub fn with_style(mut self, style: Option<OutputStyle>) -> Self {
        if let Some(style) = style {
            self.style = style;
        }
        self
    }
}

/// Component names to pre-seed: the profile's include list, plus the project's
/// components when the profile asks for them.
pub fn seed_components<S: IssueSource + ?Sized>(source: &S, profile: &Profile) -> Result<Vec<String>> {
    let mut seeds = profile.components.include.clone();

    if profile.seed_from_project {
        match profile.project.as_deref().filter(|p| !p.trim().is_empty()) {
            Some(project) => {
                let known = source
                    .fetch_components(project)
                    .with_context(|| format!("Failed fetching components of project {}", project))?;
                seeds.extend(known);
            }
            None => tracing::warn!(
                "Profile '{}' sets seed_from_project without a project; using include list only",
                profile.id
            ),
        }
    }

    Ok(seeds)
}

/// Run the report. Every fetch happens before the first byte is written, so a
/// failing tracker never leaves a partial report behind.
pub fn run_report<S, W>(source: &S, plan: &ReportPlan, out: W) -> Result<ReportSummary>
where
    S: IssueSource + ?Sized,
    W: Write,
{
    let seeds = seed_components(source, &plan.profile)?;
    let epics = source
        .fetch_epics(&plan.profile.jql)
        .with_context(|| format!("Failed fetching epics for query: {}", plan.profile.jql))?;

    let mut partition = ComponentPartition::new(&seeds);
    partition.add_issues(&epics);
    tracing::debug!(
        "Partitioned {} epics into {} components ({} unassigned)",
        epics.len(),
        partition.component_count(),
        partition.unassigned().len()
    );

    let mut writer = TsvWriter::new(out);
    writer.write_line(&format!("JQL = {}", plan.profile.jql))?;

    let renderer = ReportRenderer::new(&partition, &plan.exclude, plan.style);
    let summary = renderer.write_to(&mut writer).context("Failed writing report")?;
    tracing::info!(
        "Wrote {} sections with {} epic rows ({} components excluded)",
        summary.sections,
        summary.epic_rows,
        summary.skipped_components
    );
    Ok(summary)
}
