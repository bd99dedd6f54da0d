//! Component-grouped epic report

use std::collections::BTreeSet;
use std::io::{self, Write};

use super::cells;
use super::tsv::TsvWriter;
use crate::domain::{Issue, OutputStyle, UNASSIGNED_HEADER};
use crate::partition::ComponentPartition;
use crate::rollup::Rollup;

/// One epic line: link, summary, type, priority, status, owner, contact,
/// approval mark, issue progress, story-point progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpicRow {
    pub cells: [String; 10],
}

impl EpicRow {
    pub fn build(epic: &Issue, component: Option<&str>, style: OutputStyle) -> Self {
        let rollup = Rollup::for_epic(epic, component);
        Self {
            cells: [
                cells::link(style, &epic.link, &epic.key),
                epic.summary.clone(),
                epic.issue_type.clone(),
                epic.priority.clone(),
                epic.status.clone(),
                epic.owner.clone(),
                epic.contact().to_string(),
                cells::mark(rollup.approved),
                cells::progress(style, &rollup.issues),
                cells::progress(style, &rollup.points),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRow {
    Header(String),
    Epic(EpicRow),
}

impl ReportRow {
    pub fn cells(&self) -> Vec<&str> {
        match self {
            ReportRow::Header(title) => vec![title.as_str()],
            ReportRow::Epic(row) => row.cells.iter().map(String::as_str).collect(),
        }
    }
}

/// A header plus the epics listed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub epics: Vec<EpicRow>,
}

impl Section {
    pub fn rows(&self) -> impl Iterator<Item = ReportRow> + '_ {
        std::iter::once(ReportRow::Header(self.title.clone()))
            .chain(self.epics.iter().cloned().map(ReportRow::Epic))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportSummary {
    pub sections: usize,
    pub epic_rows: usize,
    pub skipped_components: usize,
}

/// Renders a partition into sections: every non-excluded component in name
/// order, then the unassigned section last.
pub struct ReportRenderer<'p, 'a> {
    partition: &'p ComponentPartition<'a>,
    exclude: BTreeSet<String>,
    style: OutputStyle,
}

impl<'p, 'a> ReportRenderer<'p, 'a> {
    pub fn new<I, S>(partition: &'p ComponentPartition<'a>, exclude: I, style: OutputStyle) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exclude = exclude
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self { partition, exclude, style }
    }

    pub fn is_excluded(&self, component: &str) -> bool {
        self.exclude.contains(component)
    }

    pub fn sections(&self) -> Vec<Section> {
        self.plan()
            .into_iter()
            .map(|(title, epics, component)| self.section(title, epics, component))
            .collect()
    }

    pub fn rows(&self) -> Vec<ReportRow> {
        self.sections().iter().flat_map(Section::rows).collect()
    }

    /// Stream the report, flushing after every section so large reports show
    /// up progressively.
    pub fn write_to<W: Write>(&self, out: &mut TsvWriter<W>) -> io::Result<ReportSummary> {
        let plan = self.plan();
        let mut summary = ReportSummary {
            skipped_components: self.partition.component_count() + 1 - plan.len(),
            ..ReportSummary::default()
        };

        for (title, epics, component) in plan {
            let section = self.section(title, epics, component);
            tracing::debug!("Writing section {} ({} epics)", section.title, section.epics.len());
            for row in section.rows() {
                out.write_row(row.cells().as_slice())?;
            }
            out.flush()?;
            summary.sections += 1;
            summary.epic_rows += section.epics.len();
        }

        Ok(summary)
    }

    /// Sections to emit, in order, as `(title, epics, component filter)`.
    fn plan(&self) -> Vec<(&str, &[&'a Issue], Option<&str>)> {
        let mut plan: Vec<(&str, &[&'a Issue], Option<&str>)> = self
            .partition
            .buckets()
            .filter(|(name, _)| !self.is_excluded(name))
            .map(|(name, epics)| (name, epics, Some(name)))
            .collect();
        plan.push((UNASSIGNED_HEADER, self.partition.unassigned(), None));
        plan
    }

    fn section(&self, title: &str, epics: &[&Issue], component: Option<&str>) -> Section {
        Section {
            title: title.to_string(),
            epics: epics.iter().map(|epic| EpicRow::build(epic, component, self.style)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LinkedIssue, StatusSets};
    use crate::partition::partition;

    fn linked(key: &str, status: &str, points: f64, components: &[&str]) -> LinkedIssue {
        LinkedIssue::new(
            key,
            status,
            None,
            Some(points),
            components.iter().map(|c| c.to_string()),
            &StatusSets::default(),
        )
    }

    fn epic(key: &str, components: &[&str], linked: Vec<LinkedIssue>) -> Issue {
        let mut issue = Issue::new(key, format!("https://jira/browse/{key}"))
            .with_components(components.iter().map(|c| c.to_string()))
            .with_linked(linked);
        issue.summary = format!("{key} summary");
        issue.issue_type = "Epic".to_string();
        issue.priority = "Major".to_string();
        issue.status = "In Progress".to_string();
        issue.owner = "owner".to_string();
        issue.assignee = "dev".to_string();
        issue
    }

    fn fixture() -> Vec<Issue> {
        vec![
            epic(
                "EPIC-1",
                &["Core"],
                vec![
                    linked("S-1", "Done", 2.0, &["Core"]),
                    linked("S-2", "Done", 3.0, &["Core"]),
                    linked("S-3", "Obsolete", 1.0, &["Core"]),
                ],
            ),
            epic(
                "EPIC-2",
                &[],
                vec![
                    linked("S-4", "Done", 1.0, &["Core"]),
                    linked("S-5", "To Do", 2.0, &["UI"]),
                    linked("S-6", "Obsolete", 4.0, &[]),
                ],
            ),
            epic("EPIC-3", &["Legacy"], vec![linked("S-7", "Done", 1.0, &["Legacy"])]),
        ]
    }

    fn titles(rows: &[ReportRow]) -> Vec<String> {
        rows.iter()
            .filter_map(|r| match r {
                ReportRow::Header(t) => Some(t.clone()),
                ReportRow::Epic(_) => None,
            })
            .collect()
    }

    fn epic_row<'r>(rows: &'r [ReportRow], key: &str) -> Vec<&'r EpicRow> {
        rows.iter()
            .filter_map(|r| match r {
                ReportRow::Epic(e) if e.cells[0].ends_with(key) => Some(e),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn component_epic_row_shape() {
        let epics = fixture();
        let p = partition(&epics, &["Core"]);
        let rows = ReportRenderer::new(&p, Vec::<String>::new(), OutputStyle::Plain).rows();

        let core = epic_row(&rows, "EPIC-1");
        assert_eq!(core.len(), 1);
        assert_eq!(
            core[0].cells,
            [
                "https://jira/browse/EPIC-1".to_string(),
                "EPIC-1 summary".to_string(),
                "Epic".to_string(),
                "Major".to_string(),
                "In Progress".to_string(),
                "owner".to_string(),
                "dev".to_string(),
                String::new(),
                "[##########] 2/2".to_string(),
                "[##########] 5/5".to_string(),
            ]
        );
    }

    #[test]
    fn unassigned_epic_counts_every_relevant_issue() {
        let epics = fixture();
        let p = partition(&epics, &["Core"]);
        let rows = ReportRenderer::new(&p, Vec::<String>::new(), OutputStyle::Plain).rows();

        let unassigned = epic_row(&rows, "EPIC-2");
        assert_eq!(unassigned.len(), 1);
        assert_eq!(unassigned[0].cells[8], "[#####-----] 1/2");
        assert_eq!(unassigned[0].cells[9], "[###-------] 1/3");

        let last_header = titles(&rows).pop();
        assert_eq!(last_header.as_deref(), Some(UNASSIGNED_HEADER));
        assert!(matches!(rows.last(), Some(ReportRow::Epic(e)) if e.cells[0].ends_with("EPIC-2")));
    }

    #[test]
    fn excluded_component_disappears_entirely() {
        let epics = fixture();
        let p = partition(&epics, &["Core", "Legacy"]);

        let all = ReportRenderer::new(&p, Vec::<String>::new(), OutputStyle::Plain).rows();
        let filtered = ReportRenderer::new(&p, ["Legacy"], OutputStyle::Plain).rows();

        assert_eq!(titles(&all), vec!["Core", "Legacy", UNASSIGNED_HEADER]);
        assert_eq!(titles(&filtered), vec!["Core", UNASSIGNED_HEADER]);
        assert!(epic_row(&filtered, "EPIC-3").is_empty());

        let without_legacy: Vec<ReportRow> = all
            .iter()
            .filter(|r| match r {
                ReportRow::Header(t) => t != "Legacy",
                ReportRow::Epic(e) => !e.cells[0].ends_with("EPIC-3"),
            })
            .cloned()
            .collect();
        assert_eq!(filtered, without_legacy);
    }

    #[test]
    fn empty_seeded_component_still_has_header() {
        let epics = fixture();
        let p = partition(&epics, &["Docs"]);
        let rows = ReportRenderer::new(&p, Vec::<String>::new(), OutputStyle::Plain).rows();
        assert_eq!(titles(&rows), vec!["Core", "Docs", "Legacy", UNASSIGNED_HEADER]);
    }

    #[test]
    fn empty_unassigned_section_still_has_header() {
        let epics = vec![epic("EPIC-1", &["Core"], Vec::new())];
        let p = partition::<&str>(&epics, &[]);
        let rows = ReportRenderer::new(&p, Vec::<String>::new(), OutputStyle::Plain).rows();
        assert_eq!(rows.last(), Some(&ReportRow::Header(UNASSIGNED_HEADER.to_string())));
        let row = epic_row(&rows, "EPIC-1");
        assert_eq!(row[0].cells[8], cells::NO_DATA);
        assert_eq!(row[0].cells[9], cells::NO_DATA);
    }

    #[test]
    fn write_to_is_deterministic() {
        let epics = fixture();
        let render = || {
            let p = partition(&epics, &["Core", "Docs"]);
            let renderer = ReportRenderer::new(&p, ["Legacy"], OutputStyle::Sheets);
            let mut out = TsvWriter::new(Vec::new());
            let summary = renderer.write_to(&mut out).unwrap();
            (String::from_utf8(out.into_inner()).unwrap(), summary)
        };

        let (first, summary) = render();
        let (second, _) = render();
        assert_eq!(first, second);
        assert_eq!(
            summary,
            ReportSummary { sections: 3, epic_rows: 2, skipped_components: 1 }
        );
        assert!(first.starts_with("Core\n=HYPERLINK(\"https://jira/browse/EPIC-1\",\"EPIC-1\")\t"));
        assert!(first.contains("\nDocs\n[UNASSIGNED]\n"));
        assert!(!first.contains("EPIC-3"));
    }
}
