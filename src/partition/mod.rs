//! Grouping of epics into component buckets

use std::collections::BTreeMap;

use crate::domain::Issue;

/// Epics grouped by declared component.
///
/// Buckets are keyed by component name and iterate in lexicographic order. An
/// epic with several components is listed in each of their buckets; an epic
/// with none goes to `unassigned`. Epics keep their fetch order inside a bucket.
#[derive(Debug, Clone, Default)]
pub struct ComponentPartition<'a> {
    buckets: BTreeMap<String, Vec<&'a Issue>>,
    unassigned: Vec<&'a Issue>,
}

impl<'a> ComponentPartition<'a> {
    /// Seed one empty bucket per name so components without epics still show up.
    pub fn new<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut partition = Self::default();
        for name in seeds {
            partition.seed(name.as_ref());
        }
        partition
    }

    pub fn seed(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() {
            self.buckets.entry(name.to_string()).or_default();
        }
    }

    pub fn add_issue(&mut self, issue: &'a Issue) {
        if issue.is_unassigned() {
            self.unassigned.push(issue);
            return;
        }
        for component in &issue.components {
            self.buckets.entry(component.clone()).or_default().push(issue);
        }
    }

    pub fn add_issues(&mut self, issues: &'a [Issue]) {
        for issue in issues {
            self.add_issue(issue);
        }
    }

    pub fn buckets(&self) -> impl Iterator<Item = (&str, &[&'a Issue])> + '_ {
        self.buckets.iter().map(|(name, issues)| (name.as_str(), issues.as_slice()))
    }

    pub fn unassigned(&self) -> &[&'a Issue] {
        &self.unassigned
    }

    pub fn component_count(&self) -> usize {
        self.buckets.len()
    }
}

/// Partition `epics` with one pre-seeded bucket per `known` component.
pub fn partition<'a, S: AsRef<str>>(epics: &'a [Issue], known: &[S]) -> ComponentPartition<'a> {
    let mut partition = ComponentPartition::new(known);
    partition.add_issues(epics);
    partition
}
