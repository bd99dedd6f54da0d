//! Core data types shared across the crate

pub mod config;
pub mod issue;
pub mod status;

pub use config::{ApprovalRules, ComponentRules, Config, FieldMap, Instance, OutputStyle, Profile};
pub use issue::{derive_owner, Approvals, Issue, LinkedIssue};
pub use status::{IssueState, StatusSets};

/// Header naming the bucket of epics that declare no component.
pub const UNASSIGNED_HEADER: &str = "[UNASSIGNED]";
