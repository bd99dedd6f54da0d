//! Output rendering (cells, report sections, TSV)

pub mod cells;
pub mod report;
pub mod tsv;

pub use report::{EpicRow, ReportRenderer, ReportRow, ReportSummary, Section};
pub use tsv::TsvWriter;
