//! Linked-issue filtering and progress rollups

pub mod calculator;
pub mod filter;

pub use calculator::{Ratio, Rollup};
pub use filter::LinkedSet;
