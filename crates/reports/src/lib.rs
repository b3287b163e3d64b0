//! Presentation adapter: turns query outcomes into fixed-width text reports.

pub mod report;
pub mod table;

pub use report::{format_report, render};
