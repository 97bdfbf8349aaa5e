//! Report model, layout and output formatters

pub mod report;
pub mod document;
pub mod formatter;
