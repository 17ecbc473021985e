//! CLI command implementations

pub mod check;
pub mod completions;
pub mod overruns;
pub mod report;
pub mod standings;
pub mod utils;
