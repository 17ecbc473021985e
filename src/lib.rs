//! Shop Efficiency: repair overrun and mechanic efficiency reports
//!
//! Reads three comma-separated sources (repair jobs, the repair type catalog,
//! and mechanics), cross-references them by key, and reports which jobs ran
//! over their estimated time and which mechanic has the best net efficiency.

pub mod cli;
pub mod core;
pub mod entities;
