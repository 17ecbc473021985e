//! Core module - loading, configuration and the efficiency engine

pub mod config;
pub mod engine;
pub mod entity;
pub mod loader;

pub use config::{Config, ConfigError, SourceOverrides, Sources};
pub use engine::{
    compute_report, EfficiencyReport, MechanicTotals, Outcome, OverrunJob, SkipCounts,
};
pub use entity::{Record, Row, NULL_SENTINEL};
pub use loader::{load_file, load_reader, Dataset, LoadError};
