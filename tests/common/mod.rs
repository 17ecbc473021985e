//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

pub const MECHANICS_HEADER: &str = "id,name,age,time_per_day,complexity_level";
pub const TYPES_HEADER: &str = "id,estimated_time";
pub const JOBS_HEADER: &str =
    "vehicle_id,declared_complexity,repair_type_id,actual_time,entry_date,mechanic_id";

/// Two mechanics; Bo ends up ahead of Ana
pub const MECHANICS: &str = "1,Ana,34,8,4\n2,Bo,29,6,2\n";

pub const TYPES: &str = "10,60\n11,30\n";

/// Ana saves 20h and overruns 30h; Bo saves 10h. One unassigned job and one
/// job pointing at an unknown repair type are left out.
pub const JOBS: &str = "100,2,10,40,2024-03-01,1\n\
                        101,3,10,90,2024-03-02,1\n\
                        102,1,10,50,2024-03-02,2\n\
                        103,1,10,NULL,2024-03-03,NULL\n\
                        104,2,99,500,2024-03-04,2\n";

/// Helper to get a shopeff command
pub fn shopeff() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("shopeff"));
    cmd.env_remove("SHOPEFF_DATA_DIR")
        .env_remove("SHOPEFF_JOBS")
        .env_remove("SHOPEFF_TYPES")
        .env_remove("SHOPEFF_MECHANICS")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to get a shopeff command running inside a data directory
pub fn shopeff_in(tmp: &TempDir) -> Command {
    let mut cmd = shopeff();
    cmd.current_dir(tmp.path());
    cmd
}

/// Write the three sources under their default names, adding headers
pub fn write_sources(tmp: &TempDir, jobs: &str, types: &str, mechanics: &str) {
    fs::write(
        tmp.path().join("repair_jobs.csv"),
        format!("{}\n{}", JOBS_HEADER, jobs),
    )
    .unwrap();
    fs::write(
        tmp.path().join("repair_types.csv"),
        format!("{}\n{}", TYPES_HEADER, types),
    )
    .unwrap();
    fs::write(
        tmp.path().join("mechanics.csv"),
        format!("{}\n{}", MECHANICS_HEADER, mechanics),
    )
    .unwrap();
}

/// Helper to create a data directory with the standard fixture
pub fn setup_sample_data() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_sources(&tmp, JOBS, TYPES, MECHANICS);
    tmp
}
