#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wt() -> Command {
    cargo_bin_cmd!("worktime")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worktime.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and fill Monday with the reference stamps used by many tests
pub fn init_db_with_data(db_path: &str) {
    wt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    wt().args([
        "--db", db_path, "set", "mon", "--entry1", "07:25", "--exit1", "12:22", "--entry2",
        "13:10", "--exit2", "16:32",
    ])
    .assert()
    .success();
}
