#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rit() -> Command {
    cargo_bin_cmd!("ritems")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ritems.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    rit()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rit()
        .args(["--db", db_path, "add", "Bread"])
        .assert()
        .success();

    rit()
        .args(["--db", db_path, "add", "Milk"])
        .assert()
        .success();
}
