use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn weekplan_cmd() -> Command {
    let mut cmd = Command::cargo_bin("weekplan").unwrap();
    cmd.env_remove("WEEKPLAN_LOCALE");
    cmd.env_remove("WEEKPLAN_OFFSET");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
