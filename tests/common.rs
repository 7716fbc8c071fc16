use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn pathsearch() -> Command {
    cargo_bin_cmd!("pathsearch")
}

/// The five-node example: 0->1 (2), 0->2 (5), 1->3 (1), 3->4 (2), 2->4 (1)
pub const SAMPLE_MATRIX: &str = "\
5
0 2 5 0 0
0 0 0 1 0
0 0 0 0 1
0 0 0 0 2
0 0 0 0 0
";

/// Write `content` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write fixture");
    path
}

#[allow(dead_code)]
pub fn write_sample_matrix(dir: &Path) -> PathBuf {
    write_file(dir, "graph.txt", SAMPLE_MATRIX)
}
