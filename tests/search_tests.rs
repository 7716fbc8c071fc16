//! Integration tests for `pathsearch search`

mod common;

use common::{pathsearch, write_file, write_sample_matrix};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_search_defaults_to_graph_txt_and_all_strategies() {
    let dir = tempdir().unwrap();
    write_sample_matrix(dir.path());

    pathsearch()
        .current_dir(dir.path())
        .arg("search")
        .assert()
        .success()
        .stdout(predicate::str::contains("Searching 0 -> 4 (5 nodes, 5 edges)"))
        .stdout(predicate::str::contains("Iterative search (stack)"))
        .stdout(predicate::str::contains("Breadth-first search (queue)"))
        .stdout(predicate::str::contains(
            "Uniform cost search (priority queue)",
        ))
        .stdout(predicate::str::contains("Shortest path: 0 1 3 4"))
        .stdout(predicate::str::contains("Number of hops: 3"))
        .stdout(predicate::str::contains("Total cost: 5"))
        .stdout(predicate::str::contains("Time taken:"));
}

#[test]
fn test_search_explicit_file_and_endpoints() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "tiny.txt", "3\n0 1 9\n0 0 1\n0 0 0\n");

    pathsearch()
        .arg("search")
        .arg(&path)
        .args(["--from", "0", "--to", "2", "--strategy", "priority"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shortest path: 0 1 2"))
        .stdout(predicate::str::contains("Total cost: 2"))
        .stdout(predicate::str::contains("Nodes pushed: 4"))
        .stdout(predicate::str::contains("Iterative search").not());
}

#[test]
fn test_search_unreachable_target_is_not_an_error() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "graph.txt", "3\n0 1 0\n1 0 0\n0 0 0\n");

    pathsearch()
        .current_dir(dir.path())
        .args(["search", "--to", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shortest path: unreachable"))
        .stdout(predicate::str::contains("Total cost: inf"))
        .stdout(predicate::str::contains("Number of hops: -"));
}

#[test]
fn test_search_source_equals_target() {
    let dir = tempdir().unwrap();
    write_sample_matrix(dir.path());

    pathsearch()
        .current_dir(dir.path())
        .args(["--format", "records", "search", "--from", "3", "--to", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "R strategy=queue reachable=true cost=0 hops=0 pushed=1 popped=1",
        ));
}

#[test]
fn test_search_json_output() {
    let dir = tempdir().unwrap();
    write_sample_matrix(dir.path());

    let output = pathsearch()
        .current_dir(dir.path())
        .args(["--format", "json", "search", "-s", "priority", "-s", "stack"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"], 5);
    assert_eq!(json["source"], 0);
    assert_eq!(json["target"], 4);

    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["strategy"], "priority");
    assert_eq!(results[1]["strategy"], "stack");
    assert_eq!(results[0]["path"], serde_json::json!([0, 1, 3, 4]));
    assert_eq!(results[0]["hops"], 3);
    assert_eq!(results[0]["total_cost"], 5);
    assert_eq!(results[0]["reachable"], true);
    assert!(results[0]["stats"]["elapsed_secs"].is_number());
    assert_eq!(results[1]["stats"]["nodes_pushed"], 6);
}

#[test]
fn test_search_json_unreachable_cost_is_null() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "graph.txt", "2\n0 0\n0 0\n");

    let output = pathsearch()
        .current_dir(dir.path())
        .args(["--format", "json", "search", "--strategy", "queue"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let result = &json["results"][0];
    assert_eq!(result["reachable"], false);
    assert!(result["total_cost"].is_null());
    assert!(result["hops"].is_null());
    assert_eq!(result["path"], serde_json::json!([]));
}

#[test]
fn test_search_records_output() {
    let dir = tempdir().unwrap();
    write_sample_matrix(dir.path());

    pathsearch()
        .current_dir(dir.path())
        .args(["--format", "records", "search"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H pathsearch=1 records=1 mode=search nodes=5 edges=5 from=0 to=4 runs=3",
        ))
        .stdout(predicate::str::contains("R strategy=stack"))
        .stdout(predicate::str::contains("R strategy=queue"))
        .stdout(predicate::str::contains("path=0,1,3,4"));
}

#[test]
fn test_search_out_of_range_node() {
    let dir = tempdir().unwrap();
    write_sample_matrix(dir.path());

    pathsearch()
        .current_dir(dir.path())
        .args(["search", "--to", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("node 9 out of range"));
}

#[test]
fn test_search_malformed_matrix() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "graph.txt", "2\n0 x\n0 0\n");

    pathsearch()
        .current_dir(dir.path())
        .arg("search")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed input"))
        .stderr(predicate::str::contains("'x'"));
}

#[test]
fn test_search_missing_default_file() {
    let dir = tempdir().unwrap();

    pathsearch()
        .current_dir(dir.path())
        .arg("search")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input file not found"))
        .stderr(predicate::str::contains("graph.txt"));
}

#[test]
fn test_search_non_utf8_matrix_is_malformed() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("graph.txt"), b"2\n0 1\n\xff 0\n").unwrap();

    pathsearch()
        .current_dir(dir.path())
        .args(["--format", "json", "search"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"malformed_input\""));
}

#[test]
fn test_search_rejects_weight_above_maximum() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "graph.txt", "2\n0 18446744073709551615\n0 0\n");

    pathsearch()
        .current_dir(dir.path())
        .arg("search")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("exceeds the maximum"));
}
