//! Integration tests for the campus-nav CLI

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Get a Command for campus-nav
fn campus_nav() -> Command {
    cargo_bin_cmd!("campus-nav")
}

/// Square campus A-B-C-D-A with one inaccessible edge (C-D)
const SQUARE: &str = r#"
[[nodes]]
name = "A"
x = 0.0
y = 0.0

[[nodes]]
name = "B"
x = 10.0
y = 0.0

[[nodes]]
name = "C"
x = 10.0
y = 10.0

[[nodes]]
name = "D"
x = 0.0
y = 10.0

[[edges]]
from = "A"
to = "B"
distance = 3
time = 2

[[edges]]
from = "B"
to = "C"
distance = 4
time = 1

[[edges]]
from = "C"
to = "D"
accessible = false

[[edges]]
from = "A"
to = "D"
distance = 2
time = 2
"#;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn square_map() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "campus.toml", SQUARE);
    (dir, path)
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    campus_nav()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: campus-nav"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("animate"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    campus_nav()
        .assert()
        .success()
        .stdout(predicate::str::contains("campus-nav --help"));
}

// ============================================================================
// search
// ============================================================================

#[test]
fn test_search_bfs_human() {
    let (_dir, map) = square_map();
    campus_nav()
        .args(["search", "--from", "A", "--to", "C", "--map"])
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::contains("Route (bfs): A -> B -> C"))
        .stdout(predicate::str::contains("distance 7, time 3"))
        .stdout(predicate::str::contains("Visited: A, B, D, C"))
        .stdout(predicate::str::contains("Discovered: B, D, C"));
}

#[test]
fn test_search_toggle_closed_reroutes() {
    let (_dir, map) = square_map();
    let json = stdout_json(
        campus_nav()
            .args(["--format", "json", "search", "--from", "A", "--to", "C"])
            .args(["--toggle-closed", "C:B", "--map"])
            .arg(&map),
    );
    assert_eq!(json["path"], serde_json::json!(["A", "D", "C"]));
    assert_eq!(json["hops"], 2);
    assert_eq!(json["found"], true);
}

#[test]
fn test_search_accessible_only_unreachable() {
    let (_dir, map) = square_map();
    let json = stdout_json(
        campus_nav()
            .args(["--format", "json", "search", "--from", "A", "--to", "C"])
            .args(["--accessible-only", "--toggle-closed", "B:C", "--map"])
            .arg(&map),
    );
    assert_eq!(json["found"], false);
    assert_eq!(json["path"], serde_json::json!([]));
    assert_eq!(json["hops"], serde_json::Value::Null);
    assert_eq!(json["visitation_order"], serde_json::json!(["A", "B", "D"]));
}

#[test]
fn test_search_dfs() {
    let (_dir, map) = square_map();
    let json = stdout_json(
        campus_nav()
            .args(["--format", "json", "search", "-a", "dfs", "--from", "A", "--to", "D"])
            .arg("--map")
            .arg(&map),
    );
    assert_eq!(json["algorithm"], "dfs");
    assert_eq!(json["path"], serde_json::json!(["A", "B", "C", "D"]));
    assert_eq!(json["totals"]["distance"], 8);
}

#[test]
fn test_search_unknown_node_exit_code_3() {
    let (_dir, map) = square_map();
    campus_nav()
        .args(["search", "--from", "A", "--to", "Nowhere", "--map"])
        .arg(&map)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: Nowhere"));
}

#[test]
fn test_unknown_edge_toggle_json_error() {
    let (_dir, map) = square_map();
    let output = campus_nav()
        .args(["--format", "json", "search", "--from", "A", "--to", "C"])
        .args(["--toggle-closed", "A:C", "--map"])
        .arg(&map)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "unknown_edge");
}

#[test]
fn test_bad_algorithm_exit_code_2() {
    let (_dir, map) = square_map();
    campus_nav()
        .args(["search", "--from", "A", "--to", "C", "-a", "astar", "--map"])
        .arg(&map)
        .assert()
        .code(2);
}

#[test]
fn test_bad_algorithm_json_error() {
    let (_dir, map) = square_map();
    let output = campus_nav()
        .args(["--format", "json", "search", "--from", "A", "--to", "C"])
        .args(["-a", "astar", "--map"])
        .arg(&map)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
    assert!(json["error"]["message"].as_str().unwrap().contains("astar"));
}

#[test]
fn test_version_with_json_format_prints_version() {
    campus_nav()
        .args(["--format", "json", "--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("campus-nav"));
}

#[test]
fn test_invalid_map_exit_code_3() {
    let dir = tempdir().unwrap();
    let map = write_file(
        dir.path(),
        "loop.toml",
        "[[nodes]]\nname = \"A\"\n[[edges]]\nfrom = \"A\"\nto = \"A\"\n",
    );
    campus_nav()
        .args(["search", "--from", "A", "--to", "A", "--map"])
        .arg(&map)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("itself"));
}

#[test]
fn test_missing_map_exit_code_1() {
    let dir = tempdir().unwrap();
    campus_nav()
        .args(["search", "--from", "A", "--to", "B", "--map"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .code(1);
}

// ============================================================================
// neighbors
// ============================================================================

#[test]
fn test_neighbors_sorted_and_filtered() {
    let (_dir, map) = square_map();
    campus_nav()
        .args(["neighbors", "--node", "C", "--map"])
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)^B  distance 4.*\nD  distance 1.*not accessible").unwrap());

    let json = stdout_json(
        campus_nav()
            .args(["--format", "json", "neighbors", "--node", "C", "--accessible-only"])
            .arg("--map")
            .arg(&map),
    );
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["B"]);
}

// ============================================================================
// animate
// ============================================================================

#[test]
fn test_animate_json_phases() {
    let (dir, map) = square_map();
    let config = write_file(
        dir.path(),
        "config.toml",
        "[animation]\nping_interval_ms = 10\nedge_interval_ms = 5\nnode_interval_ms = 1\n",
    );
    let json = stdout_json(
        campus_nav()
            .args(["--format", "json", "--config"])
            .arg(&config)
            .args(["animate", "--from", "A", "--to", "C", "--map"])
            .arg(&map),
    );

    let offsets: Vec<u64> = json["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["offset_ms"].as_u64().unwrap())
        .collect();
    assert_eq!(offsets, vec![0, 10, 20, 30, 30, 35, 40, 41, 42]);

    let final_states: Vec<(String, String)> = json["scene"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["target"].to_string(), s["state"].as_str().unwrap().to_string()))
        .collect();
    assert!(final_states
        .iter()
        .any(|(t, s)| t.contains("\"D\"") && t.contains("node") && s == "node_ping"));
    assert_eq!(
        final_states.iter().filter(|(_, s)| s == "node_route").count(),
        3
    );
    assert_eq!(
        final_states.iter().filter(|(_, s)| s == "edge_route").count(),
        2
    );
}

#[test]
fn test_animate_human_prints_events() {
    let (_dir, map) = square_map();
    campus_nav()
        .args(["animate", "--from", "A", "--to", "B", "--map"])
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::contains("node_ping"))
        .stdout(predicate::str::contains("edge_route         edge A - B"))
        .stdout(predicate::str::contains("Route: A -> B"));
}

#[test]
fn test_invalid_config_exit_code_3() {
    let (dir, map) = square_map();
    let config = write_file(dir.path(), "config.toml", "[weights]\nmin = 0\n");
    campus_nav()
        .arg("--config")
        .arg(&config)
        .args(["randomize", "--map"])
        .arg(&map)
        .assert()
        .code(3);
}

// ============================================================================
// randomize
// ============================================================================

#[test]
fn test_randomize_seeded_is_reproducible() {
    let (_dir, map) = square_map();
    let run = || {
        stdout_json(
            campus_nav()
                .args(["--format", "json", "randomize", "--seed", "17", "--map"])
                .arg(&map),
        )
    };
    let first = run();
    assert_eq!(first, run());

    for edge in first.as_array().unwrap() {
        let distance = edge["distance"].as_u64().unwrap();
        let time = edge["time"].as_u64().unwrap();
        assert!((1..=20).contains(&distance));
        assert!((1..=20).contains(&time));
    }
    // Flags survive randomization
    assert!(first
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e["accessible"] == false));
}

#[test]
fn test_randomize_respects_config_range() {
    let (dir, map) = square_map();
    let config = write_file(dir.path(), "config.toml", "[weights]\nmin = 4\nmax = 4\n");
    campus_nav()
        .arg("--config")
        .arg(&config)
        .args(["randomize", "--map"])
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::contains("A - B  distance 4  time 4"));
}
