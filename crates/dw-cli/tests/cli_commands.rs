//! Integration tests for the dw-cli binary commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HAMLET: &str = r#"{
    "world": { "name": "Hamlet" },
    "rooms": [
        { "name": "Square", "x": 0, "y": 0, "sector": "crossroads",
          "description": "A muddy square with a well-worn crossroads.",
          "info": { "zone": "Hamlet", "setting": "outdoor" } },
        { "name": "Smithy", "x": 1, "y": 0, "sector": "inside",
          "info": { "zone": "Hamlet" } },
        { "name": "Well", "x": 0, "y": 1, "sector": "plains" },
        { "name": "Lane", "x": 50, "y": 50 },
        { "name": "Cellar", "x": 7, "y": 7 }
    ],
    "exits": [
        { "from": "Square", "to": "Smithy", "label": "east" },
        { "from": "Smithy", "to": "Square", "label": "west" },
        { "from": "Square", "to": "Well", "label": "North" },
        { "from": "Well", "to": "Square", "label": "south" },
        { "from": "Square", "to": "Lane", "label": "west" },
        { "from": "Lane", "to": "Square", "label": "east" },
        { "from": "Smithy", "to": "Cellar", "label": "down" }
    ]
}"#;

/// Create a temp directory holding the hamlet world.
fn test_world() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hamlet.json");
    fs::write(&path, HAMLET).unwrap();
    (dir, path)
}

fn dw() -> Command {
    Command::cargo_bin("dw").unwrap()
}

fn room_xy(doc: &serde_json::Value, name: &str) -> (i64, i64) {
    let room = doc["rooms"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["name"] == name)
        .unwrap();
    (room["x"].as_i64().unwrap(), room["y"].as_i64().unwrap())
}

// ---------------------------------------------------------------------------
// rooms
// ---------------------------------------------------------------------------

#[test]
fn rooms_lists_every_room() {
    let (_dir, path) = test_world();
    dw().args(["rooms", "--world"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Square"))
        .stdout(predicate::str::contains("(50, 50)"))
        .stdout(predicate::str::contains("crossroads"))
        .stdout(predicate::str::contains("5 rooms"));
}

#[test]
fn rooms_filters_by_zone() {
    let (_dir, path) = test_world();
    dw().args(["rooms", "--zone", "hamlet", "--world"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Smithy"))
        .stdout(predicate::str::contains("Lane").not())
        .stdout(predicate::str::contains("2 rooms"));
}

#[test]
fn missing_world_file_fails() {
    dw().args(["rooms", "--world", "/nonexistent/world.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: cannot read"));
}

#[test]
fn malformed_world_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    dw().args(["rooms", "--world"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// map
// ---------------------------------------------------------------------------

#[test]
fn map_draws_default_viewport() {
    let (_dir, path) = test_world();
    dw().args(["map", "square", "--world"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            out.lines().count() == 21 && out.lines().all(|l| l.chars().count() == 41)
        }))
        .stdout(predicate::str::contains("@ - #"))
        .stdout(predicate::str::contains("╬").not());
}

#[test]
fn map_of_indoor_room_uses_indoor_marker() {
    let (_dir, path) = test_world();
    dw().args(["map", "Smithy", "--width", "5", "--height", "5", "--world"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("╬ - &"));
}

#[test]
fn map_rejects_even_dimensions() {
    let (_dir, path) = test_world();
    dw().args(["map", "Square", "--width", "20", "--world"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid map dimensions"));
}

#[test]
fn map_unknown_room_fails() {
    let (_dir, path) = test_world();
    dw().args(["map", "Castle", "--world"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("room not found"));
}

// ---------------------------------------------------------------------------
// look
// ---------------------------------------------------------------------------

#[test]
fn look_shows_description_map_and_coordinates() {
    let (_dir, path) = test_world();
    dw().args(["look", "Square", "--world"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("A muddy square"))
        .stdout(predicate::str::contains("east -> Smithy"))
        .stdout(predicate::str::contains("MAP COORDINATES:"))
        .stdout(predicate::str::contains("(0, 0)"));
}

// ---------------------------------------------------------------------------
// reset-coords
// ---------------------------------------------------------------------------

#[test]
fn reset_coords_rewrites_connected_rooms() {
    let (dir, path) = test_world();
    let out = dir.path().join("reset.json");
    dw().args(["reset-coords", "Square", "--world"])
        .arg(&path)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset coordinates of 4 rooms"));

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(room_xy(&doc, "Square"), (0, 0));
    assert_eq!(room_xy(&doc, "Smithy"), (1, 0));
    assert_eq!(room_xy(&doc, "Well"), (0, 1));
    assert_eq!(room_xy(&doc, "Lane"), (-1, 0));
    assert_eq!(room_xy(&doc, "Cellar"), (7, 7));

    // The input is untouched when --output is given.
    let original: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(room_xy(&original, "Lane"), (50, 50));
}

#[test]
fn reset_coords_overwrites_input_by_default() {
    let (_dir, path) = test_world();
    dw().args(["reset-coords", "Square", "--world"])
        .arg(&path)
        .assert()
        .success();

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(room_xy(&doc, "Lane"), (-1, 0));
}

#[test]
fn reset_coords_is_stable_across_saves() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fork.json");
    fs::write(
        &path,
        r#"{
            "world": { "name": "Fork" },
            "rooms": [ { "name": "A" }, { "name": "B" }, { "name": "C" } ],
            "exits": [
                { "from": "A", "to": "C", "label": "north" },
                { "from": "C", "to": "B", "label": "east" },
                { "from": "A", "to": "B", "label": "east" }
            ]
        }"#,
    )
    .unwrap();

    for _ in 0..2 {
        dw().args(["reset-coords", "A", "--world"])
            .arg(&path)
            .assert()
            .success();
        let doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(room_xy(&doc, "C"), (0, 1));
        assert_eq!(room_xy(&doc, "B"), (1, 1));
    }
}

#[test]
fn reset_coords_propagates_zone() {
    let (_dir, path) = test_world();
    dw().args(["reset-coords", "Square", "--propagate", "zone,setting", "--world"])
        .arg(&path)
        .assert()
        .success();

    dw().args(["rooms", "--zone", "Hamlet", "--world"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Lane"))
        .stdout(predicate::str::contains("4 rooms"));
}

#[test]
fn reset_coords_rejects_unknown_field() {
    let (_dir, path) = test_world();
    dw().args(["reset-coords", "Square", "--propagate", "weather", "--world"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_step_shows_formula() {
    dw().args(["roll", "step", "8", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("step 8 (2d6):"));
}

#[test]
fn roll_step_is_reproducible_with_seed() {
    let first = dw()
        .args(["roll", "step", "19", "--crits", "--seed", "99"])
        .output()
        .unwrap();
    let second = dw()
        .args(["roll", "step", "19", "--crits", "--seed", "99"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn roll_step_rejects_out_of_range() {
    dw().args(["roll", "step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid step 0"));
    dw().args(["roll", "step", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid step 101"));
}

#[test]
fn roll_distro_accepts_shapes() {
    dw().args(["roll", "distro", "100", "--shape", "very flat", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100 (very flat):"));
}

#[test]
fn roll_distro_rejects_bad_input() {
    dw().args(["roll", "distro", "100", "--shape", "lumpy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shape"));
    dw().args(["roll", "distro", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid mean"));
}

#[test]
fn roll_abilities_prints_table() {
    dw().args(["roll", "abilities", "--seed", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dexterity"))
        .stdout(predicate::str::contains("Force of Personality"))
        .stdout(predicate::str::contains("Health Points"));
}
